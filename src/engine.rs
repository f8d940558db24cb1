use std::time::Duration;

use anyhow::{Result, bail};
use log::{debug, error, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

// Rejection samples tried before falling back to a scan of the free cells
const MAX_FOOD_ATTEMPTS: usize = 1024;
// head plus the two trailing segments
const INITIAL_SNAKE_LEN: i64 = 3;
pub const MAX_FOOD_SCORE: u32 = 1_000_000;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Cell { x: self.x + dx, y: self.y + dy }
    }

    pub fn in_bounds(self, width: i32, height: i32) -> bool {
        self.x >= 0 && self.y >= 0 && self.x < width && self.y < height
    }
}

/// Tunable game rules. The defaults are the classic 30x20 board that starts
/// at 150ms per tick and speeds up by 5ms per food down to 50ms.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rules {
    pub grid_width: i32,
    pub grid_height: i32,
    pub initial_interval_ms: u32,
    pub interval_step_ms: u32,
    pub min_interval_ms: u32,
    pub food_score: u32,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            grid_width: 30,
            grid_height: 20,
            initial_interval_ms: 150,
            interval_step_ms: 5,
            min_interval_ms: 50,
            food_score: 10,
        }
    }
}

impl Rules {
    /// Checks that a game can start on this board and that the numbers stay sane.
    pub fn validate(&self) -> Result<()> {
        if self.grid_width < 4 {
            bail!("grid_width must be at least 4, got {}", self.grid_width);
        }
        if self.grid_height < 1 {
            bail!("grid_height must be at least 1, got {}", self.grid_height);
        }
        if i64::from(self.grid_width) * i64::from(self.grid_height) <= INITIAL_SNAKE_LEN {
            bail!("a {}x{} grid has no room for food", self.grid_width, self.grid_height);
        }
        if self.min_interval_ms == 0 {
            bail!("min_interval_ms must be positive");
        }
        if self.initial_interval_ms < self.min_interval_ms {
            bail!(
                "initial_interval_ms ({}) is below min_interval_ms ({})",
                self.initial_interval_ms,
                self.min_interval_ms
            );
        }
        if self.food_score > MAX_FOOD_SCORE {
            bail!("food_score must be at most {MAX_FOOD_SCORE}, got {}", self.food_score);
        }
        Ok(())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    Playing,
    Paused,
    GameOver,
}

/// What a single call to [`Engine::advance`] did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Tick {
    /// Paused or already over; nothing changed.
    Idle,
    Moved,
    Ate,
    HitWall,
    HitSelf,
}

impl Tick {
    pub fn is_collision(self) -> bool {
        matches!(self, Tick::HitWall | Tick::HitSelf)
    }
}

/// The snake simulation. Time only moves through [`Engine::advance`]; the
/// host decides when to call it, using [`Snapshot::speed`] as the period.
pub struct Engine {
    rules: Rules,
    rng: StdRng,
    head: Cell,
    // index 0 sits right behind the head, the last entry is the tail
    body: Vec<Cell>,
    food: Cell,
    direction: Direction,
    pending_direction: Direction,
    score: u32,
    high_score: u32,
    speed_ms: u32,
    game_over: bool,
    paused: bool,
}

impl Engine {
    /// Creates an engine whose food placement is fully determined by `seed`.
    /// Rules that fail [`Rules::validate`] are replaced by the defaults.
    pub fn new(rules: Rules, seed: u64) -> Self {
        Self::with_rng(rules, StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy(rules: Rules) -> Self {
        Self::with_rng(rules, StdRng::from_entropy())
    }

    fn with_rng(rules: Rules, rng: StdRng) -> Self {
        let rules = match rules.validate() {
            Ok(()) => rules,
            Err(err) => {
                error!("{err:#}, playing with default rules");
                Rules::default()
            }
        };
        let mut engine = Self {
            speed_ms: rules.initial_interval_ms,
            rules,
            rng,
            head: Cell::default(),
            body: Vec::new(),
            food: Cell::default(),
            direction: Direction::Right,
            pending_direction: Direction::Right,
            score: 0,
            high_score: 0,
            game_over: false,
            paused: false,
        };
        engine.reset();
        engine
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    pub fn reset(&mut self) {
        self.game_over = false;
        self.paused = false;
        self.score = 0;
        self.speed_ms = self.rules.initial_interval_ms;
        self.direction = Direction::Right;
        self.pending_direction = Direction::Right;

        self.head = Cell::new(self.rules.grid_width / 2, self.rules.grid_height / 2);
        self.body.clear();
        self.body.push(Cell::new(self.head.x - 1, self.head.y));
        self.body.push(Cell::new(self.head.x - 2, self.head.y));

        self.place_food();
        info!("new game, high score {}", self.high_score);
    }

    /// Queues `direction` for the next tick. A 180° turn is dropped silently.
    pub fn set_pending_direction(&mut self, direction: Direction) {
        if self.game_over || direction == self.direction.opposite() {
            return;
        }
        self.pending_direction = direction;
    }

    pub fn toggle_pause(&mut self) {
        if self.game_over {
            return;
        }
        self.paused = !self.paused;
        debug!("paused: {}", self.paused);
    }

    pub fn advance(&mut self) -> Tick {
        if self.game_over || self.paused {
            return Tick::Idle;
        }

        self.direction = self.pending_direction;

        // Pull the body forward into the old head's place
        for i in (1..self.body.len()).rev() {
            self.body[i] = self.body[i - 1];
        }
        if let Some(first) = self.body.first_mut() {
            *first = self.head;
        }

        let old_head = self.head;
        self.head = old_head.step(self.direction);

        if !self.head.in_bounds(self.rules.grid_width, self.rules.grid_height) {
            return self.finish(Tick::HitWall);
        }
        if self.body.contains(&self.head) {
            return self.finish(Tick::HitSelf);
        }
        if self.head != self.food {
            return Tick::Moved;
        }

        self.score = self.score.saturating_add(self.rules.food_score);
        self.high_score = self.high_score.max(self.score);

        // The new tail overlaps the old one until the next tick pulls it along
        let tail = self.body.last().copied().unwrap_or(old_head);
        self.body.push(tail);

        if self.speed_ms > self.rules.min_interval_ms {
            self.speed_ms = self
                .speed_ms
                .saturating_sub(self.rules.interval_step_ms)
                .max(self.rules.min_interval_ms);
            debug!("speed now {}ms", self.speed_ms);
        }

        self.place_food();
        debug!("ate food, score {} length {}", self.score, self.body.len() + 1);
        Tick::Ate
    }

    fn finish(&mut self, outcome: Tick) -> Tick {
        self.game_over = true;
        info!("game over ({outcome:?}) with score {}", self.score);
        outcome
    }

    fn is_occupied(&self, cell: Cell) -> bool {
        cell == self.head || self.body.contains(&cell)
    }

    fn place_food(&mut self) {
        let (width, height) = (self.rules.grid_width, self.rules.grid_height);

        for _ in 0..MAX_FOOD_ATTEMPTS {
            let cell = Cell::new(self.rng.gen_range(0..width), self.rng.gen_range(0..height));
            if !self.is_occupied(cell) {
                self.food = cell;
                return;
            }
        }

        let free: Vec<Cell> = (0..height)
            .flat_map(|y| (0..width).map(move |x| Cell::new(x, y)))
            .filter(|c| !self.is_occupied(*c))
            .collect();
        if free.is_empty() {
            warn!("no free cell left for food, board is full");
            return;
        }
        self.food = free[self.rng.gen_range(0..free.len())];
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot { engine: self }
    }

    #[cfg(any(test, feature = "test-util"))]
    pub fn debug_set_snake(&mut self, head: Cell, body: &[Cell], direction: Direction) {
        self.head = head;
        self.body = body.to_vec();
        self.direction = direction;
        self.pending_direction = direction;
    }

    #[cfg(any(test, feature = "test-util"))]
    pub fn debug_set_food(&mut self, food: Cell) {
        self.food = food;
    }
}

/// Read-only view handed to the renderer once per frame. Holding one keeps
/// the engine borrowed, so no operation can run while a frame is being drawn.
#[derive(Copy, Clone)]
pub struct Snapshot<'a> {
    engine: &'a Engine,
}

impl<'a> Snapshot<'a> {
    pub fn grid_width(&self) -> i32 {
        self.engine.rules.grid_width
    }

    pub fn grid_height(&self) -> i32 {
        self.engine.rules.grid_height
    }

    pub fn head(&self) -> Cell {
        self.engine.head
    }

    pub fn body(&self) -> &'a [Cell] {
        &self.engine.body
    }

    pub fn food(&self) -> Cell {
        self.engine.food
    }

    pub fn direction(&self) -> Direction {
        self.engine.direction
    }

    pub fn pending_direction(&self) -> Direction {
        self.engine.pending_direction
    }

    pub fn score(&self) -> u32 {
        self.engine.score
    }

    pub fn high_score(&self) -> u32 {
        self.engine.high_score
    }

    /// Tick interval in milliseconds.
    pub fn speed_ms(&self) -> u32 {
        self.engine.speed_ms
    }

    pub fn speed(&self) -> Duration {
        Duration::from_millis(u64::from(self.engine.speed_ms))
    }

    pub fn game_over(&self) -> bool {
        self.engine.game_over
    }

    pub fn paused(&self) -> bool {
        self.engine.paused
    }

    pub fn phase(&self) -> Phase {
        if self.engine.game_over {
            Phase::GameOver
        } else if self.engine.paused {
            Phase::Paused
        } else {
            Phase::Playing
        }
    }
}
