use snake_engine::{Cell, Command, Direction, Engine, Phase, Rules, Tick, dispatch};

type Fields = (Cell, Vec<Cell>, Cell, Direction, Direction, u32, u32, u32, bool, bool);

fn fields(engine: &Engine) -> Fields {
    let s = engine.snapshot();
    (
        s.head(),
        s.body().to_vec(),
        s.food(),
        s.direction(),
        s.pending_direction(),
        s.score(),
        s.high_score(),
        s.speed_ms(),
        s.game_over(),
        s.paused(),
    )
}

fn eat_once(engine: &mut Engine) -> Tick {
    let s = engine.snapshot();
    let ahead = s.head().step(s.pending_direction());
    engine.debug_set_food(ahead);
    engine.advance()
}

#[test]
fn plain_moves_keep_length() {
    let mut engine = Engine::new(Rules::default(), 11);
    engine.debug_set_food(Cell::new(0, 0));

    for _ in 0..5 {
        assert_eq!(engine.advance(), Tick::Moved);
        assert!(!engine.snapshot().game_over());
        assert_eq!(engine.snapshot().body().len(), 2);
    }
    assert_eq!(engine.snapshot().head(), Cell::new(20, 10));
}

#[test]
fn eating_food_scores_and_grows() {
    let mut engine = Engine::new(Rules::default(), 5);

    assert_eq!(eat_once(&mut engine), Tick::Ate);
    let s = engine.snapshot();
    assert_eq!(s.score(), 10);
    assert_eq!(s.high_score(), 10);
    assert_eq!(s.body().len(), 3);
    assert_ne!(s.food(), s.head());
    assert!(!s.body().contains(&s.food()));
}

#[test]
fn wall_collision_ends_game_past_the_edge() {
    let mut engine = Engine::new(Rules::default(), 2);
    engine.debug_set_snake(Cell::new(29, 4), &[Cell::new(28, 4), Cell::new(27, 4)], Direction::Right);
    engine.debug_set_food(Cell::new(0, 0));

    assert_eq!(engine.advance(), Tick::HitWall);
    let s = engine.snapshot();
    assert!(s.game_over());
    assert_eq!(s.phase(), Phase::GameOver);
    assert_eq!(s.head(), Cell::new(30, 4));
    assert_eq!(s.body(), &[Cell::new(29, 4), Cell::new(28, 4)]);
    assert_eq!(s.food(), Cell::new(0, 0));
}

#[test]
fn running_right_from_start_hits_the_wall() {
    let mut engine = Engine::new(Rules::default(), 9);
    let outcome = (0..40)
        .map(|_| engine.advance())
        .find(|t| t.is_collision());

    assert_eq!(outcome, Some(Tick::HitWall));
    assert_eq!(engine.snapshot().head(), Cell::new(30, 10));
    assert_eq!(engine.snapshot().body()[0], Cell::new(29, 10));
}

#[test]
fn self_collision_ends_game() {
    let mut engine = Engine::new(Rules::default(), 4);
    engine.debug_set_snake(
        Cell::new(5, 5),
        &[Cell::new(6, 5), Cell::new(6, 4), Cell::new(5, 4), Cell::new(4, 4)],
        Direction::Left,
    );
    engine.debug_set_food(Cell::new(0, 0));

    engine.set_pending_direction(Direction::Up);
    assert_eq!(engine.advance(), Tick::HitSelf);
    let s = engine.snapshot();
    assert!(s.game_over());
    assert_eq!(s.head(), Cell::new(5, 4));
    assert!(s.body().contains(&s.head()));
}

#[test]
fn reversal_is_rejected() {
    let mut engine = Engine::new(Rules::default(), 1);
    engine.debug_set_food(Cell::new(0, 0));

    engine.set_pending_direction(Direction::Left);
    assert_eq!(engine.snapshot().pending_direction(), Direction::Right);

    engine.advance();
    assert_eq!(engine.snapshot().head(), Cell::new(16, 10));
    assert_eq!(engine.snapshot().direction(), Direction::Right);
}

#[test]
fn reversal_checks_applied_direction_not_pending() {
    let mut engine = Engine::new(Rules::default(), 1);
    engine.debug_set_food(Cell::new(0, 0));

    // Up is queued but not applied yet, so Left is still a reversal of Right
    engine.set_pending_direction(Direction::Up);
    engine.set_pending_direction(Direction::Left);
    assert_eq!(engine.snapshot().pending_direction(), Direction::Up);
}

#[test]
fn reset_restores_start_but_keeps_high_score() {
    let mut engine = Engine::new(Rules::default(), 21);
    eat_once(&mut engine);
    eat_once(&mut engine);
    engine.debug_set_food(Cell::new(0, 0));
    engine.set_pending_direction(Direction::Up);
    for _ in 0..30 {
        engine.advance();
    }
    assert!(engine.snapshot().game_over());

    dispatch(&mut engine, Command::Restart);
    let s = engine.snapshot();
    assert_eq!(s.head(), Cell::new(15, 10));
    assert_eq!(s.body(), &[Cell::new(14, 10), Cell::new(13, 10)]);
    assert_eq!(s.score(), 0);
    assert_eq!(s.high_score(), 20);
    assert_eq!(s.speed_ms(), 150);
    assert!(!s.game_over());
    assert!(!s.paused());
    assert_eq!(s.direction(), Direction::Right);
}

#[test]
fn high_score_never_drops() {
    let mut engine = Engine::new(Rules::default(), 8);
    for _ in 0..3 {
        eat_once(&mut engine);
    }
    engine.reset();
    eat_once(&mut engine);
    assert_eq!(engine.snapshot().score(), 10);
    assert_eq!(engine.snapshot().high_score(), 30);
}

#[test]
fn paused_ticks_change_nothing() {
    let mut engine = Engine::new(Rules::default(), 13);
    dispatch(&mut engine, Command::TogglePause);
    let before = fields(&engine);

    for _ in 0..10 {
        assert_eq!(dispatch(&mut engine, Command::Tick), Some(Tick::Idle));
    }
    assert_eq!(fields(&engine), before);

    dispatch(&mut engine, Command::TogglePause);
    assert_eq!(engine.snapshot().phase(), Phase::Playing);
}

#[test]
fn finished_ticks_change_nothing() {
    let mut engine = Engine::new(Rules::default(), 13);
    engine.debug_set_snake(Cell::new(0, 0), &[Cell::new(1, 0)], Direction::Left);
    engine.advance();
    let before = fields(&engine);

    for _ in 0..10 {
        assert_eq!(engine.advance(), Tick::Idle);
        engine.toggle_pause();
        engine.set_pending_direction(Direction::Down);
    }
    assert_eq!(fields(&engine), before);
}

#[test]
fn speed_stops_at_floor() {
    let rules = Rules { grid_width: 100, grid_height: 3, ..Rules::default() };
    let mut engine = Engine::new(rules, 17);

    let mut speeds = Vec::new();
    for _ in 0..30 {
        assert_eq!(eat_once(&mut engine), Tick::Ate);
        speeds.push(engine.snapshot().speed_ms());
    }

    assert!(speeds.iter().all(|s| *s >= 50));
    assert!(speeds.windows(2).all(|w| w[1] <= w[0]));
    assert_eq!(speeds[18], 55);
    assert_eq!(speeds[19], 50);
    assert_eq!(*speeds.last().unwrap(), 50);
    assert_eq!(engine.snapshot().body().len(), 32);
}
