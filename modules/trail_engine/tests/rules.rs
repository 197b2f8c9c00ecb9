use trail_engine::{Direction, GameConfig, GamePhase, GameSession, Trail};

fn session_with_seed(seed: u64) -> GameSession {
    GameSession::new(GameConfig::default(), seed)
}

fn small_board_config() -> GameConfig {
    // 5x5 grid
    GameConfig {
        window_size: 150.0,
        ..GameConfig::default()
    }
}

#[test]
fn safe_advances_leave_score_and_length_alone() {
    let mut session = session_with_seed(1);
    session.debug_set_food(0, 0);

    // A square loop from the center: 20 in-bounds steps, no food on the path.
    for _ in 0..5 {
        session.step(0.0);
    }
    session.steer(Direction::Up);
    for _ in 0..5 {
        session.step(0.0);
    }
    session.steer(Direction::Left);
    for _ in 0..5 {
        session.step(0.0);
    }
    session.steer(Direction::Down);
    for _ in 0..5 {
        session.step(0.0);
    }

    assert_eq!(session.phase(), GamePhase::Playing);
    assert_eq!(session.score(), 0);
    assert_eq!(session.trail().positions().len(), 1);
    assert_eq!(session.trail().head(), (10, 10));
}

#[test]
fn eating_food_scores_and_grows_on_the_next_step() {
    let mut session = session_with_seed(2);
    session.debug_set_food(11, 10);

    session.step(0.0);
    assert_eq!(session.score(), 1);
    assert_eq!(session.trail().head(), (11, 10));
    // Growth is pending, not applied yet.
    assert_eq!(session.trail().positions().len(), 1);
    // The replacement food must not sit on the trail.
    assert!(!session.trail().contains(session.food()));

    session.debug_set_food(0, 0);
    session.step(0.0);
    assert_eq!(session.trail().positions().len(), 2);
    assert_eq!(session.score(), 1);
}

#[test]
fn reverse_steer_is_ignored_for_every_heading() {
    let mut session = session_with_seed(3);
    session.debug_set_food(0, 0);

    assert_eq!(session.trail().heading(), Direction::Right);
    session.steer(Direction::Left);
    assert_eq!(session.trail().heading(), Direction::Right);

    session.steer(Direction::Up);
    session.steer(Direction::Down);
    assert_eq!(session.trail().heading(), Direction::Up);

    session.steer(Direction::Left);
    session.steer(Direction::Right);
    assert_eq!(session.trail().heading(), Direction::Left);

    session.steer(Direction::Down);
    session.steer(Direction::Up);
    assert_eq!(session.trail().heading(), Direction::Down);
}

#[test]
fn wall_hit_with_lives_left_starts_a_respawn() {
    let mut session = session_with_seed(4);
    session.debug_set_food(0, 0);
    session.debug_set_trail(&[(19, 10)], Direction::Right);

    session.step(10.0);
    assert_eq!(session.phase(), GamePhase::Respawning);
    assert_eq!(session.lives(), 1);

    // Neither stepping nor steering does anything while respawning.
    let head = session.trail().head();
    session.steer(Direction::Down);
    session.step(10.5);
    assert_eq!(session.trail().head(), head);
    assert_eq!(session.trail().heading(), Direction::Right);

    // Not done one tick before the deadline.
    assert!(!session.poll_respawn(12.9));
    assert_eq!(session.phase(), GamePhase::Respawning);

    // Done exactly at the deadline: back to the center, food relocated.
    assert!(session.poll_respawn(13.0));
    assert_eq!(session.phase(), GamePhase::Playing);
    assert_eq!(session.trail().head(), (10, 10));
    assert_eq!(session.trail().positions().len(), 1);
    assert!(!session.trail().contains(session.food()));

    // Completion fires once.
    assert!(!session.poll_respawn(13.1));
}

#[test]
fn wall_hit_on_the_last_life_ends_the_game() {
    let mut session = session_with_seed(5);
    session.debug_set_food(0, 0);

    session.debug_set_trail(&[(19, 10)], Direction::Right);
    session.step(10.0);
    assert!(session.poll_respawn(13.0));
    assert_eq!(session.lives(), 1);

    session.debug_set_trail(&[(0, 10)], Direction::Left);
    session.step(20.0);
    assert_eq!(session.phase(), GamePhase::GameOver);
    assert_eq!(session.lives(), 0);

    // Terminal until an explicit restart.
    session.steer(Direction::Up);
    session.step(21.0);
    assert_eq!(session.phase(), GamePhase::GameOver);

    session.restart(7);
    assert_eq!(session.phase(), GamePhase::Playing);
    assert_eq!(session.lives(), 2);
    assert_eq!(session.score(), 0);
    assert_eq!(session.trail().head(), (10, 10));
    assert!(!session.trail().contains(session.food()));
}

#[test]
fn running_into_the_body_ends_the_game() {
    let mut session = session_with_seed(6);
    session.debug_set_food(0, 0);
    session.debug_set_trail(
        &[(5, 5), (5, 6), (6, 6), (6, 5), (7, 5)],
        Direction::Down,
    );

    session.step(0.0);
    assert_eq!(session.phase(), GamePhase::GameOver);
    // Self-collision does not consume a life.
    assert_eq!(session.lives(), 2);
}

#[test]
fn moving_into_the_vacated_tail_cell_is_safe() {
    let mut session = session_with_seed(7);
    session.debug_set_food(0, 0);
    // Head at (5,5), tail at (5,6); the head steps into the cell the tail
    // leaves in the same advance.
    session.debug_set_trail(&[(5, 5), (6, 5), (6, 6), (5, 6)], Direction::Down);

    session.step(0.0);
    assert_eq!(session.phase(), GamePhase::Playing);
    assert_eq!(session.trail().head(), (5, 6));
}

#[test]
fn food_lands_on_the_only_free_cell_of_a_nearly_full_board() {
    let mut session = GameSession::new(small_board_config(), 8);

    // Serpentine covering 24 of 25 cells; head (3,4), tail (0,0), the open
    // cell is (4,4).
    let trail: Vec<(i32, i32)> = vec![
        (3, 4), (2, 4), (1, 4), (0, 4),
        (0, 3), (1, 3), (2, 3), (3, 3), (4, 3),
        (4, 2), (3, 2), (2, 2), (1, 2), (0, 2),
        (0, 1), (1, 1), (2, 1), (3, 1), (4, 1),
        (4, 0), (3, 0), (2, 0), (1, 0), (0, 0),
    ];
    session.debug_set_trail(&trail, Direction::Right);
    session.debug_set_food(4, 4);

    session.step(0.0);
    assert_eq!(session.score(), 1);
    assert_eq!(session.phase(), GamePhase::Playing);
    // The tail vacated (0,0); it is now the only unoccupied cell.
    assert_eq!(session.food(), (0, 0));
    assert!(!session.trail().contains(session.food()));
}

// ─────────────────────────────────────────────────────
// Trail entity on its own
// ─────────────────────────────────────────────────────

#[test]
fn grow_takes_effect_on_the_next_advance_only() {
    let mut trail = Trail::new((10, 10), 3.0);
    assert_eq!(trail.positions().len(), 1);

    trail.advance();
    assert_eq!(trail.positions().len(), 1);

    trail.grow();
    assert_eq!(trail.positions().len(), 1);
    trail.advance();
    assert_eq!(trail.positions().len(), 2);
    trail.advance();
    assert_eq!(trail.positions().len(), 2);
}

#[test]
fn advance_ticks_the_animation_phases() {
    let mut trail = Trail::new((10, 10), 3.0);
    assert_eq!(trail.hue_phase(), 0.0);
    assert_eq!(trail.rotation_phase(), 0.0);

    trail.advance();
    assert!((trail.hue_phase() - 0.02).abs() < 1e-6);
    assert!((trail.rotation_phase() - 5.0).abs() < 1e-6);

    // 72 more rotation ticks wrap past 360.
    for _ in 0..72 {
        trail.advance();
    }
    assert!(trail.rotation_phase() < 360.0);
}

#[test]
fn respawning_trail_does_not_advance() {
    let mut trail = Trail::new((10, 10), 3.0);
    trail.start_respawn(100.0);
    assert!(trail.is_respawning());

    let head = trail.head();
    trail.advance();
    assert_eq!(trail.head(), head);

    assert!(!trail.check_respawn_complete(102.9));
    assert!((trail.respawn_remaining(102.9) - 0.1).abs() < 1e-9);
    assert!(trail.check_respawn_complete(103.0));
    assert!(!trail.is_respawning());
    assert_eq!(trail.head(), (10, 10));

    // Idempotent when not respawning.
    assert!(!trail.check_respawn_complete(104.0));
}
