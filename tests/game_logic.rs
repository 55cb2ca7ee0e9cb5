/// Integration tests for game logic
///
/// These drive a whole `GameSession` through its public API and check the
/// frame-level rules: scoring, formation movement, win/loss and reset.
use space_invaders::{
    Direction, Enemy, FrameInput, GameConfig, GameSession, GameState, Outcome, Projectile,
    ProjectileOwner,
};

/// Enemies never shoot, so scenarios only change when the test says so
fn quiet_session() -> GameSession {
    let config = GameConfig {
        enemy_shoot_prob: 0.0,
        ..GameConfig::default()
    };
    GameSession::with_seed(config, 42)
}

fn dead_count(session: &GameSession) -> usize {
    session.enemies().iter().filter(|e| !e.is_alive()).count()
}

#[test]
fn test_grid_spawns_at_configured_positions() {
    let session = quiet_session();
    let config = session.config();
    let enemies = session.enemies();
    assert_eq!(enemies.len(), config.enemy_rows * config.enemy_cols);

    for (idx, enemy) in enemies.iter().enumerate() {
        let row = idx / config.enemy_cols;
        let col = idx % config.enemy_cols;
        assert_eq!(enemy.x, config.enemy_start_x + col as f32 * config.enemy_x_gap);
        assert_eq!(enemy.y, config.enemy_start_y + row as f32 * config.enemy_y_gap);
        assert!(enemy.is_alive());
    }
}

#[test]
fn test_single_shot_kills_exactly_one_enemy() {
    let mut session = quiet_session();
    let target = session.enemies()[10].clone();

    // After this frame's advance (-9) the shot sits on the target's center
    session.player_projectiles_mut().push(Projectile::new(
        target.x,
        target.y + 9.0,
        -9.0,
        4.0,
        ProjectileOwner::Player,
    ));
    session.update(Direction::Idle);

    assert!(!session.enemies()[10].is_alive());
    assert_eq!(dead_count(&session), 1);
    assert!(session.player_projectiles().is_empty());
    assert_eq!(session.score(), 10);
    assert_eq!(session.state(), GameState::Active);
}

#[test]
fn test_dead_enemy_stays_in_collection() {
    let mut session = quiet_session();
    session.enemies_mut()[0].kill();
    let before = session.enemies()[0].clone();

    for _ in 0..10 {
        session.update(Direction::Idle);
    }

    assert_eq!(session.enemies().len(), 32);
    assert_eq!(session.enemies()[0], before);
}

#[test]
fn test_formation_reversal_drops_without_shifting() {
    let mut session = quiet_session();

    let mut frames = 0;
    loop {
        let before: Vec<Enemy> = session.enemies().to_vec();
        session.update(Direction::Idle);
        frames += 1;
        assert!(frames < 1000, "formation never reached the edge");

        if session.formation().direction < 0.0 {
            for (now, prev) in session.enemies().iter().zip(&before) {
                assert_eq!(now.x, prev.x);
                assert_eq!(now.y, prev.y + 20.0);
            }
            break;
        }
    }
}

#[test]
fn test_killing_last_enemy_wins_next_frame() {
    let mut session = quiet_session();
    let last = session.enemies().len() - 1;
    for enemy in &mut session.enemies_mut()[..last] {
        enemy.kill();
    }

    let target = session.enemies()[last].clone();
    session.player_projectiles_mut().push(Projectile::new(
        target.x,
        target.y + 9.0,
        -9.0,
        4.0,
        ProjectileOwner::Player,
    ));
    session.update(Direction::Idle);
    assert_eq!(session.living_enemy_count(), 0);
    assert_eq!(session.state(), GameState::Active);

    session.update(Direction::Idle);
    assert_eq!(session.state(), GameState::Terminal(Outcome::Won));
}

#[test]
fn test_losing_all_lives_ends_game() {
    let mut session = quiet_session();

    for expected_lives in (0..3).rev() {
        let (x, y) = (session.player().x, session.player().y);
        session
            .enemy_projectiles_mut()
            .push(Projectile::new(x, y - 4.0, 4.0, 4.0, ProjectileOwner::Enemy));
        session.update(Direction::Idle);
        assert_eq!(session.player().lives, expected_lives);
    }

    assert_eq!(session.state(), GameState::Terminal(Outcome::Lost));

    // Frozen: further hits are impossible and lives stay floored at 0
    let (x, y) = (session.player().x, session.player().y);
    session
        .enemy_projectiles_mut()
        .push(Projectile::new(x, y, 4.0, 4.0, ProjectileOwner::Enemy));
    session.update(Direction::Idle);
    assert_eq!(session.player().lives, 0);
}

#[test]
fn test_enemy_reaching_defense_line_loses_with_lives_left() {
    let mut session = quiet_session();
    let defense_line = session.player().defense_line();
    let enemy = &mut session.enemies_mut()[31];
    enemy.y = defense_line - enemy.height / 2.0;

    session.update(Direction::Idle);
    assert_eq!(session.state(), GameState::Terminal(Outcome::Lost));
    assert_eq!(session.player().lives, 3);
}

#[test]
fn test_reset_after_loss_restores_everything() {
    let mut session = GameSession::with_seed(
        GameConfig {
            enemy_shoot_prob: 0.05,
            ..GameConfig::default()
        },
        7,
    );

    // Score a kill, get shot down, leave shots in flight
    let target = session.enemies()[0].clone();
    session.player_projectiles_mut().push(Projectile::new(
        target.x,
        target.y + 9.0,
        -9.0,
        4.0,
        ProjectileOwner::Player,
    ));
    session.update(Direction::Right);
    assert_eq!(session.score(), 10);

    session.player_mut().lives = 1;
    let (x, y) = (session.player().x, session.player().y);
    session
        .enemy_projectiles_mut()
        .push(Projectile::new(x, y - 4.0, 4.0, 4.0, ProjectileOwner::Enemy));
    session.update(Direction::Idle);
    assert_eq!(session.state(), GameState::Terminal(Outcome::Lost));

    session.reset();

    assert_eq!(session.state(), GameState::Active);
    assert_eq!(session.player().lives, 3);
    assert_eq!(session.player().x, 400.0);
    assert_eq!(session.score(), 0);
    assert!(session.player_projectiles().is_empty());
    assert!(session.enemy_projectiles().is_empty());
    assert_eq!(session.living_enemy_count(), 32);
    assert_eq!(session.formation().direction, 1.0);
    assert_eq!(session.enemies()[0].x, 80.0);
}

#[test]
fn test_only_one_player_shot_in_flight() {
    let mut session = quiet_session();
    let fire = FrameInput {
        fire: true,
        ..FrameInput::default()
    };

    for _ in 0..5 {
        session.step(&fire);
        assert_eq!(session.player_projectiles().len(), 1);
    }
}

#[test]
fn test_player_can_clear_enemies_by_shooting() {
    let mut session = quiet_session();
    let fire = FrameInput {
        fire: true,
        ..FrameInput::default()
    };

    for _ in 0..600 {
        session.step(&fire);
        assert_eq!(session.score() as usize, dead_count(&session) * 10);
    }
    assert!(session.score() > 0);
}

// Property-based tests
#[test]
fn test_player_shot_culled_above_screen_cannot_kill() {
    let mut session = quiet_session();
    // Enemy box spans y -27..-1; the shot lands at -15, past the -10 cull line
    session.enemies_mut()[0].y = -14.0;
    let x = session.enemies()[0].x;
    session.player_projectiles_mut().push(Projectile::new(
        x,
        -6.0,
        -9.0,
        4.0,
        ProjectileOwner::Player,
    ));

    session.update(Direction::Idle);

    assert!(session.enemies()[0].is_alive());
    assert_eq!(dead_count(&session), 0);
    assert!(session.player_projectiles().is_empty());
    assert_eq!(session.score(), 0);
    assert_eq!(session.state(), GameState::Active);
}

#[test]
fn test_enemy_shot_culled_below_screen_cannot_hit() {
    let mut session = quiet_session();
    // Player box spans y 600..620; the shot lands at 612, past the 610 cull line
    session.player_mut().y = 610.0;
    let x = session.player().x;
    session.enemy_projectiles_mut().push(Projectile::new(
        x,
        608.0,
        4.0,
        4.0,
        ProjectileOwner::Enemy,
    ));

    session.update(Direction::Idle);

    assert_eq!(session.player().lives, 3);
    assert!(session.enemy_projectiles().is_empty());
    assert_eq!(session.state(), GameState::Active);
}

mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn frame_input() -> impl Strategy<Value = FrameInput> {
        (
            prop::sample::select(vec![Direction::Left, Direction::Idle, Direction::Right]),
            any::<bool>(),
        )
            .prop_map(|(direction, fire)| FrameInput {
                direction,
                fire,
                ..FrameInput::default()
            })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn test_session_invariants_hold(
            seed in any::<u64>(),
            inputs in prop::collection::vec(frame_input(), 0..400)
        ) {
            let config = GameConfig {
                enemy_shoot_prob: 0.01,
                ..GameConfig::default()
            };
            let mut session = GameSession::with_seed(config.clone(), seed);
            let half_width = config.player_width / 2.0;

            for input in &inputs {
                session.step(input);

                let player = session.player();
                prop_assert!(player.x >= half_width);
                prop_assert!(player.x <= config.screen_width - half_width);
                prop_assert!(player.lives <= config.player_lives);
                prop_assert!(session.player_projectiles().len() <= config.max_player_bullets);
                prop_assert_eq!(session.score() as usize, dead_count(&session) * 10);
                prop_assert_eq!(session.enemies().len(), config.grid_size());

                if session.player().lives == 0 {
                    prop_assert_eq!(session.state(), GameState::Terminal(Outcome::Lost));
                }
            }
        }
    }
}
