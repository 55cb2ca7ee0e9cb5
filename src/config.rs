//! Tunable constants for a game session.
//!
//! Everything is expressed in world units: an 800x600 playfield with the
//! origin at the top-left corner and y growing downwards.

pub const SCREEN_WIDTH: f32 = 800.0;
pub const SCREEN_HEIGHT: f32 = 600.0;
pub const FPS: u32 = 60;

pub const PLAYER_WIDTH: f32 = 60.0;
pub const PLAYER_HEIGHT: f32 = 20.0;
pub const PLAYER_SPEED: f32 = 6.0;
/// Distance from the bottom of the screen to the player's center line
pub const PLAYER_Y_OFFSET: f32 = 60.0;
pub const PLAYER_LIVES: u32 = 3;

pub const BULLET_SPEED: f32 = -9.0;
pub const BULLET_RADIUS: f32 = 4.0;
pub const MAX_PLAYER_BULLETS: usize = 1;
/// Gap between a shooter's edge and the projectile it spawns
pub const MUZZLE_GAP: f32 = 6.0;
/// Projectiles survive this far past the top and bottom edges
pub const CULL_MARGIN: f32 = 10.0;

pub const ENEMY_ROWS: usize = 4;
pub const ENEMY_COLS: usize = 8;
pub const ENEMY_X_GAP: f32 = 80.0;
pub const ENEMY_Y_GAP: f32 = 60.0;
pub const ENEMY_START_X: f32 = 80.0;
pub const ENEMY_START_Y: f32 = 60.0;
pub const ENEMY_WIDTH: f32 = 44.0;
pub const ENEMY_HEIGHT: f32 = 26.0;
pub const ENEMY_X_SPEED: f32 = 1.2;
pub const ENEMY_DROP: f32 = 20.0;

pub const ENEMY_BULLET_SPEED: f32 = 4.0;
/// Chance per living enemy per frame to fire
pub const ENEMY_SHOOT_PROB: f64 = 0.0025;

pub const KILL_REWARD: u32 = 10;

/// Environment variable that pins the enemy-fire RNG for a run
pub const SEED_ENV_VAR: &str = "INVADERS_SEED";

/// All the knobs a [`GameSession`](crate::GameSession) is built from.
///
/// `Default` yields the classic arcade layout; tests tweak single fields with
/// struct update syntax.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub screen_width: f32,
    pub screen_height: f32,
    pub player_width: f32,
    pub player_height: f32,
    pub player_speed: f32,
    pub player_y_offset: f32,
    pub player_lives: u32,
    pub bullet_speed: f32,
    pub bullet_radius: f32,
    pub max_player_bullets: usize,
    pub muzzle_gap: f32,
    pub enemy_rows: usize,
    pub enemy_cols: usize,
    pub enemy_x_gap: f32,
    pub enemy_y_gap: f32,
    pub enemy_start_x: f32,
    pub enemy_start_y: f32,
    pub enemy_width: f32,
    pub enemy_height: f32,
    pub enemy_x_speed: f32,
    pub enemy_drop: f32,
    pub enemy_bullet_speed: f32,
    pub enemy_shoot_prob: f64,
    pub kill_reward: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            player_speed: PLAYER_SPEED,
            player_y_offset: PLAYER_Y_OFFSET,
            player_lives: PLAYER_LIVES,
            bullet_speed: BULLET_SPEED,
            bullet_radius: BULLET_RADIUS,
            max_player_bullets: MAX_PLAYER_BULLETS,
            muzzle_gap: MUZZLE_GAP,
            enemy_rows: ENEMY_ROWS,
            enemy_cols: ENEMY_COLS,
            enemy_x_gap: ENEMY_X_GAP,
            enemy_y_gap: ENEMY_Y_GAP,
            enemy_start_x: ENEMY_START_X,
            enemy_start_y: ENEMY_START_Y,
            enemy_width: ENEMY_WIDTH,
            enemy_height: ENEMY_HEIGHT,
            enemy_x_speed: ENEMY_X_SPEED,
            enemy_drop: ENEMY_DROP,
            enemy_bullet_speed: ENEMY_BULLET_SPEED,
            enemy_shoot_prob: ENEMY_SHOOT_PROB,
            kill_reward: KILL_REWARD,
        }
    }
}

impl GameConfig {
    /// Total number of enemies in a freshly spawned grid
    pub fn grid_size(&self) -> usize {
        self.enemy_rows * self.enemy_cols
    }

    /// Reads the optional fixed RNG seed from the environment.
    ///
    /// Unset or unparsable values fall back to a random seed.
    pub fn seed_from_env() -> Option<u64> {
        std::env::var(SEED_ENV_VAR)
            .ok()
            .and_then(|raw| raw.trim().parse().ok())
    }
}
