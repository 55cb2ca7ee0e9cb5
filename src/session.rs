//! The game-state machine: owns every entity and runs one frame at a time.

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::collision;
use crate::config::GameConfig;
use crate::entities::{
    Direction, Enemy, Formation, FormationStep, Player, Projectile, ProjectileOwner,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won,
    Lost,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Active,
    Terminal(Outcome),
}

impl GameState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, GameState::Terminal(_))
    }
}

/// Already-debounced signals for one frame.
///
/// `direction` reflects held keys; the booleans are edge-triggered and are
/// true only on the frame the key went down.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub direction: Direction,
    pub fire: bool,
    pub reset: bool,
    pub quit: bool,
    pub pause: bool,
}

/// Read-only view of a session handed to the renderer after each update
#[derive(Debug, Clone, Copy)]
pub struct SessionSnapshot<'a> {
    pub state: GameState,
    pub player: &'a Player,
    pub enemies: &'a [Enemy],
    pub player_projectiles: &'a [Projectile],
    pub enemy_projectiles: &'a [Projectile],
    pub score: u32,
    pub lives: u32,
    pub frame: u64,
    pub screen_width: f32,
    pub screen_height: f32,
}

impl SessionSnapshot<'_> {
    pub fn living_enemies(&self) -> impl Iterator<Item = &Enemy> {
        self.enemies.iter().filter(|e| e.is_alive())
    }

    /// Banner shown once the game has ended
    pub fn terminal_message(&self) -> Option<&'static str> {
        match self.state {
            GameState::Active => None,
            GameState::Terminal(Outcome::Won) => Some("You won! - press R to play again"),
            GameState::Terminal(Outcome::Lost) => Some("You lost - press R to restart"),
        }
    }
}

/// A complete game: player, enemy grid, projectiles, score and state.
pub struct GameSession {
    config: GameConfig,
    player: Player,
    enemies: Vec<Enemy>,
    formation: Formation,
    player_projectiles: Vec<Projectile>,
    enemy_projectiles: Vec<Projectile>,
    score: u32,
    state: GameState,
    frame: u64,
    rng: StdRng,
}

impl GameSession {
    /// Start a session with a randomly seeded enemy-fire RNG
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_rng(&mut rand::rng()))
    }

    /// Start a session whose enemy fire is fully reproducible
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, rng: StdRng) -> Self {
        let mut session = Self {
            player: Player::new(&config),
            enemies: Vec::new(),
            formation: Formation::new(&config),
            player_projectiles: Vec::new(),
            enemy_projectiles: Vec::new(),
            score: 0,
            state: GameState::Active,
            frame: 0,
            rng,
            config,
        };
        session.spawn_enemies();
        session
    }

    /// Back to a fresh Active game. The RNG keeps its stream.
    pub fn reset(&mut self) {
        self.player = Player::new(&self.config);
        self.formation = Formation::new(&self.config);
        self.player_projectiles.clear();
        self.enemy_projectiles.clear();
        self.score = 0;
        self.state = GameState::Active;
        self.frame = 0;
        self.spawn_enemies();
        log::info!("session reset");
    }

    fn spawn_enemies(&mut self) {
        self.enemies = Enemy::spawn_grid(&self.config);
    }

    /// Fire a player shot. Ignored once the game has ended or while the
    /// maximum number of player shots is already in flight.
    pub fn player_shoot(&mut self) {
        if self.state.is_terminal()
            || self.player_projectiles.len() >= self.config.max_player_bullets
        {
            return;
        }
        let (x, y) = self.player.muzzle(self.config.muzzle_gap);
        self.player_projectiles.push(Projectile::new(
            x,
            y,
            self.config.bullet_speed,
            self.config.bullet_radius,
            ProjectileOwner::Player,
        ));
    }

    /// Apply one frame of input: edge-triggered commands first, then the
    /// simulation update.
    pub fn step(&mut self, input: &FrameInput) {
        if input.reset {
            self.reset();
        }
        if input.fire {
            self.player_shoot();
        }
        self.update(input.direction);
    }

    /// Advance the simulation by one frame. No-op in a terminal state.
    pub fn update(&mut self, direction: Direction) {
        if self.state.is_terminal() {
            return;
        }
        self.frame += 1;

        self.player.move_by(direction);

        let screen_height = self.config.screen_height;
        for projectile in self
            .player_projectiles
            .iter_mut()
            .chain(self.enemy_projectiles.iter_mut())
        {
            projectile.advance();
        }
        self.player_projectiles
            .retain(|p| !p.is_off_screen(screen_height));
        self.enemy_projectiles
            .retain(|p| !p.is_off_screen(screen_height));

        match self
            .formation
            .advance(&mut self.enemies, self.config.screen_width)
        {
            FormationStep::Cleared => {
                self.finish(Outcome::Won);
                return;
            }
            FormationStep::Dropped | FormationStep::Shifted => {}
        }

        let shots = Formation::fire(&self.enemies, &self.config, &mut self.rng);
        self.enemy_projectiles.extend(shots);

        let report = collision::resolve(
            &mut self.player,
            &mut self.enemies,
            &mut self.player_projectiles,
            &mut self.enemy_projectiles,
            self.config.kill_reward,
        );
        self.score += report.score_gained;

        if report.is_loss() {
            if report.breached {
                log::info!("enemies reached the defense line");
            }
            self.finish(Outcome::Lost);
        }
    }

    fn finish(&mut self, outcome: Outcome) {
        self.state = GameState::Terminal(outcome);
        log::info!(
            "game over: {:?} with score {} after {} frames",
            outcome,
            self.score,
            self.frame
        );
    }

    pub fn snapshot(&self) -> SessionSnapshot<'_> {
        SessionSnapshot {
            state: self.state,
            player: &self.player,
            enemies: &self.enemies,
            player_projectiles: &self.player_projectiles,
            enemy_projectiles: &self.enemy_projectiles,
            score: self.score,
            lives: self.player.lives,
            frame: self.frame,
            screen_width: self.config.screen_width,
            screen_height: self.config.screen_height,
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn formation(&self) -> &Formation {
        &self.formation
    }

    pub fn player_projectiles(&self) -> &[Projectile] {
        &self.player_projectiles
    }

    pub fn enemy_projectiles(&self) -> &[Projectile] {
        &self.enemy_projectiles
    }

    pub fn living_enemy_count(&self) -> usize {
        self.enemies.iter().filter(|e| e.is_alive()).count()
    }

    /// Mutable access for scripted test scenarios. Bypasses the session's
    /// invariants, so it stays out of the public docs.
    #[doc(hidden)]
    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    #[doc(hidden)]
    pub fn enemies_mut(&mut self) -> &mut [Enemy] {
        &mut self.enemies
    }

    #[doc(hidden)]
    pub fn enemy_projectiles_mut(&mut self) -> &mut Vec<Projectile> {
        &mut self.enemy_projectiles
    }

    #[doc(hidden)]
    pub fn player_projectiles_mut(&mut self) -> &mut Vec<Projectile> {
        &mut self.player_projectiles
    }
}
