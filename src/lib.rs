// Library exports for testing
pub use collision::CollisionReport;
pub use config::GameConfig;
pub use entities::{
    Aabb, Direction, Enemy, Formation, FormationStep, Player, Projectile, ProjectileOwner,
};
pub use session::{FrameInput, GameSession, GameState, Outcome, SessionSnapshot};

pub mod app;
pub mod clock;
pub mod collision;
pub mod config;
pub mod entities;
pub mod input;
pub mod renderer;
pub mod session;
