mod enemy;
mod formation;
mod geometry;
mod player;
mod projectile;

// Re-export all public types
pub use enemy::Enemy;
pub use formation::{Formation, FormationStep};
pub use geometry::Aabb;
pub use player::{Direction, Player};
pub use projectile::{Projectile, ProjectileOwner};
