use rand::Rng;

use super::enemy::Enemy;
use super::projectile::{Projectile, ProjectileOwner};
use crate::config::GameConfig;

/// What the formation did on a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormationStep {
    /// Every enemy is dead; nothing moved
    Cleared,
    /// Hit an edge: direction flipped and living enemies dropped
    Dropped,
    /// Slid horizontally by one step
    Shifted,
}

/// Shared movement state for the enemy block. The enemies themselves live in
/// the session; the formation only knows how to move them as one rigid body.
#[derive(Debug, Clone, PartialEq)]
pub struct Formation {
    /// Movement direction (-1 left, 1 right)
    pub direction: f32,
    /// Horizontal distance per tick
    pub speed: f32,
    /// Vertical distance added on each reversal
    pub drop: f32,
}

impl Formation {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            direction: 1.0, // Start moving right
            speed: config.enemy_x_speed,
            drop: config.enemy_drop,
        }
    }

    /// Move the living enemies one tick.
    ///
    /// Reversal and horizontal movement never happen on the same tick: an
    /// edge hit only flips the direction and drops the block.
    pub fn advance(&mut self, enemies: &mut [Enemy], screen_width: f32) -> FormationStep {
        let mut living = enemies.iter().filter(|e| e.is_alive()).peekable();
        let Some(first) = living.peek() else {
            return FormationStep::Cleared;
        };

        let half_width = first.width / 2.0;
        let (min_x, max_x) = living.fold((f32::MAX, f32::MIN), |(lo, hi), e| {
            (lo.min(e.x), hi.max(e.x))
        });

        let hit_right = self.direction > 0.0 && max_x + half_width >= screen_width;
        let hit_left = self.direction < 0.0 && min_x - half_width <= 0.0;

        if hit_right || hit_left {
            self.direction = -self.direction;
            for enemy in enemies.iter_mut().filter(|e| e.is_alive()) {
                enemy.y += self.drop;
            }
            log::trace!(
                "formation reversed at x=[{min_x:.1}, {max_x:.1}], now heading {}",
                if self.direction > 0.0 { "right" } else { "left" }
            );
            FormationStep::Dropped
        } else {
            let dx = self.direction * self.speed;
            for enemy in enemies.iter_mut().filter(|e| e.is_alive()) {
                enemy.x += dx;
            }
            FormationStep::Shifted
        }
    }

    /// Roll an independent fire chance for every living enemy and return the
    /// shots that came up.
    pub fn fire(enemies: &[Enemy], config: &GameConfig, rng: &mut impl Rng) -> Vec<Projectile> {
        enemies
            .iter()
            .filter(|e| e.is_alive())
            .filter(|_| rng.random_bool(config.enemy_shoot_prob))
            .map(|e| {
                Projectile::new(
                    e.x,
                    e.bottom() + config.muzzle_gap,
                    config.enemy_bullet_speed,
                    config.bullet_radius,
                    ProjectileOwner::Enemy,
                )
            })
            .collect()
    }
}
