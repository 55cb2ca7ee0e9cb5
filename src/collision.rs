//! Per-frame collision resolution.
//!
//! Runs after every entity has moved for the frame, so all tests see
//! post-move positions. Projectiles are removed with `retain`, which makes
//! removal idempotent: a shot that was already culled simply is not there.

use crate::entities::{Enemy, Player, Projectile};

/// Everything that happened during one resolution pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollisionReport {
    pub kills: u32,
    pub score_gained: u32,
    pub player_hits: u32,
    /// The player ran out of lives this frame
    pub player_destroyed: bool,
    /// A living enemy reached the player's defense line
    pub breached: bool,
}

impl CollisionReport {
    /// Either loss condition alone ends the game
    pub fn is_loss(&self) -> bool {
        self.player_destroyed || self.breached
    }
}

/// Resolve all cross-entity hits for one frame.
pub fn resolve(
    player: &mut Player,
    enemies: &mut [Enemy],
    player_projectiles: &mut Vec<Projectile>,
    enemy_projectiles: &mut Vec<Projectile>,
    kill_reward: u32,
) -> CollisionReport {
    let mut report = CollisionReport::default();

    // Player projectiles hitting enemies: at most one kill per shot
    player_projectiles.retain(|projectile| {
        let hitbox = projectile.bounding_box();
        match enemies
            .iter_mut()
            .find(|e| e.is_alive() && hitbox.intersects(&e.bounding_box()))
        {
            Some(enemy) => {
                enemy.kill();
                report.kills += 1;
                report.score_gained += kill_reward;
                log::debug!("enemy destroyed at ({:.1}, {:.1})", enemy.x, enemy.y);
                false
            }
            None => true,
        }
    });

    // Enemy projectiles hitting the player
    let player_box = player.bounding_box();
    enemy_projectiles.retain(|projectile| {
        if projectile.bounding_box().intersects(&player_box) {
            report.player_hits += 1;
            if player.take_hit() {
                report.player_destroyed = true;
            }
            log::debug!("player hit, {} lives left", player.lives);
            false
        } else {
            true
        }
    });

    // Enemies reaching the defense line
    let defense_line = player.defense_line();
    report.breached = enemies
        .iter()
        .any(|e| e.is_alive() && e.bottom() >= defense_line);

    report
}
