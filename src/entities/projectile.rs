use super::geometry::Aabb;
use crate::config::CULL_MARGIN;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectileOwner {
    Player,
    Enemy,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Projectile {
    pub x: f32,
    pub y: f32,
    /// Vertical velocity per frame; negative moves up the screen
    pub velocity_y: f32,
    pub radius: f32,
    pub owner: ProjectileOwner,
}

impl Projectile {
    pub fn new(x: f32, y: f32, velocity_y: f32, radius: f32, owner: ProjectileOwner) -> Self {
        Self {
            x,
            y,
            velocity_y,
            radius,
            owner,
        }
    }

    pub fn advance(&mut self) {
        self.y += self.velocity_y;
    }

    pub fn is_off_screen(&self, screen_height: f32) -> bool {
        self.y < -CULL_MARGIN || self.y > screen_height + CULL_MARGIN
    }

    pub fn bounding_box(&self) -> Aabb {
        let side = self.radius * 2.0;
        Aabb::from_center(self.x, self.y, side, side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projectile_new() {
        let projectile = Projectile::new(10.0, 20.0, -9.0, 4.0, ProjectileOwner::Player);
        assert_eq!(projectile.x, 10.0);
        assert_eq!(projectile.y, 20.0);
        assert_eq!(projectile.owner, ProjectileOwner::Player);
    }

    #[test]
    fn test_player_projectile_moves_up() {
        let mut projectile = Projectile::new(10.0, 100.0, -9.0, 4.0, ProjectileOwner::Player);
        projectile.advance();
        assert_eq!(projectile.y, 91.0);
        assert_eq!(projectile.x, 10.0);
    }

    #[test]
    fn test_enemy_projectile_moves_down() {
        let mut projectile = Projectile::new(10.0, 100.0, 4.0, 4.0, ProjectileOwner::Enemy);
        projectile.advance();
        assert_eq!(projectile.y, 104.0);
    }

    #[test]
    fn test_off_screen_bounds() {
        let at_top = Projectile::new(0.0, -10.0, -9.0, 4.0, ProjectileOwner::Player);
        assert!(!at_top.is_off_screen(600.0));

        let past_top = Projectile::new(0.0, -10.5, -9.0, 4.0, ProjectileOwner::Player);
        assert!(past_top.is_off_screen(600.0));

        let at_bottom = Projectile::new(0.0, 610.0, 4.0, 4.0, ProjectileOwner::Enemy);
        assert!(!at_bottom.is_off_screen(600.0));

        let past_bottom = Projectile::new(0.0, 610.5, 4.0, 4.0, ProjectileOwner::Enemy);
        assert!(past_bottom.is_off_screen(600.0));
    }

    #[test]
    fn test_bounding_box_is_square_around_center() {
        let projectile = Projectile::new(50.0, 50.0, -9.0, 4.0, ProjectileOwner::Player);
        let aabb = projectile.bounding_box();
        assert_eq!(aabb, Aabb::new(46.0, 46.0, 8.0, 8.0));
    }

    // Property-based tests
    #[cfg(test)]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn test_projectile_moves_in_direction_of_velocity(
                initial_y in 0.0f32..600.0,
                owner in prop::sample::select(vec![ProjectileOwner::Player, ProjectileOwner::Enemy])
            ) {
                let velocity = match owner {
                    ProjectileOwner::Player => -9.0,
                    ProjectileOwner::Enemy => 4.0,
                };
                let mut projectile = Projectile::new(100.0, initial_y, velocity, 4.0, owner);
                projectile.advance();

                match owner {
                    ProjectileOwner::Player => {
                        // Player projectiles move up (y decreases)
                        prop_assert!(projectile.y < initial_y);
                    }
                    ProjectileOwner::Enemy => {
                        // Enemy projectiles move down (y increases)
                        prop_assert!(projectile.y > initial_y);
                    }
                }
            }

            #[test]
            fn test_projectile_culled_once_past_bounds(initial_y in 0.0f32..600.0) {
                let mut projectile =
                    Projectile::new(100.0, initial_y, 4.0, 4.0, ProjectileOwner::Enemy);
                let mut frames = 0;
                while !projectile.is_off_screen(600.0) {
                    projectile.advance();
                    frames += 1;
                    prop_assert!(frames < 1000);
                }
                prop_assert!(projectile.y > 610.0);
                prop_assert!(projectile.y <= 614.0);
            }
        }
    }
}
