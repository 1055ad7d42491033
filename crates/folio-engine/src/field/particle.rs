//! A single node of the background particle network.

use glam::Vec2;

use crate::api::config::FieldParams;

/// A particle anchored to a home position.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Rest position, fixed at creation.
    pub home: Vec2,
    pub position: Vec2,
    pub velocity: Vec2,
    /// Draw radius. Has no effect on motion.
    pub radius: f32,
}

impl Particle {
    /// A particle at rest on its home.
    pub fn at_home(home: Vec2, radius: f32) -> Self {
        Particle {
            home,
            position: home,
            velocity: Vec2::ZERO,
            radius,
        }
    }

    /// Advance by one tick. Returns true if the pointer pushed this particle.
    pub fn tick(&mut self, pointer: Option<Vec2>, params: &FieldParams) -> bool {
        let mut influenced = false;

        if let Some(pointer) = pointer {
            let away = self.position - pointer;
            let d = away.length();
            if d < params.repel_distance {
                // Sitting exactly under the cursor: push along +X.
                let dir = away.try_normalize().unwrap_or(Vec2::X);
                self.velocity += dir * repulsion_force(d, params);
                influenced = true;
            }
        }

        if influenced {
            self.velocity *= params.pointer_damping;
        } else {
            let to_home = self.home - self.position;
            if to_home.length() > params.snap_distance {
                self.velocity += to_home * params.return_speed;
                self.velocity *= params.return_damping;
            } else {
                self.position = self.home;
                self.velocity = Vec2::ZERO;
            }
        }

        self.position += self.velocity;
        influenced
    }

    /// True once the particle has snapped onto its home.
    pub fn is_settled(&self) -> bool {
        self.position == self.home && self.velocity == Vec2::ZERO
    }
}

/// Magnitude of the pointer push at distance `d`. Linear falloff from
/// `repel_force` at zero to nothing at `repel_distance`.
pub fn repulsion_force(d: f32, params: &FieldParams) -> f32 {
    if d >= params.repel_distance {
        return 0.0;
    }
    (1.0 - d / params.repel_distance) * params.repel_force
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> FieldParams {
        FieldParams::default()
    }

    #[test]
    fn resting_particle_stays_put() {
        let mut p = Particle::at_home(Vec2::new(50.0, 50.0), 2.0);
        for _ in 0..10 {
            assert!(!p.tick(None, &params()));
        }
        assert!(p.is_settled());
    }

    #[test]
    fn pointer_pushes_away() {
        let mut p = Particle::at_home(Vec2::new(100.0, 100.0), 2.0);
        let influenced = p.tick(Some(Vec2::new(90.0, 100.0)), &params());
        assert!(influenced);
        assert!(p.position.x > 100.0, "should move away, got {}", p.position.x);
        assert_eq!(p.position.y, 100.0);
    }

    #[test]
    fn one_push_is_force_times_damping() {
        let mut p = Particle::at_home(Vec2::new(100.0, 0.0), 2.0);
        p.tick(Some(Vec2::new(35.0, 0.0)), &params());
        // d = 65 → force = 0.5 * 2.5 = 1.25, then damped by 0.8.
        assert!((p.velocity.x - 1.0).abs() < 1e-6, "vx = {}", p.velocity.x);
    }

    #[test]
    fn pointer_out_of_range_has_no_effect() {
        let mut p = Particle::at_home(Vec2::new(0.0, 0.0), 2.0);
        assert!(!p.tick(Some(Vec2::new(130.0, 0.0)), &params()));
        assert!(p.is_settled());
    }

    #[test]
    fn zero_distance_uses_fallback_direction() {
        let mut p = Particle::at_home(Vec2::new(10.0, 10.0), 2.0);
        assert!(p.tick(Some(Vec2::new(10.0, 10.0)), &params()));
        assert!(p.position.is_finite());
        assert!(p.velocity.x > 0.0);
        assert_eq!(p.velocity.y, 0.0);
    }

    #[test]
    fn repulsion_is_stronger_closer_in() {
        let p = params();
        let mut last = f32::INFINITY;
        for d in [0.0, 1.0, 30.0, 64.9, 100.0, 129.0] {
            let f = repulsion_force(d, &p);
            assert!(f < last, "force at {d} ({f}) should be below {last}");
            last = f;
        }
        assert_eq!(repulsion_force(130.0, &p), 0.0);
    }

    #[test]
    fn closer_particle_gets_faster_kick() {
        let pointer = Some(Vec2::ZERO);
        let mut near = Particle::at_home(Vec2::new(20.0, 0.0), 2.0);
        let mut far = Particle::at_home(Vec2::new(80.0, 0.0), 2.0);
        near.tick(pointer, &params());
        far.tick(pointer, &params());
        assert!(near.velocity.length() > far.velocity.length());
    }

    #[test]
    fn return_is_overdamped() {
        let mut p = Particle::at_home(Vec2::ZERO, 2.0);
        p.position = Vec2::new(100.0, 0.0);
        for _ in 0..2000 {
            p.tick(None, &params());
            assert!(p.position.x >= 0.0, "overshot home: {}", p.position.x);
        }
        assert!(p.is_settled());
    }
}
