//! Pairwise proximity links between particles.
//!
//! Every frame is recomputed from scratch; there is no persistent edge state.
//! Cost is O(n²) in the particle count, which is fine for the few hundred
//! particles a page background uses.

use crate::api::config::FieldParams;
use crate::api::types::ProximityLink;
use crate::field::particle::Particle;

/// Opacity for a pair at distance `d`, or `None` if they are too far apart.
pub fn link_opacity(d: f32, params: &FieldParams) -> Option<f32> {
    if d < params.connection_distance {
        Some((1.0 - d / params.connection_distance) * params.link_opacity)
    } else {
        None
    }
}

/// Visit each linked pair once, `i < j`.
pub fn for_each_link(
    particles: &[Particle],
    params: &FieldParams,
    mut f: impl FnMut(ProximityLink),
) {
    for (i, a) in particles.iter().enumerate() {
        for (j, b) in particles.iter().enumerate().skip(i + 1) {
            let d = a.position.distance(b.position);
            if let Some(opacity) = link_opacity(d, params) {
                f(ProximityLink {
                    i: i as u32,
                    j: j as u32,
                    opacity,
                });
            }
        }
    }
}

/// Collect all links for the current positions.
pub fn compute_links(particles: &[Particle], params: &FieldParams) -> Vec<ProximityLink> {
    let mut links = Vec::new();
    for_each_link(particles, params, |link| links.push(link));
    links
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn at(x: f32, y: f32) -> Particle {
        Particle::at_home(Vec2::new(x, y), 1.0)
    }

    #[test]
    fn exact_threshold_is_not_linked() {
        let particles = [at(0.0, 0.0), at(150.0, 0.0)];
        assert!(compute_links(&particles, &FieldParams::default()).is_empty());
    }

    #[test]
    fn just_inside_threshold_is_faint() {
        let particles = [at(0.0, 0.0), at(149.99, 0.0)];
        let links = compute_links(&particles, &FieldParams::default());
        assert_eq!(links.len(), 1);
        assert!(links[0].opacity > 0.0);
        assert!(links[0].opacity < 1e-3, "opacity = {}", links[0].opacity);
    }

    #[test]
    fn coincident_pair_is_full_strength() {
        let particles = [at(5.0, 5.0), at(5.0, 5.0)];
        let links = compute_links(&particles, &FieldParams::default());
        assert_eq!(links.len(), 1);
        assert!((links[0].opacity - 0.30).abs() < 1e-6);
    }

    #[test]
    fn each_pair_appears_once_in_index_order() {
        let particles: Vec<Particle> = (0..12).map(|k| at(k as f32 * 10.0, 0.0)).collect();
        let links = compute_links(&particles, &FieldParams::default());
        let mut seen = std::collections::HashSet::new();
        for link in &links {
            assert!(link.i < link.j);
            assert!(seen.insert((link.i, link.j)), "duplicate pair {:?}", link);
        }
        // All 12 within 110 units of each other → every pair linked.
        assert_eq!(links.len(), 12 * 11 / 2);
    }
}
