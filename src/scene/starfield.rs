//! Star placement

use glam::Vec3;

/// Scatter `count` points uniformly inside an axis-aligned cube centered on
/// the origin with edge length `spread`, deterministically from `seed`.
///
/// Repeats are permitted; the points only have to read as a believable
/// starfield, not as a blue-noise distribution.
pub fn scatter(count: usize, spread: f32, seed: u64) -> Vec<Vec3> {
    let mut rng = seed;
    let mut rand = move || {
        rng = rng
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (rng >> 32) as f64 / (u32::MAX as f64)
    };

    let half = f64::from(spread) * 0.5;
    (0..count)
        .map(|_| {
            let x = (rand() * 2.0 - 1.0) * half;
            let y = (rand() * 2.0 - 1.0) * half;
            let z = (rand() * 2.0 - 1.0) * half;
            Vec3::new(x as f32, y as f32, z as f32)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scatter_stays_in_range() {
        let stars = scatter(200, 100.0, 7);
        assert_eq!(stars.len(), 200);
        for star in &stars {
            assert!(star.x.abs() <= 50.0);
            assert!(star.y.abs() <= 50.0);
            assert!(star.z.abs() <= 50.0);
        }
    }

    #[test]
    fn test_scatter_is_deterministic() {
        assert_eq!(scatter(16, 100.0, 42), scatter(16, 100.0, 42));
    }

    #[test]
    fn test_seeds_differ() {
        assert_ne!(scatter(16, 100.0, 1), scatter(16, 100.0, 2));
    }
}
