// src/particles.rs
// Placement for the decorative floating particles.
//
// Positions depend on the viewport and on randomness. Both come from the
// caller: a missing viewport falls back to a 1000x1000 bound, and any
// `rand::Rng` can drive placement, so a seeded generator reproduces a field.

use rand::Rng;

pub const PARTICLE_COUNT: usize = 15;
pub const MAX_VIEWPORT_DIMENSION: u32 = 10_000;

const MIN_DRIFT_MS: u32 = 20_000;
const MAX_DRIFT_MS: u32 = 30_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

pub const FALLBACK_VIEWPORT: Viewport = Viewport {
    width: 1000,
    height: 1000,
};

impl Viewport {
    /// Zero-sized viewports are rejected; oversized ones are capped.
    pub fn new(width: u32, height: u32) -> Option<Self> {
        if width == 0 || height == 0 {
            return None;
        }
        Some(Self {
            width: width.min(MAX_VIEWPORT_DIMENSION),
            height: height.min(MAX_VIEWPORT_DIMENSION),
        })
    }

    /// Parse client-reported dimensions, e.g. from `?vw=1280&vh=720`.
    pub fn parse(width: Option<&str>, height: Option<&str>) -> Option<Self> {
        Self::new(parse_dimension(width?)?, parse_dimension(height?)?)
    }
}

// Any non-negative integer is accepted; oversize values, however long, are capped.
fn parse_dimension(raw: &str) -> Option<u32> {
    let digits = raw.trim();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let value = digits.parse::<u64>().unwrap_or(u64::MAX);
    Some(value.min(MAX_VIEWPORT_DIMENSION as u64) as u32)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub start: (f64, f64),
    pub end: (f64, f64),
    pub duration_ms: u32,
}

fn point<R: Rng + ?Sized>(rng: &mut R, bounds: Viewport) -> (f64, f64) {
    (
        rng.gen_range(0.0..bounds.width as f64),
        rng.gen_range(0.0..bounds.height as f64),
    )
}

pub fn scatter<R: Rng + ?Sized>(rng: &mut R, viewport: Option<Viewport>) -> Vec<Particle> {
    let bounds = viewport.unwrap_or(FALLBACK_VIEWPORT);
    (0..PARTICLE_COUNT)
        .map(|_| {
            let start = point(rng, bounds);
            let end = point(rng, bounds);
            Particle {
                start,
                end,
                duration_ms: rng.gen_range(MIN_DRIFT_MS..MAX_DRIFT_MS),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn in_bounds(p: (f64, f64), bounds: Viewport) -> bool {
        p.0 >= 0.0 && p.0 < bounds.width as f64 && p.1 >= 0.0 && p.1 < bounds.height as f64
    }

    #[test]
    fn count_is_fixed_for_any_viewport() {
        let mut rng = StdRng::seed_from_u64(7);
        for viewport in [
            None,
            Viewport::new(1, 1),
            Viewport::new(320, 568),
            Viewport::new(3840, 2160),
        ] {
            assert_eq!(scatter(&mut rng, viewport).len(), PARTICLE_COUNT);
        }
    }

    #[test]
    fn missing_viewport_uses_fallback_bound() {
        let mut rng = StdRng::seed_from_u64(1);
        for particle in scatter(&mut rng, None) {
            assert!(in_bounds(particle.start, FALLBACK_VIEWPORT));
            assert!(in_bounds(particle.end, FALLBACK_VIEWPORT));
        }
    }

    #[test]
    fn positions_and_durations_stay_in_range() {
        let viewport = Viewport::new(640, 480).unwrap();
        let mut rng = StdRng::seed_from_u64(99);
        for particle in scatter(&mut rng, Some(viewport)) {
            assert!(in_bounds(particle.start, viewport));
            assert!(in_bounds(particle.end, viewport));
            assert!((MIN_DRIFT_MS..MAX_DRIFT_MS).contains(&particle.duration_ms));
        }
    }

    #[test]
    fn same_seed_same_field() {
        let a = scatter(&mut StdRng::seed_from_u64(42), None);
        let b = scatter(&mut StdRng::seed_from_u64(42), None);
        let c = scatter(&mut StdRng::seed_from_u64(43), None);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn viewport_parsing() {
        assert_eq!(
            Viewport::parse(Some("1280"), Some("720")),
            Some(Viewport { width: 1280, height: 720 })
        );
        assert_eq!(Viewport::parse(Some("0"), Some("720")), None);
        assert_eq!(Viewport::parse(Some("wide"), Some("720")), None);
        assert_eq!(Viewport::parse(None, Some("720")), None);
        assert_eq!(Viewport::parse(Some("-5"), Some("720")), None);
        assert_eq!(
            Viewport::parse(Some("99999999999"), Some("720")),
            Some(Viewport {
                width: MAX_VIEWPORT_DIMENSION,
                height: 720
            })
        );
        assert_eq!(
            Viewport::parse(Some("1280"), Some("123456789012345678901234567890")),
            Some(Viewport {
                width: 1280,
                height: MAX_VIEWPORT_DIMENSION
            })
        );
        assert_eq!(Viewport::parse(Some("+1280"), Some("720")), None);
        assert_eq!(
            Viewport::parse(Some("99999"), Some("20000")),
            Some(Viewport {
                width: MAX_VIEWPORT_DIMENSION,
                height: MAX_VIEWPORT_DIMENSION
            })
        );
    }
}
