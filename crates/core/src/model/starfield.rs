use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::config::StarfieldConfig;

/// One particle. Everything a renderer needs to draw it is right here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Star {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    /// Current alpha. Jittered every tick, clamped to the configured band.
    pub opacity: f64,
    /// Depth layer, zero-based. Higher layers read as closer: larger
    /// radii, faster drift.
    pub layer: u8,
    /// Leftward speed in logical pixels per tick.
    pub drift: f64,
}

/// The particle field and the bounds it drifts within.
///
/// Owns its RNG, so a field seeded from the same value replays the same
/// sky tick for tick. `resize` deliberately leaves existing stars where
/// they are: a star stranded past a shrunken right edge drifts back into
/// view on its own.
#[derive(Debug, Clone)]
pub struct Starfield {
    stars: Vec<Star>,
    width: f64,
    height: f64,
    config: StarfieldConfig,
    rng: SmallRng,
}

impl Starfield {
    /// Populate a fresh field: `stars_per_layer × layers` particles placed
    /// uniformly within the given bounds.
    pub fn seed(config: StarfieldConfig, width: f64, height: f64, seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let layers = config.layers.max(1);
        let mut stars = Vec::with_capacity(config.stars_per_layer * layers as usize);
        for layer in 0..layers {
            let depth = f64::from(layer + 1) / f64::from(layers);
            let drift = config.drift_scale * f64::from(layer + 1);
            for _ in 0..config.stars_per_layer {
                stars.push(Star {
                    x: sample(&mut rng, 0.0, width),
                    y: sample(&mut rng, 0.0, height),
                    radius: sample(&mut rng, config.radius_min, config.radius_max) * depth,
                    opacity: sample(&mut rng, config.opacity_min, config.opacity_max),
                    layer,
                    drift,
                });
            }
        }
        Self {
            stars,
            width,
            height,
            config,
            rng,
        }
    }

    /// Advance one frame: jitter each star's opacity, then drift it left.
    ///
    /// A star crossing the left edge wraps to exactly the right edge with
    /// a freshly randomized vertical position.
    pub fn tick(&mut self) {
        for star in &mut self.stars {
            let jitter = (self.rng.random::<f64>() - 0.5) * self.config.twinkle;
            // Not f64::clamp, which panics if a hand-built config inverts
            // the band.
            star.opacity = (star.opacity + jitter)
                .max(self.config.opacity_min)
                .min(self.config.opacity_max);

            star.x -= star.drift;
            if star.x < 0.0 {
                star.x = self.width;
                star.y = sample(&mut self.rng, 0.0, self.height);
            }
        }
    }

    /// Adopt new bounds. Existing stars keep their positions, wherever
    /// those now fall.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn config(&self) -> &StarfieldConfig {
        &self.config
    }
}

/// Uniform sample over `[low, high)`. `random_range` panics on an empty
/// range, so collapse to `low` — seeding against a zero-sized surface
/// must stay well-defined.
fn sample(rng: &mut SmallRng, low: f64, high: f64) -> f64 {
    if high > low {
        rng.random_range(low..high)
    } else {
        low
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> StarfieldConfig {
        StarfieldConfig::default()
    }

    #[test]
    fn seeds_per_layer_times_layers() {
        let cfg = config();
        let field = Starfield::seed(cfg.clone(), 800.0, 600.0, 7);
        assert_eq!(field.len(), cfg.stars_per_layer * cfg.layers as usize);
        for star in field.stars() {
            assert!(star.x >= 0.0 && star.x < 800.0);
            assert!(star.y >= 0.0 && star.y < 600.0);
            assert!(star.layer < cfg.layers);
        }
    }

    #[test]
    fn same_seed_replays_the_same_sky() {
        let mut a = Starfield::seed(config(), 800.0, 600.0, 42);
        let mut b = Starfield::seed(config(), 800.0, 600.0, 42);
        assert_eq!(a.stars(), b.stars());
        for _ in 0..100 {
            a.tick();
            b.tick();
        }
        assert_eq!(a.stars(), b.stars());
    }

    #[test]
    fn opacity_never_escapes_the_band() {
        let cfg = config();
        let mut field = Starfield::seed(cfg.clone(), 800.0, 600.0, 3);
        for _ in 0..500 {
            field.tick();
            for star in field.stars() {
                assert!(star.opacity >= cfg.opacity_min);
                assert!(star.opacity <= cfg.opacity_max);
            }
        }
    }

    #[test]
    fn deeper_layers_drift_faster() {
        let field = Starfield::seed(config(), 800.0, 600.0, 9);
        let drift_of = |layer: u8| {
            field
                .stars()
                .iter()
                .find(|s| s.layer == layer)
                .map(|s| s.drift)
                .unwrap()
        };
        assert!(drift_of(0) < drift_of(1));
        assert!(drift_of(1) < drift_of(2));
    }

    #[test]
    fn wraps_to_the_right_edge_with_new_y() {
        let cfg = StarfieldConfig {
            stars_per_layer: 1,
            layers: 1,
            // One tick always carries a star past the left edge.
            drift_scale: 50.0,
            ..config()
        };
        let mut field = Starfield::seed(cfg, 10.0, 600.0, 5);
        field.tick();
        let star = field.stars()[0];
        assert!((star.x - 10.0).abs() < f64::EPSILON);
        assert!(star.y >= 0.0 && star.y < 600.0);
    }

    #[test]
    fn resize_keeps_every_star_in_place() {
        let mut field = Starfield::seed(config(), 800.0, 600.0, 11);
        let before = field.stars().to_vec();
        field.resize(320.0, 200.0);
        assert_eq!(field.stars(), before.as_slice());
        assert!((field.width() - 320.0).abs() < f64::EPSILON);
        assert!((field.height() - 200.0).abs() < f64::EPSILON);
    }

    #[test]
    fn zero_sized_surface_still_seeds() {
        let field = Starfield::seed(config(), 0.0, 0.0, 1);
        assert!(!field.is_empty());
        for star in field.stars() {
            assert!(star.x.abs() < f64::EPSILON);
            assert!(star.y.abs() < f64::EPSILON);
        }
    }

    #[test]
    fn inverted_opacity_band_ticks_without_panic() {
        // `validate` rejects this band, but `seed` takes any config.
        let cfg = StarfieldConfig {
            opacity_min: 0.9,
            opacity_max: 0.1,
            ..config()
        };
        let mut field = Starfield::seed(cfg, 800.0, 600.0, 13);
        for _ in 0..50 {
            field.tick();
        }
        for star in field.stars() {
            assert!(star.opacity.is_finite());
        }
    }
}
