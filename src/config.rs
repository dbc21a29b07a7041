//! Engine tunables. Defaults match the stock page; `<body data-*>` attributes may override them.

use std::str::FromStr;

#[derive(Clone, Debug, PartialEq)]
pub struct RevealConfig {
    /// Visible fraction a section must reach before it reveals.
    pub threshold: f64,
    /// Delay before the timer-revealed hero section animates in.
    pub hero_delay_ms: i32,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self { threshold: 0.1, hero_delay_ms: 100 }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScrollConfig {
    /// `scrolled` turns on strictly above this vertical offset.
    pub scrolled_threshold: f64,
    /// Distance of the activation line below the viewport top.
    pub activation_line: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self { scrolled_threshold: 50.0, activation_line: 100.0 }
    }
}

/// Half-open `[min, max)` range sampled uniformly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn sample(&self, rng: &mut fastrand::Rng) -> f64 {
        self.min + rng.f64() * (self.max - self.min)
    }

    #[inline]
    pub fn contains(&self, v: f64) -> bool {
        v >= self.min && v < self.max
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ParticleConfig {
    pub count: usize,
    pub interval_ms: i32,
    pub size: Range,
    /// Applied independently to both axes; centred on zero.
    pub speed: Range,
    pub opacity: Range,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            count: 50,
            interval_ms: 50,
            size: Range::new(1.0, 4.0),
            speed: Range::new(-0.25, 0.25),
            opacity: Range::new(0.2, 0.7),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct EngineConfig {
    pub reveal: RevealConfig,
    pub scroll: ScrollConfig,
    pub particles: ParticleConfig,
}

impl EngineConfig {
    /// Defaults overridden by whatever `lookup` returns for the known attribute names
    /// (`reveal-threshold`, `hero-delay`, `scroll-threshold`, `activation-line`,
    /// `particle-count`, `particle-interval`). Unparsable or out-of-range values are logged
    /// and skipped, leaving the default in place.
    pub fn from_attributes<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();
        override_with(
            &lookup,
            "reveal-threshold",
            &mut cfg.reveal.threshold,
            |t| (0.0..=1.0).contains(t),
            "must be within [0, 1]",
        );
        override_with(
            &lookup,
            "hero-delay",
            &mut cfg.reveal.hero_delay_ms,
            |d| *d >= 0,
            "must not be negative",
        );
        override_with(
            &lookup,
            "scroll-threshold",
            &mut cfg.scroll.scrolled_threshold,
            |v| v.is_finite(),
            "must be finite",
        );
        override_with(
            &lookup,
            "activation-line",
            &mut cfg.scroll.activation_line,
            |v| v.is_finite(),
            "must be finite",
        );
        override_with(
            &lookup,
            "particle-count",
            &mut cfg.particles.count,
            |n| *n <= MAX_PARTICLES,
            "too many particles",
        );
        override_with(
            &lookup,
            "particle-interval",
            &mut cfg.particles.interval_ms,
            |ms| *ms > 0,
            "must be positive",
        );
        cfg
    }
}

/// Upper bound on the backdrop population.
pub const MAX_PARTICLES: usize = 1000;

fn override_with<F, T>(lookup: &F, key: &str, slot: &mut T, valid: fn(&T) -> bool, rule: &str)
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    let Some(raw) = lookup(key) else { return };
    match raw.trim().parse::<T>() {
        Ok(v) if valid(&v) => *slot = v,
        Ok(_) => log::warn!("ignoring data-{key}={raw:?}: {rule}"),
        Err(_) => log::warn!("ignoring data-{key}={raw:?}: not a valid value"),
    }
}
