//! Decorative ring animations for the start and result screens.
//!
//! Each asset is a small JSON document bundled into the binary: a set of
//! concentric rings with a color, base radius, stroke weight, and phase
//! offset, pulsed over a fixed cycle by the renderer. The animations carry
//! no information; they only dress the welcome screen and the two outcomes.

use serde::Deserialize;
use thiserror::Error;

const WELCOME_ASSET: &str = include_str!("../../assets/anim/welcome.json");
const CHURN_ASSET: &str = include_str!("../../assets/anim/churn.json");
const NOT_CHURN_ASSET: &str = include_str!("../../assets/anim/not_churn.json");

/// Errors raised while decoding the bundled animation assets.
#[derive(Debug, Error)]
pub enum AnimationError {
    /// The asset is not valid JSON for the ring schema.
    #[error("Failed to parse animation asset '{name}': {source}")]
    Parse {
        /// Asset name.
        name: &'static str,
        /// Underlying JSON error.
        source: serde_json::Error,
    },
    /// The asset describes nothing to draw.
    #[error("Animation asset '{name}' has no rings")]
    Empty {
        /// Asset name.
        name: &'static str,
    },
    /// The asset's cycle length cannot drive a pulse.
    #[error("Animation asset '{name}' needs a positive cycle length")]
    BadCycle {
        /// Asset name.
        name: &'static str,
    },
}

/// One ring of an animation.
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct RingSpec {
    /// RGB stroke color.
    pub color: [u8; 3],
    /// Base radius as a fraction of the drawing area's half-height.
    pub radius: f32,
    /// Stroke width in points.
    pub weight: f32,
    /// Phase offset in cycles, staggering rings against each other.
    pub phase: f32,
}

/// A complete decorative animation.
#[derive(Clone, Debug, Deserialize)]
pub struct AnimationSpec {
    /// Asset name, used in diagnostics only.
    pub name: String,
    /// Seconds per pulse cycle.
    pub cycle_seconds: f32,
    /// Rings drawn from the same center.
    pub rings: Vec<RingSpec>,
}

impl AnimationSpec {
    fn from_json(name: &'static str, text: &str) -> Result<Self, AnimationError> {
        let spec: Self =
            serde_json::from_str(text).map_err(|source| AnimationError::Parse { name, source })?;
        if spec.rings.is_empty() {
            return Err(AnimationError::Empty { name });
        }
        if !(spec.cycle_seconds > 0.0) {
            return Err(AnimationError::BadCycle { name });
        }
        Ok(spec)
    }

    /// Radius multiplier for a ring at a wall-clock time, oscillating
    /// around 1.0.
    pub fn pulse(&self, ring: &RingSpec, seconds: f64) -> f32 {
        let cycle = f64::from(self.cycle_seconds);
        let position = (seconds / cycle).fract() as f32 + ring.phase;
        1.0 + 0.12 * (position * std::f32::consts::TAU).sin()
    }
}

/// The three animations the UI shows, loaded once at startup.
#[derive(Clone, Debug)]
pub struct AnimationSet {
    /// Shown on the start screen.
    pub welcome: AnimationSpec,
    /// Shown when the classifier predicts churn.
    pub churn: AnimationSpec,
    /// Shown when the classifier predicts the customer stays.
    pub not_churn: AnimationSpec,
}

impl AnimationSet {
    /// Decode the bundled assets; any failure is fatal at startup.
    pub fn load_embedded() -> Result<Self, AnimationError> {
        Ok(Self {
            welcome: AnimationSpec::from_json("welcome", WELCOME_ASSET)?,
            churn: AnimationSpec::from_json("churn", CHURN_ASSET)?,
            not_churn: AnimationSpec::from_json("not_churn", NOT_CHURN_ASSET)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_assets_decode() {
        let set = AnimationSet::load_embedded().unwrap();
        assert!(!set.welcome.rings.is_empty());
        assert!(!set.churn.rings.is_empty());
        assert!(!set.not_churn.rings.is_empty());
    }

    #[test]
    fn pulse_oscillates_around_unity() {
        let set = AnimationSet::load_embedded().unwrap();
        let ring = set.welcome.rings[0];
        for step in 0..40 {
            let seconds = f64::from(step) * 0.1;
            let pulse = set.welcome.pulse(&ring, seconds);
            assert!((0.8..=1.2).contains(&pulse), "pulse {pulse} out of range");
        }
    }

    #[test]
    fn empty_ring_list_is_rejected() {
        let err = AnimationSpec::from_json(
            "test",
            r#"{"name":"test","cycle_seconds":2.0,"rings":[]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, AnimationError::Empty { name: "test" }));
    }

    #[test]
    fn non_positive_cycle_is_rejected() {
        let err = AnimationSpec::from_json(
            "test",
            r#"{"name":"test","cycle_seconds":0.0,"rings":[{"color":[1,2,3],"radius":0.5,"weight":2.0,"phase":0.0}]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, AnimationError::BadCycle { name: "test" }));
    }
}
