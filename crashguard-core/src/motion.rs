//! Impact and Rotation Signals from Accelerometer Samples
//!
//! ## Impact
//!
//! The magnitude of the acceleration vector `√(x²+y²+z²)` is independent of
//! how the device is mounted. A device at rest reads about 9.8 m/s² (gravity
//! alone). A collision produces a short spike well above that. The peak over
//! the window is the impact signal.
//!
//! ## Rotation ("flips")
//!
//! When a vehicle rolls or spins, the direction of the measured acceleration
//! swings around relative to the device. Without a gyroscope we approximate
//! this by the angle between consecutive sample vectors:
//!
//! ```text
//! cos θ = (a·b) / (‖a‖‖b‖)
//! ```
//!
//! Each adjacent pair whose angle exceeds 45° counts as one flip. The cosine
//! is clamped to `[-1, 1]` before `acos` because rounding can push nearly
//! parallel vectors just past 1.0. A pair containing a zero vector has no
//! defined angle and is skipped.
//!
//! ## Scan Shape
//!
//! Both signals come out of a single fold over the samples carrying the
//! previous sample, the running peak and the flip count. O(n) time, O(1)
//! extra space.

use crate::constants::physics::FLIP_ANGLE_DEG;

/// One 3-axis acceleration reading
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SensorSample {
    /// X-axis acceleration
    pub x: f64,
    /// Y-axis acceleration
    pub y: f64,
    /// Z-axis acceleration
    pub z: f64,
}

impl SensorSample {
    /// Create a sample from its three components
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Euclidean norm of the vector
    pub fn magnitude(&self) -> f64 {
        libm::sqrt(self.dot(self))
    }

    /// Dot product with another sample
    pub fn dot(&self, other: &SensorSample) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Every component scaled by `factor`
    pub fn scaled(&self, factor: f64) -> Self {
        Self::new(self.x * factor, self.y * factor, self.z * factor)
    }

    /// True when no component is NaN or infinite
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

/// Angle between two vectors in degrees
///
/// `None` when either vector has zero magnitude.
pub fn angle_between_deg(a: &SensorSample, b: &SensorSample) -> Option<f64> {
    let norms = a.magnitude() * b.magnitude();
    if norms <= 0.0 {
        return None;
    }

    let cos_theta = (a.dot(b) / norms).clamp(-1.0, 1.0);
    Some(libm::acos(cos_theta).to_degrees())
}

/// Signals extracted from one window of samples
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MotionSignals {
    /// Largest vector magnitude seen, `0.0` for an empty window
    pub max_magnitude: f64,
    /// Consecutive pairs whose direction changed by more than 45°
    pub flips: u32,
}

/// Scan samples in order and extract peak magnitude and flip count
pub fn extract_motion_signals(samples: &[SensorSample]) -> MotionSignals {
    let (_, signals) = samples.iter().fold(
        (None::<&SensorSample>, MotionSignals::default()),
        |(previous, mut signals), current| {
            signals.max_magnitude = signals.max_magnitude.max(current.magnitude());

            if let Some(angle) = previous.and_then(|prev| angle_between_deg(prev, current)) {
                if angle > FLIP_ANGLE_DEG {
                    signals.flips += 1;
                }
            }

            (Some(current), signals)
        },
    );

    signals
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn magnitude_of_axes() {
        assert_eq!(SensorSample::new(3.0, 4.0, 0.0).magnitude(), 5.0);
        assert_eq!(SensorSample::new(0.0, 0.0, -9.8).magnitude(), 9.8);
        assert_eq!(SensorSample::default().magnitude(), 0.0);
    }

    #[test]
    fn orthogonal_vectors_are_ninety_degrees() {
        let a = SensorSample::new(25.0, 0.0, 0.0);
        let b = SensorSample::new(0.0, 25.0, 0.0);
        let angle = angle_between_deg(&a, &b).unwrap();
        assert!((angle - 90.0).abs() < 1e-9);
    }

    #[test]
    fn parallel_vectors_clamp_to_zero() {
        // Scaled copies can overshoot cos θ = 1 by an ulp
        let a = SensorSample::new(0.1, 0.2, 0.3);
        let b = a.scaled(3.0);
        let angle = angle_between_deg(&a, &b).unwrap();
        assert!(angle.is_finite());
        assert!(angle < 1e-6);
    }

    #[test]
    fn opposite_vectors_are_one_eighty() {
        let a = SensorSample::new(0.0, 0.0, 9.8);
        let b = SensorSample::new(0.0, 0.0, -9.8);
        assert!((angle_between_deg(&a, &b).unwrap() - 180.0).abs() < 1e-9);
    }

    #[test]
    fn zero_vector_has_no_angle() {
        let zero = SensorSample::default();
        let a = SensorSample::new(1.0, 0.0, 0.0);
        assert_eq!(angle_between_deg(&zero, &a), None);
        assert_eq!(angle_between_deg(&a, &zero), None);
    }

    #[test]
    fn empty_window() {
        assert_eq!(extract_motion_signals(&[]), MotionSignals { max_magnitude: 0.0, flips: 0 });
    }

    #[test]
    fn single_sample_has_no_pairs() {
        let signals = extract_motion_signals(&[SensorSample::new(30.0, 0.0, 0.0)]);
        assert_eq!(signals.max_magnitude, 30.0);
        assert_eq!(signals.flips, 0);
    }

    #[test]
    fn rollover_sequence() {
        let samples = [
            SensorSample::new(0.0, 0.0, 9.8),
            SensorSample::new(25.0, 0.0, 0.0),
            SensorSample::new(0.0, 25.0, 0.0),
        ];
        let signals = extract_motion_signals(&samples);
        assert_eq!(signals.flips, 2);
        assert_eq!(signals.max_magnitude, 25.0);
    }

    #[test]
    fn steady_vibration_has_no_flips() {
        let samples = [SensorSample::new(20.0, 0.0, 0.0); 10];
        let signals = extract_motion_signals(&samples);
        assert_eq!(signals.flips, 0);
        assert_eq!(signals.max_magnitude, 20.0);
    }

    #[test]
    fn flip_angle_boundary() {
        let rotated = |deg: f64| {
            let rad = deg.to_radians();
            SensorSample::new(20.0 * libm::cos(rad), 20.0 * libm::sin(rad), 0.0)
        };
        let base = rotated(0.0);

        assert_eq!(extract_motion_signals(&[base, rotated(44.0)]).flips, 0);
        assert_eq!(extract_motion_signals(&[base, rotated(46.0)]).flips, 1);
        assert_eq!(extract_motion_signals(&[base, rotated(-46.0)]).flips, 1);
    }

    #[test]
    fn zero_sample_breaks_the_pair_chain() {
        // (x)->(0) and (0)->(y) are both skipped even though x and y are orthogonal
        let samples = [
            SensorSample::new(20.0, 0.0, 0.0),
            SensorSample::default(),
            SensorSample::new(0.0, 20.0, 0.0),
        ];
        assert_eq!(extract_motion_signals(&samples).flips, 0);
    }

    #[test]
    fn only_adjacent_pairs_count() {
        // Direction alternates every sample: 3 pairs, 3 flips
        let samples = [
            SensorSample::new(20.0, 0.0, 0.0),
            SensorSample::new(0.0, 20.0, 0.0),
            SensorSample::new(20.0, 0.0, 0.0),
            SensorSample::new(0.0, 20.0, 0.0),
        ];
        assert_eq!(extract_motion_signals(&samples).flips, 3);
    }
}
