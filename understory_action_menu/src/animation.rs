// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Explicit animation requests handed to the host.
//!
//! The layout engines only compute target values. Each target carries an
//! [`AnimationRequest`] telling the host how to interpolate towards it; the
//! host owns frame scheduling. Retargeting mid-flight is last-write-wins: the
//! host simply starts interpolating towards the newest targets.

/// Default spring response, in seconds.
pub const DEFAULT_SPRING_RESPONSE: f64 = 0.55;

/// Default spring damping fraction.
pub const DEFAULT_SPRING_DAMPING: f64 = 0.825;

/// Interpolation curve of an animation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AnimationCurve {
    /// Symmetric ease-in-out over the request's duration.
    EaseInOut,
    /// Damped spring.
    Spring {
        /// Approximate period of one oscillation, in seconds.
        response: f64,
        /// Fraction of critical damping; `1.0` never overshoots.
        damping_fraction: f64,
    },
}

/// How the host should animate a property towards its new target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationRequest {
    /// Interpolation curve.
    pub curve: AnimationCurve,
    /// Duration in seconds. For springs this is the nominal response.
    pub duration: f64,
    /// Delay before the animation starts, in seconds.
    pub delay: f64,
}

impl AnimationRequest {
    /// An ease-in-out animation with no delay.
    #[must_use]
    pub const fn ease_in_out(duration: f64) -> Self {
        Self {
            curve: AnimationCurve::EaseInOut,
            duration,
            delay: 0.0,
        }
    }

    /// A spring animation with no delay.
    #[must_use]
    pub const fn spring(response: f64, damping_fraction: f64) -> Self {
        Self {
            curve: AnimationCurve::Spring {
                response,
                damping_fraction,
            },
            duration: response,
            delay: 0.0,
        }
    }

    /// Returns the same request with a start delay.
    #[must_use]
    pub const fn with_delay(mut self, delay: f64) -> Self {
        self.delay = delay;
        self
    }

    /// Time at which the animation nominally finishes.
    #[must_use]
    pub fn end(&self) -> f64 {
        self.delay + self.duration
    }
}

impl Default for AnimationRequest {
    fn default() -> Self {
        Self::spring(DEFAULT_SPRING_RESPONSE, DEFAULT_SPRING_DAMPING)
    }
}

/// Cubic ease-in-out.
///
/// `progress` is clamped to `[0, 1]`; the result is in `[0, 1]`.
#[must_use]
pub fn ease_in_out(progress: f64) -> f64 {
    let t = progress.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let u = -2.0 * t + 2.0;
        1.0 - u * u * u * 0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ease_in_out_endpoints_and_midpoint() {
        assert_eq!(ease_in_out(0.0), 0.0);
        assert_eq!(ease_in_out(1.0), 1.0);
        assert_eq!(ease_in_out(0.5), 0.5);
        assert_eq!(ease_in_out(-3.0), 0.0);
        assert_eq!(ease_in_out(7.0), 1.0);
    }

    #[test]
    fn ease_in_out_is_monotonic() {
        let mut last = 0.0;
        for step in 0..=100 {
            let v = ease_in_out(f64::from(step) / 100.0);
            assert!(v >= last, "easing went backwards at step {step}");
            last = v;
        }
    }

    #[test]
    fn request_end_includes_delay() {
        let req = AnimationRequest::ease_in_out(0.5).with_delay(0.2);
        assert!((req.end() - 0.7).abs() < 1e-12);
        assert_eq!(req.curve, AnimationCurve::EaseInOut);
    }

    #[test]
    fn default_request_is_spring() {
        let req = AnimationRequest::default();
        assert_eq!(
            req.curve,
            AnimationCurve::Spring {
                response: DEFAULT_SPRING_RESPONSE,
                damping_fraction: DEFAULT_SPRING_DAMPING,
            }
        );
        assert_eq!(req.delay, 0.0);
    }
}
