//! Time-based progress animation
//!
//! The menu fades in and out by animating a single scalar between 0 and 1.
//! Time is always passed in by the caller (milliseconds from any monotonic
//! origin) so the curve can be sampled deterministically in tests.

use serde::{Deserialize, Serialize};

/// Timing curve applied to normalized time
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    Linear,
    /// Standard timing curve: slow start, fast middle, slow end
    #[default]
    EaseInOutQuad,
    EaseOutCubic,
}

impl Easing {
    /// Map normalized time `t` in [0, 1] to eased progress in [0, 1].
    ///
    /// Every curve is monotone non-decreasing and fixes both endpoints.
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseInOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Self::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
        }
    }
}

/// A single transition from one value to another
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub from: f64,
    pub to: f64,
    pub start_ms: f64,
    pub duration_ms: f64,
    pub easing: Easing,
}

impl Transition {
    /// Interpolated value at `now_ms`, clamped to [0, 1].
    pub fn value_at(&self, now_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return self.to.clamp(0.0, 1.0);
        }
        let t = (now_ms - self.start_ms) / self.duration_ms;
        let eased = self.easing.apply(t);
        (self.from + (self.to - self.from) * eased).clamp(0.0, 1.0)
    }

    pub fn is_finished(&self, now_ms: f64) -> bool {
        now_ms - self.start_ms >= self.duration_ms
    }
}

/// Animated progress value with exactly one writer.
///
/// Starting a new transition while one is running continues from the value
/// currently on screen rather than jumping back to the old start.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    resting: f64,
    transition: Option<Transition>,
}

impl Default for Progress {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl Progress {
    pub fn new(initial: f64) -> Self {
        Self {
            resting: initial.clamp(0.0, 1.0),
            transition: None,
        }
    }

    /// Start animating toward `target`.
    pub fn animate_to(&mut self, target: f64, now_ms: f64, duration_ms: f64, easing: Easing) {
        let from = self.value_at(now_ms);
        let to = target.clamp(0.0, 1.0);
        self.transition = Some(Transition {
            from,
            to,
            start_ms: now_ms,
            duration_ms: duration_ms.max(0.0),
            easing,
        });
        self.resting = to;
    }

    /// Current value, always within [0, 1]
    pub fn value_at(&self, now_ms: f64) -> f64 {
        match &self.transition {
            Some(transition) => transition.value_at(now_ms),
            None => self.resting,
        }
    }

    /// The value the animation is heading toward (or resting at)
    pub fn target(&self) -> f64 {
        self.resting
    }

    /// True when no transition is running at `now_ms`
    pub fn is_settled(&self, now_ms: f64) -> bool {
        self.transition
            .as_ref()
            .is_none_or(|transition| transition.is_finished(now_ms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_easing_endpoints() {
        for easing in [Easing::Linear, Easing::EaseInOutQuad, Easing::EaseOutCubic] {
            assert_eq!(easing.apply(0.0), 0.0, "{easing:?}");
            assert_eq!(easing.apply(1.0), 1.0, "{easing:?}");
            assert_eq!(easing.apply(-3.0), 0.0, "{easing:?}");
            assert_eq!(easing.apply(7.0), 1.0, "{easing:?}");
        }
    }

    #[test]
    fn test_ease_in_out_quad_midpoint() {
        assert!((Easing::EaseInOutQuad.apply(0.5) - 0.5).abs() < 1e-12);
        assert!((Easing::EaseInOutQuad.apply(0.25) - 0.125).abs() < 1e-12);
    }

    #[test]
    fn test_easing_is_monotone() {
        for easing in [Easing::Linear, Easing::EaseInOutQuad, Easing::EaseOutCubic] {
            let mut last = 0.0;
            for i in 0..=100 {
                let v = easing.apply(i as f64 / 100.0);
                assert!(v >= last, "{easing:?} decreased at step {i}");
                last = v;
            }
        }
    }

    #[test]
    fn test_zero_duration_jumps() {
        let mut p = Progress::default();
        p.animate_to(1.0, 10.0, 0.0, Easing::Linear);
        assert_eq!(p.value_at(10.0), 1.0);
        assert!(p.is_settled(10.0));
    }

    #[test]
    fn test_linear_transition() {
        let mut p = Progress::default();
        p.animate_to(1.0, 100.0, 150.0, Easing::Linear);
        assert_eq!(p.value_at(100.0), 0.0);
        assert!((p.value_at(175.0) - 0.5).abs() < 1e-12);
        assert_eq!(p.value_at(250.0), 1.0);
        assert_eq!(p.value_at(10_000.0), 1.0);
        assert!(!p.is_settled(200.0));
        assert!(p.is_settled(250.0));
    }

    #[test]
    fn test_interrupt_continues_from_current_value() {
        let mut p = Progress::default();
        p.animate_to(1.0, 0.0, 100.0, Easing::Linear);
        let mid = p.value_at(40.0);
        p.animate_to(0.0, 40.0, 100.0, Easing::Linear);
        assert!((p.value_at(40.0) - mid).abs() < 1e-12);
        assert_eq!(p.value_at(140.0), 0.0);
        assert_eq!(p.target(), 0.0);
    }

    #[test]
    fn test_targets_are_clamped() {
        let mut p = Progress::new(4.0);
        assert_eq!(p.value_at(0.0), 1.0);
        p.animate_to(-2.0, 0.0, 10.0, Easing::Linear);
        assert_eq!(p.value_at(10.0), 0.0);
    }
}
