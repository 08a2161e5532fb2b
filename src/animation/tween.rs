use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::animation::Easing;
use crate::render::Color;

#[must_use]
pub fn lerp(start: f64, end: f64, t: f64) -> f64 {
    start + (end - start) * t
}

/// Values that can be interpolated by a tween.
pub trait Lerp: Copy {
    #[must_use]
    fn lerp(self, target: Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(self, target: Self, t: f64) -> Self {
        lerp(self, target, t)
    }
}

impl Lerp for Color {
    fn lerp(self, target: Self, t: f64) -> Self {
        Color::rgba(
            lerp(self.red, target.red, t).clamp(0.0, 1.0),
            lerp(self.green, target.green, t).clamp(0.0, 1.0),
            lerp(self.blue, target.blue, t).clamp(0.0, 1.0),
            lerp(self.alpha, target.alpha, t).clamp(0.0, 1.0),
        )
    }
}

/// Duration and curve of one tween.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TweenSpec {
    pub duration: Duration,
    #[serde(default)]
    pub easing: Easing,
}

impl TweenSpec {
    #[must_use]
    pub const fn new(duration: Duration, easing: Easing) -> Self {
        Self { duration, easing }
    }

    #[must_use]
    pub const fn millis(duration_ms: u64) -> Self {
        Self::new(Duration::from_millis(duration_ms), Easing::FastOutSlowIn)
    }

    /// Eased progress after `elapsed`; zero-length tweens complete at once.
    #[must_use]
    pub fn progress(self, elapsed: Duration) -> f64 {
        if self.duration.is_zero() || elapsed >= self.duration {
            return 1.0;
        }
        self.easing
            .apply(elapsed.as_secs_f64() / self.duration.as_secs_f64())
    }
}

/// A value that tweens toward a target under explicit time stepping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Animated<T: Lerp> {
    start: T,
    target: T,
    current: T,
    spec: TweenSpec,
    elapsed: Duration,
    running: bool,
}

impl<T: Lerp + PartialEq> Animated<T> {
    #[must_use]
    pub fn new(initial: T) -> Self {
        Self {
            start: initial,
            target: initial,
            current: initial,
            spec: TweenSpec::millis(0),
            elapsed: Duration::ZERO,
            running: false,
        }
    }

    /// Starts a tween from the current interpolated value.
    ///
    /// Retargeting to the value already being approached keeps the running
    /// tween untouched.
    pub fn animate_to(&mut self, target: T, spec: TweenSpec) {
        if target == self.target {
            return;
        }
        self.start = self.current;
        self.target = target;
        self.spec = spec;
        self.elapsed = Duration::ZERO;
        self.running = true;
        if spec.duration.is_zero() {
            self.snap_to(target);
        }
    }

    pub fn snap_to(&mut self, target: T) {
        self.start = target;
        self.target = target;
        self.current = target;
        self.elapsed = Duration::ZERO;
        self.running = false;
    }

    /// Advances by `dt`; returns `true` while the tween is still running.
    pub fn step(&mut self, dt: Duration) -> bool {
        if !self.running {
            return false;
        }
        self.elapsed = self.elapsed.saturating_add(dt);
        let t = self.spec.progress(self.elapsed);
        if t >= 1.0 {
            self.current = self.target;
            self.running = false;
        } else {
            self.current = self.start.lerp(self.target, t);
        }
        self.running
    }

    pub fn finish(&mut self) {
        self.snap_to(self.target);
    }

    #[must_use]
    pub fn value(&self) -> T {
        self.current
    }

    #[must_use]
    pub fn target(&self) -> T {
        self.target
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{Animated, TweenSpec, lerp};
    use crate::animation::Easing;

    #[test]
    fn lerp_hits_endpoints() {
        assert_eq!(lerp(10.0, 20.0, 0.0), 10.0);
        assert_eq!(lerp(10.0, 20.0, 1.0), 20.0);
        assert_eq!(lerp(10.0, 20.0, 0.25), 12.5);
    }

    #[test]
    fn linear_tween_reaches_target_after_duration() {
        let spec = TweenSpec::new(Duration::from_millis(100), Easing::Linear);
        let mut height = Animated::new(0.0);
        height.animate_to(50.0, spec);

        assert!(height.step(Duration::from_millis(50)));
        assert!((height.value() - 25.0).abs() <= 1e-9);
        assert!(!height.step(Duration::from_millis(60)));
        assert_eq!(height.value(), 50.0);
    }

    #[test]
    fn retarget_starts_from_interpolated_value() {
        let spec = TweenSpec::new(Duration::from_millis(100), Easing::Linear);
        let mut height = Animated::new(0.0);
        height.animate_to(100.0, spec);
        height.step(Duration::from_millis(50));
        height.animate_to(0.0, spec);
        height.step(Duration::from_millis(50));
        assert!((height.value() - 25.0).abs() <= 1e-9);
    }
}
