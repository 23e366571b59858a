//! Time-based animation engine
//!
//! An `Animation` interpolates a scalar between two endpoints over a fixed
//! duration. It is a pure function of the timestamps passed in: calling
//! `update` twice with the same `now_us` yields the same progress.
//!
//! # Direction
//!
//! `start`/`end` are the nominal endpoints. When `reversed` is set the
//! animation travels `end -> start` instead; the "origin" is where it
//! begins and the "target" where it settles.
//!
//! # Modes
//!
//! - **Looping**: on completion, restart from the origin.
//! - **Breathing**: on completion, turn around once and travel back.
//! - **Looping + breathing**: turn around on every completion (ping-pong).

use libm::{cosf, fabsf, powf};

/// Tolerance used to decide whether progress sits on an endpoint
pub const EPSILON: f32 = 0.0005;

/// Coarse completion state of an animation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AnimState {
    /// Sitting at the origin, not yet advanced
    Start,
    /// Between the endpoints
    Running,
    /// Settled on the target
    Finished,
}

impl AnimState {
    pub fn as_str(self) -> &'static str {
        match self {
            AnimState::Start => "start",
            AnimState::Running => "running",
            AnimState::Finished => "finished",
        }
    }
}

/// Transform applied to normalized time before interpolation
///
/// Every curve satisfies `e(1 - t) == 1 - e(t)`, which keeps `flip` and
/// `invert` continuous.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    #[default]
    Linear,
    /// Half cosine wave, slow at both ends
    Sinusoidal,
    /// `t^k / (t^k + (1 - t)^k)`; `k = 1` is linear, larger is steeper
    SmoothStep(f32),
}

impl Easing {
    /// Apply the curve to `t` in `[0, 1]`
    pub fn apply(self, t: f32) -> f32 {
        let t = clamp_between(t, 0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::Sinusoidal => 0.5 - 0.5 * cosf(t * core::f32::consts::PI),
            Easing::SmoothStep(k) if k > 0.0 => {
                let a = powf(t, k);
                let b = powf(1.0 - t, k);
                if a + b == 0.0 {
                    t
                } else {
                    a / (a + b)
                }
            }
            Easing::SmoothStep(_) => t,
        }
    }
}

/// Linear interpolation, `f = 0` gives `a`, `f = 1` gives `b`
pub fn lerp(a: f32, b: f32, f: f32) -> f32 {
    a + (b - a) * f
}

/// Position of `x` within `[min, max]` as a fraction
pub fn normalize(x: f32, min: f32, max: f32) -> f32 {
    if max == min {
        return 1.0;
    }
    (x - min) / (max - min)
}

/// Re-map `x` from one range onto another
pub fn map_range(x: f32, in_min: f32, in_max: f32, out_min: f32, out_max: f32) -> f32 {
    lerp(out_min, out_max, normalize(x, in_min, in_max))
}

/// Clamp `x` between two bounds given in either order
pub fn clamp_between(x: f32, a: f32, b: f32) -> f32 {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    if x < lo {
        lo
    } else if x > hi {
        hi
    } else {
        x
    }
}

/// Scalar interpolator driven by explicit microsecond timestamps
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Animation {
    start: f32,
    end: f32,
    duration_us: u64,
    elapsed_us: u64,
    /// May sit before t = 0 after a turn-around early in the run
    start_time_us: i64,
    progress: f32,
    enabled: bool,
    reversed: bool,
    looping: bool,
    breathing: bool,
    /// Breathing bounce already used for this run
    bounced: bool,
    /// Last state computed by `update`
    state: AnimState,
    easing: Easing,
}

impl Default for Animation {
    /// A static animation parked at 1.0, used for unscaled widgets
    fn default() -> Self {
        Self::new(1.0, 1.0, 0)
    }
}

impl Animation {
    /// Create a paused animation from `start` to `end` over `duration_ms`
    ///
    /// A zero duration is immediately finished at `end`.
    pub fn new(start: f32, end: f32, duration_ms: u32) -> Self {
        let duration_us = duration_ms as u64 * 1_000;
        let finished = duration_us == 0;
        Self {
            start,
            end,
            duration_us,
            elapsed_us: 0,
            start_time_us: 0,
            progress: if finished { end } else { start },
            enabled: false,
            reversed: false,
            looping: false,
            breathing: false,
            bounced: false,
            state: if finished {
                AnimState::Finished
            } else {
                AnimState::Start
            },
            easing: Easing::Linear,
        }
    }

    /// Builder: set the easing curve
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Builder: enable looping
    pub fn looping(mut self) -> Self {
        self.looping = true;
        self
    }

    /// Builder: enable breathing
    pub fn breathing(mut self) -> Self {
        self.breathing = true;
        self
    }

    fn origin(&self) -> f32 {
        if self.reversed {
            self.end
        } else {
            self.start
        }
    }

    fn target(&self) -> f32 {
        if self.reversed {
            self.start
        } else {
            self.end
        }
    }

    /// Enable and anchor the clock at `now_us`
    pub fn start(&mut self, now_us: u64) {
        self.enabled = true;
        self.start_time_us = now_us as i64;
    }

    /// Enable, keeping the progress accumulated before `pause`
    pub fn resume(&mut self, now_us: u64) {
        self.enabled = true;
        self.start_time_us = now_us as i64 - self.elapsed_us as i64;
    }

    /// Stop advancing without losing elapsed time
    pub fn pause(&mut self) {
        self.enabled = false;
    }

    /// Return to the origin
    ///
    /// Also re-arms the breathing bounce.
    pub fn reset(&mut self, now_us: u64) {
        self.start_time_us = now_us as i64;
        self.elapsed_us = 0;
        self.progress = self.origin();
        self.state = AnimState::Start;
        self.bounced = false;
    }

    /// Swap `start` and `end`, continuing from the current progress
    pub fn flip(&mut self, now_us: u64) {
        core::mem::swap(&mut self.start, &mut self.end);
        self.turn_around(now_us);
    }

    /// Travel back toward the origin, continuing from the current progress
    ///
    /// Unlike `flip` the endpoints stay put; only `reversed` toggles.
    pub fn invert(&mut self, now_us: u64) {
        self.reversed = !self.reversed;
        self.turn_around(now_us);
    }

    fn turn_around(&mut self, now_us: u64) {
        self.elapsed_us = self.duration_us.saturating_sub(self.elapsed_us);
        self.start_time_us = now_us as i64 - self.elapsed_us as i64;
        self.state = self.state_for_elapsed();
    }

    fn state_for_elapsed(&self) -> AnimState {
        if self.elapsed_us >= self.duration_us {
            AnimState::Finished
        } else if self.elapsed_us == 0 {
            AnimState::Start
        } else {
            AnimState::Running
        }
    }

    /// Advance to `now_us`
    ///
    /// Does nothing while paused. A finished animation only moves again if
    /// it loops or still has its breathing bounce.
    pub fn update(&mut self, now_us: u64) {
        if !self.enabled {
            return;
        }

        if self.duration_us == 0 {
            self.elapsed_us = 0;
            self.progress = self.target();
            self.state = AnimState::Finished;
            return;
        }

        if self.state == AnimState::Finished {
            if self.breathing && self.looping {
                self.invert(now_us);
            } else if self.breathing && !self.bounced {
                self.invert(now_us);
                self.bounced = true;
            } else if self.looping {
                self.reset(now_us);
            } else {
                return;
            }
        }

        self.elapsed_us = (now_us as i64 - self.start_time_us).max(0) as u64;
        self.elapsed_us = self.elapsed_us.min(self.duration_us);

        if self.elapsed_us >= self.duration_us {
            self.progress = self.target();
            self.state = AnimState::Finished;
            return;
        }

        self.progress = self.progress_for_elapsed();
        self.state = self.state_for_elapsed();
    }

    fn progress_for_elapsed(&self) -> f32 {
        if self.elapsed_us >= self.duration_us {
            return self.target();
        }
        let t = self.elapsed_us as f32 / self.duration_us as f32;
        let eased = self.easing.apply(t);
        clamp_between(lerp(self.origin(), self.target(), eased), self.start, self.end)
    }

    /// Completion state, derived from progress with `EPSILON` tolerance
    pub fn state(&self) -> AnimState {
        if fabsf(self.progress - self.target()) <= EPSILON || self.state == AnimState::Finished {
            AnimState::Finished
        } else if fabsf(self.progress - self.origin()) <= EPSILON
            || self.state == AnimState::Start
        {
            AnimState::Start
        } else {
            AnimState::Running
        }
    }

    pub fn is_running(&self) -> bool {
        self.state() == AnimState::Running
    }

    /// Current interpolated value
    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// True when travelling toward the larger endpoint
    pub fn direction(&self) -> bool {
        self.target() > self.origin()
    }

    pub fn is_reversed(&self) -> bool {
        self.reversed
    }

    pub fn start_value(&self) -> f32 {
        self.start
    }

    pub fn end_value(&self) -> f32 {
        self.end
    }

    pub fn elapsed_us(&self) -> u64 {
        self.elapsed_us
    }

    pub fn duration_us(&self) -> u64 {
        self.duration_us
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// Travel `end -> start` when `reversed`
    ///
    /// If the animation sits on its old origin it snaps to the new one.
    pub fn set_reversed(&mut self, reversed: bool) {
        let at_origin = fabsf(self.progress - self.origin()) <= EPSILON;
        self.reversed = reversed;
        if at_origin {
            self.progress = self.origin();
        }
    }

    pub fn set_looping(&mut self, looping: bool) {
        self.looping = looping;
    }

    pub fn set_breathing(&mut self, breathing: bool) {
        self.breathing = breathing;
        if breathing {
            self.bounced = false;
        }
    }

    pub fn set_easing(&mut self, easing: Easing) {
        self.easing = easing;
    }

    /// Change the run time, keeping the elapsed time
    ///
    /// Progress and state are re-derived, so a finished animation given a
    /// longer duration carries on from where the new timeline puts it.
    pub fn set_duration_ms(&mut self, duration_ms: u32) {
        self.duration_us = duration_ms as u64 * 1_000;
        self.elapsed_us = self.elapsed_us.min(self.duration_us);
        self.progress = self.progress_for_elapsed();
        self.state = self.state_for_elapsed();
    }

    /// Move the `start` endpoint, clamping progress into the new range
    pub fn set_start(&mut self, start: f32) {
        self.start = start;
        self.progress = clamp_between(self.progress, self.start, self.end);
    }

    /// Move the `end` endpoint, clamping progress into the new range
    pub fn set_end(&mut self, end: f32) {
        self.end = end;
        self.progress = clamp_between(self.progress, self.start, self.end);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: u64 = 1_000;

    fn approx(a: f32, b: f32) -> bool {
        fabsf(a - b) <= 1e-4
    }

    #[test]
    fn test_new_is_paused_at_start() {
        let anim = Animation::new(0.0, 10.0, 100);
        assert_eq!(anim.progress(), 0.0);
        assert_eq!(anim.state(), AnimState::Start);
        assert!(!anim.is_enabled());
        assert!(anim.direction());
    }

    #[test]
    fn test_zero_duration_is_finished() {
        let mut anim = Animation::new(0.0, 5.0, 0);
        assert_eq!(anim.progress(), 5.0);
        assert_eq!(anim.state(), AnimState::Finished);

        anim.start(0);
        anim.update(10);
        assert_eq!(anim.progress(), 5.0);
    }

    #[test]
    fn test_linear_midpoint_and_end() {
        let mut anim = Animation::new(0.0, 10.0, 100);
        anim.start(1_000);

        anim.update(1_000 + 50 * MS);
        assert!(approx(anim.progress(), 5.0));
        assert_eq!(anim.state(), AnimState::Running);

        anim.update(1_000 + 100 * MS);
        assert_eq!(anim.progress(), 10.0);
        assert_eq!(anim.state(), AnimState::Finished);

        // Past the end stays exactly on target
        anim.update(1_000 + 500 * MS);
        assert_eq!(anim.progress(), 10.0);
    }

    #[test]
    fn test_update_is_pure_in_time() {
        let mut a = Animation::new(0.0, 1.0, 100);
        let mut b = a.clone();
        a.start(0);
        b.start(0);

        a.update(30 * MS);
        a.update(30 * MS);
        for t in [5, 10, 20, 30] {
            b.update(t * MS);
        }
        assert_eq!(a.progress(), b.progress());
    }

    #[test]
    fn test_paused_does_not_advance() {
        let mut anim = Animation::new(0.0, 10.0, 100);
        anim.update(50 * MS);
        assert_eq!(anim.progress(), 0.0);

        anim.start(0);
        anim.update(20 * MS);
        anim.pause();
        anim.update(80 * MS);
        assert!(approx(anim.progress(), 2.0));

        // Resume keeps accumulated time
        anim.resume(200 * MS);
        anim.update(210 * MS);
        assert!(approx(anim.progress(), 3.0));
    }

    #[test]
    fn test_reset_returns_to_origin() {
        let mut anim = Animation::new(2.0, 4.0, 100);
        anim.start(0);
        anim.update(100 * MS);
        assert_eq!(anim.state(), AnimState::Finished);

        anim.reset(100 * MS);
        assert_eq!(anim.progress(), 2.0);
        assert_eq!(anim.state(), AnimState::Start);

        anim.update(100 * MS);
        assert!(approx(anim.progress(), 2.0));
    }

    #[test]
    fn test_flip_is_continuous() {
        let mut anim = Animation::new(0.0, 10.0, 100);
        anim.start(0);
        anim.update(30 * MS);
        let before = anim.progress();

        anim.flip(30 * MS);
        assert_eq!(anim.start_value(), 10.0);
        assert_eq!(anim.end_value(), 0.0);
        anim.update(30 * MS);
        assert!(approx(anim.progress(), before));

        // Heads back down and lands on the new end
        anim.update(40 * MS);
        assert!(anim.progress() < before);
        anim.update(60 * MS);
        assert_eq!(anim.progress(), 0.0);
        assert_eq!(anim.state(), AnimState::Finished);
    }

    #[test]
    fn test_invert_keeps_endpoints() {
        let mut anim = Animation::new(1.0, 2.0, 100);
        anim.start(0);
        anim.update(25 * MS);
        let before = anim.progress();

        anim.invert(25 * MS);
        assert!(anim.is_reversed());
        assert!(!anim.direction());
        anim.update(25 * MS);
        assert!(approx(anim.progress(), before));

        anim.update(50 * MS);
        assert_eq!(anim.progress(), 1.0);
        assert_eq!(anim.start_value(), 1.0);
    }

    #[test]
    fn test_reversed_runs_end_to_start() {
        let mut anim = Animation::new(0.0, 8.0, 100);
        anim.set_reversed(true);
        assert_eq!(anim.progress(), 8.0);

        anim.start(0);
        anim.update(50 * MS);
        assert!(approx(anim.progress(), 4.0));
        anim.update(100 * MS);
        assert_eq!(anim.progress(), 0.0);
        assert_eq!(anim.state(), AnimState::Finished);
    }

    #[test]
    fn test_looping_restarts() {
        let mut anim = Animation::new(0.0, 1.0, 100).looping();
        anim.start(0);
        anim.update(100 * MS);
        assert_eq!(anim.state(), AnimState::Finished);

        anim.update(150 * MS);
        // Reset anchors at 150ms, so this frame sits on the origin
        assert_eq!(anim.progress(), 0.0);
        anim.update(200 * MS);
        assert!(approx(anim.progress(), 0.5));
    }

    #[test]
    fn test_breathing_bounces_once() {
        let mut anim = Animation::new(0.0, 1.0, 100).breathing();
        anim.start(0);
        anim.update(100 * MS);
        assert_eq!(anim.progress(), 1.0);

        // Bounce
        anim.update(100 * MS);
        assert_eq!(anim.progress(), 1.0);
        anim.update(150 * MS);
        assert!(approx(anim.progress(), 0.5));
        anim.update(200 * MS);
        assert_eq!(anim.progress(), 0.0);

        // No second bounce
        anim.update(300 * MS);
        assert_eq!(anim.progress(), 0.0);
        assert_eq!(anim.state(), AnimState::Finished);

        // Re-armed by set_breathing
        anim.set_breathing(true);
        anim.update(300 * MS);
        anim.update(350 * MS);
        assert!(approx(anim.progress(), 0.5));
    }

    #[test]
    fn test_looping_breathing_oscillates() {
        let mut anim = Animation::new(0.0, 1.0, 100).looping().breathing();
        anim.start(0);
        anim.update(100 * MS);
        anim.update(100 * MS);
        anim.update(200 * MS);
        assert_eq!(anim.progress(), 0.0);
        anim.update(200 * MS);
        anim.update(250 * MS);
        assert!(approx(anim.progress(), 0.5));
        assert!(anim.direction());
    }

    #[test]
    fn test_longer_duration_resumes_finished() {
        let mut anim = Animation::new(0.0, 10.0, 100);
        anim.start(0);
        anim.update(100 * MS);
        assert_eq!(anim.state(), AnimState::Finished);

        anim.set_duration_ms(200);
        assert_eq!(anim.state(), AnimState::Running);
        assert!(approx(anim.progress(), 5.0));

        anim.update(150 * MS);
        assert!(approx(anim.progress(), 7.5));
        anim.update(200 * MS);
        assert_eq!(anim.state(), AnimState::Finished);
        assert_eq!(anim.progress(), 10.0);
    }

    #[test]
    fn test_shorter_duration_finishes() {
        let mut anim = Animation::new(0.0, 10.0, 100);
        anim.start(0);
        anim.update(60 * MS);
        anim.set_duration_ms(50);
        assert_eq!(anim.state(), AnimState::Finished);
        assert_eq!(anim.progress(), 10.0);
    }

    #[test]
    fn test_set_end_clamps_progress() {
        let mut anim = Animation::new(1.0, 2.0, 100);
        anim.start(0);
        anim.update(100 * MS);
        assert_eq!(anim.progress(), 2.0);

        anim.set_end(1.0);
        assert_eq!(anim.progress(), 1.0);
        assert_eq!(anim.state(), AnimState::Finished);
    }

    #[test]
    fn test_easing_curves() {
        for easing in [Easing::Linear, Easing::Sinusoidal, Easing::SmoothStep(2.5)] {
            assert!(approx(easing.apply(0.0), 0.0));
            assert!(approx(easing.apply(1.0), 1.0));
            assert!(approx(easing.apply(0.5), 0.5));
            assert!(approx(easing.apply(0.2), 1.0 - easing.apply(0.8)));
        }
        assert!(Easing::SmoothStep(3.0).apply(0.1) < 0.1);
    }

    #[test]
    fn test_math_helpers() {
        assert_eq!(lerp(2.0, 4.0, 0.5), 3.0);
        assert_eq!(normalize(5.0, 0.0, 10.0), 0.5);
        assert_eq!(map_range(5.0, 0.0, 10.0, 100.0, 200.0), 150.0);
        assert_eq!(clamp_between(5.0, 3.0, 1.0), 3.0);
        assert_eq!(clamp_between(-1.0, 3.0, 1.0), 1.0);
        assert_eq!(clamp_between(2.0, 1.0, 3.0), 2.0);
    }
}
