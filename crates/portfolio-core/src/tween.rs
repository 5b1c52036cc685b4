//! Easing curves and time-based tweens.
//!
//! Used by the color cycle (segment easing), the entrance animations and the
//! loading-screen fade.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Ease {
    #[default]
    Linear,
    /// Quadratic decelerate.
    Power1Out,
    /// Cubic accelerate then decelerate, symmetric around 0.5.
    Power2InOut,
}

impl Ease {
    /// Map linear progress `p` in \[0, 1\] to eased progress. Input is clamped,
    /// `apply(0) == 0` and `apply(1) == 1` exactly.
    pub fn apply(self, p: f32) -> f32 {
        let p = p.clamp(0.0, 1.0);
        match self {
            Ease::Linear => p,
            Ease::Power1Out => {
                let inv = 1.0 - p;
                1.0 - inv * inv
            }
            Ease::Power2InOut => {
                if p < 0.5 {
                    4.0 * p * p * p
                } else {
                    let k = -2.0 * p + 2.0;
                    1.0 - k * k * k / 2.0
                }
            }
        }
    }
}

/// A one-shot tween from `from` to `to` after an optional delay.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    pub from: f32,
    pub to: f32,
    pub duration: f32,
    pub delay: f32,
    pub ease: Ease,
}

impl Tween {
    pub fn new(from: f32, to: f32, duration: f32) -> Self {
        Self {
            from,
            to,
            duration,
            delay: 0.0,
            ease: Ease::Linear,
        }
    }

    pub fn with_delay(mut self, delay: f32) -> Self {
        self.delay = delay.max(0.0);
        self
    }

    pub fn with_ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    /// Total time from start to the final value, delay included.
    pub fn total(&self) -> f32 {
        self.delay + self.duration
    }

    /// Linear progress in \[0, 1\] at `t` seconds after the tween was started.
    pub fn progress(&self, t: f32) -> f32 {
        if self.duration <= 0.0 {
            return if t >= self.delay { 1.0 } else { 0.0 };
        }
        ((t - self.delay) / self.duration).clamp(0.0, 1.0)
    }

    pub fn value_at(&self, t: f32) -> f32 {
        let k = self.ease.apply(self.progress(t));
        self.from + (self.to - self.from) * k
    }

    pub fn is_finished(&self, t: f32) -> bool {
        t >= self.total()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Paused,
    Forward,
    Backward,
}

/// A tween whose playhead can be played forward or reversed from wherever it
/// currently sits.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReversibleTween {
    pub tween: Tween,
    playhead: f32,
    direction: Direction,
}

impl ReversibleTween {
    pub fn new(tween: Tween) -> Self {
        Self {
            tween,
            playhead: 0.0,
            direction: Direction::Paused,
        }
    }

    pub fn play(&mut self) {
        self.direction = Direction::Forward;
    }

    /// Run backwards towards the start. The delay is not replayed.
    pub fn reverse(&mut self) {
        self.playhead = self.playhead.max(self.tween.delay);
        self.direction = Direction::Backward;
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn playhead(&self) -> f32 {
        self.playhead
    }

    /// Advance by `dt` seconds. Returns `true` while the value is still
    /// changing.
    pub fn advance(&mut self, dt: f32) -> bool {
        let dt = dt.max(0.0);
        match self.direction {
            Direction::Paused => false,
            Direction::Forward => {
                self.playhead = (self.playhead + dt).min(self.tween.total());
                if self.playhead >= self.tween.total() {
                    self.direction = Direction::Paused;
                }
                true
            }
            Direction::Backward => {
                let floor = self.tween.delay;
                self.playhead = (self.playhead - dt).max(floor);
                if self.playhead <= floor {
                    self.playhead = 0.0;
                    self.direction = Direction::Paused;
                }
                true
            }
        }
    }

    pub fn value(&self) -> f32 {
        self.tween.value_at(self.playhead)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eases_hit_endpoints_exactly() {
        for ease in [Ease::Linear, Ease::Power1Out, Ease::Power2InOut] {
            assert_eq!(ease.apply(0.0), 0.0);
            assert_eq!(ease.apply(1.0), 1.0);
        }
    }

    #[test]
    fn power2_in_out_is_symmetric() {
        for i in 0..=50 {
            let p = i as f32 / 100.0;
            let a = Ease::Power2InOut.apply(p);
            let b = Ease::Power2InOut.apply(1.0 - p);
            assert!((a + b - 1.0).abs() < 1e-5, "asymmetry at {p}");
        }
    }

    #[test]
    fn tween_respects_delay() {
        let t = Tween::new(100.0, 0.0, 0.75).with_delay(0.5);
        assert_eq!(t.value_at(0.0), 100.0);
        assert_eq!(t.value_at(0.5), 100.0);
        assert_eq!(t.value_at(1.25), 0.0);
        assert!(t.is_finished(1.25));
        assert!(!t.is_finished(1.0));
    }

    #[test]
    fn reversible_tween_returns_to_start() {
        let mut rt = ReversibleTween::new(Tween::new(0.0, 1.0, 1.0));
        rt.play();
        rt.advance(0.5);
        assert!((rt.value() - 0.5).abs() < 1e-6);
        rt.reverse();
        rt.advance(0.25);
        assert!((rt.value() - 0.25).abs() < 1e-6);
        rt.advance(10.0);
        assert_eq!(rt.value(), 0.0);
        assert_eq!(rt.direction(), Direction::Paused);
    }
}
