//! Loading screen hold-then-fade.

use crate::constants::*;
use crate::tween::{Ease, Tween};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LoadingPhase {
    Visible,
    Fading(f32),
    Hidden,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LoadingFade {
    tween: Tween,
}

impl Default for LoadingFade {
    fn default() -> Self {
        Self::new(LOADING_HOLD_SEC, LOADING_FADE_SEC)
    }
}

impl LoadingFade {
    pub fn new(hold: f32, fade: f32) -> Self {
        Self {
            tween: Tween::new(1.0, 0.0, fade)
                .with_delay(hold)
                .with_ease(Ease::Power1Out),
        }
    }

    pub fn phase(&self, elapsed: f32) -> LoadingPhase {
        if self.tween.is_finished(elapsed) {
            LoadingPhase::Hidden
        } else if elapsed < self.tween.delay {
            LoadingPhase::Visible
        } else {
            LoadingPhase::Fading(self.tween.value_at(elapsed))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn holds_fades_then_hides() {
        let f = LoadingFade::default();
        assert_eq!(f.phase(1.5), LoadingPhase::Visible);
        assert_eq!(f.phase(2.5), LoadingPhase::Fading(0.25));
        assert_eq!(f.phase(3.0), LoadingPhase::Hidden);
    }

    #[test]
    fn fade_decelerates() {
        let f = LoadingFade::default();
        let LoadingPhase::Fading(early) = f.phase(2.25) else {
            panic!("expected fading at 2.25");
        };
        let LoadingPhase::Fading(late) = f.phase(2.75) else {
            panic!("expected fading at 2.75");
        };
        // most of the opacity drops in the first half
        assert!(1.0 - early > late);
    }
}
