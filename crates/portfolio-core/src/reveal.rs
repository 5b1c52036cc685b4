//! Scroll-triggered entrance animations.
//!
//! A trigger watches an element's bounding box against two lines in the
//! viewport. Crossing the start line going down plays the entrance; crossing
//! back above it reverses. Leaving past the end line and coming back from
//! below do nothing.

use crate::constants::*;
use crate::tween::{Ease, ReversibleTween, Tween};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Zone {
    /// Element top is still below the start line.
    Before,
    Active,
    /// Element bottom has scrolled above the end line.
    After,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealAction {
    Play,
    Reverse,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealTrigger {
    /// Start line as a fraction of viewport height from the top.
    pub start: f32,
    pub end: f32,
    zone: Option<Zone>,
}

impl Default for RevealTrigger {
    fn default() -> Self {
        Self::new(REVEAL_START_FRACTION, REVEAL_END_FRACTION)
    }
}

impl RevealTrigger {
    pub fn new(start: f32, end: f32) -> Self {
        Self {
            start,
            end,
            zone: None,
        }
    }

    pub fn zone_for(&self, top: f32, bottom: f32, viewport_h: f32) -> Zone {
        if top > self.start * viewport_h {
            Zone::Before
        } else if bottom < self.end * viewport_h {
            Zone::After
        } else {
            Zone::Active
        }
    }

    pub fn zone(&self) -> Option<Zone> {
        self.zone
    }

    /// Feed the element's current viewport-relative bounds. Returns the
    /// action to apply, if the element crossed the start line.
    pub fn update(&mut self, top: f32, bottom: f32, viewport_h: f32) -> Option<RevealAction> {
        if viewport_h <= 0.0 {
            return None;
        }
        let next = self.zone_for(top, bottom, viewport_h);
        let prev = self.zone.replace(next);
        match (prev, next) {
            (None, Zone::Before) => None,
            (None, _) => Some(RevealAction::Play),
            (Some(Zone::Before), Zone::Active | Zone::After) => Some(RevealAction::Play),
            (Some(Zone::Active | Zone::After), Zone::Before) => Some(RevealAction::Reverse),
            _ => None,
        }
    }
}

/// Visual offset and opacity of an entering element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EntranceStyle {
    pub translate_x: f32,
    pub translate_y: f32,
    pub opacity: f32,
}

impl EntranceStyle {
    pub const REST: EntranceStyle = EntranceStyle {
        translate_x: 0.0,
        translate_y: 0.0,
        opacity: 1.0,
    };

    pub fn css_transform(&self) -> String {
        format!("translate({}px, {}px)", self.translate_x, self.translate_y)
    }
}

/// An element sliding in from an offset while fading in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Entrance {
    offset_x: f32,
    offset_y: f32,
    progress: ReversibleTween,
    pub trigger: RevealTrigger,
}

impl Entrance {
    fn new(offset_x: f32, offset_y: f32, duration: f32, delay: f32) -> Self {
        let tween = Tween::new(0.0, 1.0, duration)
            .with_delay(delay)
            .with_ease(Ease::Power1Out);
        Self {
            offset_x,
            offset_y,
            progress: ReversibleTween::new(tween),
            trigger: RevealTrigger::default(),
        }
    }

    /// Project card `index`: rises from below, staggered by position.
    pub fn card(index: usize) -> Self {
        Self::new(
            0.0,
            CARD_OFFSET_Y,
            CARD_DURATION_SEC,
            CARD_STAGGER_SEC * index as f32,
        )
    }

    /// Contact form: slides in from the right.
    pub fn form() -> Self {
        Self::new(FORM_OFFSET_X, 0.0, FORM_DURATION_SEC, 0.0)
    }

    /// Feed scroll bounds; starts or reverses the tween on a crossing.
    pub fn on_scroll(&mut self, top: f32, bottom: f32, viewport_h: f32) -> Option<RevealAction> {
        let action = self.trigger.update(top, bottom, viewport_h)?;
        match action {
            RevealAction::Play => self.progress.play(),
            RevealAction::Reverse => self.progress.reverse(),
        }
        Some(action)
    }

    /// Advance by `dt` seconds. Returns `true` while the style is changing.
    pub fn advance(&mut self, dt: f32) -> bool {
        self.progress.advance(dt)
    }

    pub fn style(&self) -> EntranceStyle {
        let k = self.progress.value();
        let remain = 1.0 - k;
        EntranceStyle {
            translate_x: self.offset_x * remain,
            translate_y: self.offset_y * remain,
            opacity: k,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VH: f32 = 1000.0;

    #[test]
    fn starts_hidden_at_offset() {
        let e = Entrance::card(0);
        assert_eq!(
            e.style(),
            EntranceStyle {
                translate_x: 0.0,
                translate_y: 100.0,
                opacity: 0.0
            }
        );
    }

    #[test]
    fn crossing_start_line_plays_and_back_reverses() {
        let mut t = RevealTrigger::default();
        assert_eq!(t.update(900.0, 1200.0, VH), None);
        assert_eq!(t.update(700.0, 1000.0, VH), Some(RevealAction::Play));
        assert_eq!(t.update(-400.0, 100.0, VH), None);
        assert_eq!(t.update(-100.0, 300.0, VH), None);
        assert_eq!(t.update(850.0, 1150.0, VH), Some(RevealAction::Reverse));
    }

    #[test]
    fn already_visible_on_first_update_plays() {
        let mut t = RevealTrigger::default();
        assert_eq!(t.update(100.0, 400.0, VH), Some(RevealAction::Play));
    }

    #[test]
    fn card_reaches_rest_after_delay_and_duration() {
        let mut e = Entrance::card(2);
        e.on_scroll(500.0, 800.0, VH);
        e.advance(0.4);
        assert_eq!(e.style().opacity, 0.0);
        e.advance(0.8);
        assert_eq!(e.style(), EntranceStyle::REST);
    }
}
