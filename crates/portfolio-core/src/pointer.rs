use crate::config::PointerConfig;
use crate::state::{state_cell, StateReader, StateWriter};

/// Normalized pointer position. `x` grows to the right, `y` grows upward,
/// both span \[-1, 1\] across the viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
}

/// Map raw viewport pixels to normalized device coordinates.
///
/// Returns `None` for a degenerate viewport.
#[inline]
pub fn normalize_pointer(raw_x: f32, raw_y: f32, width: f32, height: f32) -> Option<PointerState> {
    if !(width > 0.0 && height > 0.0) {
        return None;
    }
    Some(PointerState {
        x: 2.0 * raw_x / width - 1.0,
        y: -(2.0 * raw_y / height - 1.0),
    })
}

/// Sole writer of the shared [`PointerState`].
#[derive(Debug)]
pub struct PointerTracker {
    writer: StateWriter<PointerState>,
    clamp: bool,
}

impl PointerTracker {
    pub fn new(config: &PointerConfig) -> Self {
        let (writer, _) = state_cell(PointerState::default());
        Self {
            writer,
            clamp: config.clamp,
        }
    }

    pub fn reader(&self) -> StateReader<PointerState> {
        self.writer.reader()
    }

    /// Record a pointer move. Last write wins; a zero-sized viewport leaves
    /// the previous state untouched.
    pub fn on_move(&mut self, raw_x: f32, raw_y: f32, viewport_w: f32, viewport_h: f32) {
        let Some(mut p) = normalize_pointer(raw_x, raw_y, viewport_w, viewport_h) else {
            log::trace!("[pointer] ignoring move on {viewport_w}x{viewport_h} viewport");
            return;
        };
        if self.clamp {
            p.x = p.x.clamp(-1.0, 1.0);
            p.y = p.y.clamp(-1.0, 1.0);
        }
        self.writer.set(p);
    }

    pub fn state(&self) -> PointerState {
        self.writer.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_maps_to_origin() {
        let p = normalize_pointer(400.0, 300.0, 800.0, 600.0).unwrap();
        assert_eq!(p, PointerState { x: 0.0, y: 0.0 });
    }

    #[test]
    fn zero_viewport_keeps_previous_state() {
        let mut t = PointerTracker::new(&PointerConfig::default());
        t.on_move(0.0, 0.0, 100.0, 100.0);
        t.on_move(50.0, 50.0, 0.0, 100.0);
        assert_eq!(t.state(), PointerState { x: -1.0, y: 1.0 });
    }

    #[test]
    fn clamp_limits_out_of_viewport_moves() {
        let mut t = PointerTracker::new(&PointerConfig { clamp: true });
        t.on_move(-100.0, 300.0, 100.0, 100.0);
        assert_eq!(t.state(), PointerState { x: -1.0, y: -1.0 });
    }
}
