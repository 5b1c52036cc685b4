//! Section highlighting for the navigation bar.

/// Fraction of a section that must be visible before its link turns active.
pub const VISIBILITY_THRESHOLD: f64 = 0.5;

/// One intersection notification: a section id and whether it crossed into
/// view.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionVisibility {
    pub id: String,
    pub intersecting: bool,
}

impl SectionVisibility {
    pub fn new(id: impl Into<String>, intersecting: bool) -> Self {
        Self {
            id: id.into(),
            intersecting,
        }
    }
}

/// Tracks which navigation link is highlighted. At most one is active.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    active: Option<String>,
}

impl NavState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a batch of notifications. The last intersecting entry wins.
    /// Returns `true` when the active section changed.
    pub fn observe<'a, I>(&mut self, entries: I) -> bool
    where
        I: IntoIterator<Item = &'a SectionVisibility>,
    {
        let Some(winner) = entries.into_iter().filter(|e| e.intersecting).last() else {
            return false;
        };
        if self.active.as_deref() == Some(winner.id.as_str()) {
            return false;
        }
        log::debug!("[nav] active section -> {}", winner.id);
        self.active = Some(winner.id.clone());
        true
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active() == Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_intersecting_batch_keeps_current() {
        let mut nav = NavState::new();
        nav.observe(&[SectionVisibility::new("about", true)]);
        assert!(!nav.observe(&[SectionVisibility::new("about", false)]));
        assert_eq!(nav.active(), Some("about"));
    }

    #[test]
    fn last_entry_in_batch_wins() {
        let mut nav = NavState::new();
        let batch = [
            SectionVisibility::new("home", true),
            SectionVisibility::new("projects", true),
            SectionVisibility::new("contact", false),
        ];
        assert!(nav.observe(&batch));
        assert!(nav.is_active("projects"));
        assert!(!nav.is_active("home"));
    }
}
