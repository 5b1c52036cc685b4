//! Contact form submit feedback.
//!
//! Submission is simulated: the button walks through a fixed sequence of
//! labels on timers and the form is cleared at the end.

use crate::constants::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ButtonState {
    pub label: String,
    pub disabled: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitPhase {
    Sending,
    Sent,
    Restored,
}

/// One scheduled change to the submit button.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitStep {
    pub phase: SubmitPhase,
    /// Delay after the previous step, in milliseconds.
    pub delay_ms: u32,
    pub button: ButtonState,
    pub reset_form: bool,
}

/// The full feedback sequence for a submit, starting from the button's
/// `original` label.
pub fn submission_steps(original: &str) -> [SubmitStep; 3] {
    [
        SubmitStep {
            phase: SubmitPhase::Sending,
            delay_ms: 0,
            button: ButtonState {
                label: SENDING_LABEL.to_string(),
                disabled: true,
            },
            reset_form: false,
        },
        SubmitStep {
            phase: SubmitPhase::Sent,
            delay_ms: SENT_DELAY_MS,
            button: ButtonState {
                label: SENT_LABEL.to_string(),
                disabled: true,
            },
            reset_form: false,
        },
        SubmitStep {
            phase: SubmitPhase::Restored,
            delay_ms: RESTORE_DELAY_MS,
            button: ButtonState {
                label: original.to_string(),
                disabled: false,
            },
            reset_form: true,
        },
    ]
}

/// Button state `elapsed_ms` after submit.
pub fn button_at(original: &str, elapsed_ms: u32) -> ButtonState {
    let mut at = 0u32;
    let mut state = ButtonState {
        label: original.to_string(),
        disabled: false,
    };
    for step in submission_steps(original) {
        at = at.saturating_add(step.delay_ms);
        if elapsed_ms < at {
            break;
        }
        state = step.button;
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_are_cumulative() {
        assert_eq!(button_at("Send", 0).label, SENDING_LABEL);
        assert_eq!(button_at("Send", 1499).label, SENDING_LABEL);
        assert_eq!(button_at("Send", 1500).label, SENT_LABEL);
        assert_eq!(button_at("Send", 3499).label, SENT_LABEL);
        assert_eq!(
            button_at("Send", 3500),
            ButtonState {
                label: "Send".into(),
                disabled: false
            }
        );
    }

    #[test]
    fn only_last_step_resets() {
        let steps = submission_steps("Send Message");
        assert_eq!(steps.iter().filter(|s| s.reset_form).count(), 1);
        assert!(steps[2].reset_form);
    }
}
