//! Order submission lifecycle.

/// Observable state of a submission round trip.
///
/// Moves Idle to Pending to Resolved; a resolved outcome returns to Idle only
/// when the user dismisses it or a new attempt begins. While Pending, the UI
/// is expected to disable the submit control, and [`Submission::begin`]
/// refuses a second attempt regardless.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Submission {
    /// No submission in flight and no prior outcome on display.
    #[default]
    Idle,
    /// A request is in flight.
    Pending,
    /// The last attempt finished.
    Resolved { success: bool, message: String },
}

impl Submission {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved { .. })
    }

    /// Starts a new attempt. Returns false while one is already in flight,
    /// leaving the state untouched.
    pub fn begin(&mut self) -> bool {
        if self.is_pending() {
            return false;
        }
        *self = Self::Pending;
        true
    }

    /// Ends the attempt successfully.
    pub fn resolve_success(&mut self, message: impl Into<String>) {
        *self = Self::Resolved {
            success: true,
            message: message.into(),
        };
    }

    /// Ends the attempt with a failure. Also used for attempts refused before
    /// any request goes out (an empty cart).
    pub fn resolve_failure(&mut self, message: impl Into<String>) {
        *self = Self::Resolved {
            success: false,
            message: message.into(),
        };
    }

    /// Clears a resolved outcome from display. A pending attempt stays
    /// pending.
    pub fn dismiss(&mut self) {
        if self.is_resolved() {
            *self = Self::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walks_the_full_lifecycle() {
        let mut submission = Submission::default();
        assert_eq!(submission, Submission::Idle);

        assert!(submission.begin());
        assert!(submission.is_pending());

        submission.resolve_success("Order created. ID: 123");
        assert_eq!(
            submission,
            Submission::Resolved {
                success: true,
                message: "Order created. ID: 123".to_string()
            }
        );

        submission.dismiss();
        assert_eq!(submission, Submission::Idle);
    }

    #[test]
    fn begin_refuses_while_pending() {
        let mut submission = Submission::default();
        assert!(submission.begin());
        assert!(!submission.begin());
        assert!(submission.is_pending());
    }

    #[test]
    fn begin_replaces_a_resolved_outcome() {
        let mut submission = Submission::default();
        submission.resolve_failure("Network error");
        assert!(submission.begin());
        assert!(submission.is_pending());
    }

    #[test]
    fn dismiss_leaves_pending_untouched() {
        let mut submission = Submission::default();
        submission.begin();
        submission.dismiss();
        assert!(submission.is_pending());
    }
}
