use std::time::{Duration, Instant};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedbackKind {
    Success,
    Error,
}

/// Modal state machine: Closed -> Open(success|error) -> Closed.
/// Opening happens on mint completion or a validation guard; closing only
/// on explicit user dismissal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Feedback {
    Closed,
    Open {
        kind: FeedbackKind,
        message: String,
        detail_link: Option<String>,
    },
}

impl Feedback {
    pub fn success(message: impl Into<String>, detail_link: String) -> Self {
        Feedback::Open {
            kind: FeedbackKind::Success,
            message: message.into(),
            detail_link: Some(detail_link),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Feedback::Open {
            kind: FeedbackKind::Error,
            message: message.into(),
            detail_link: None,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Feedback::Open { .. })
    }

    pub fn kind(&self) -> Option<FeedbackKind> {
        match self {
            Feedback::Open { kind, .. } => Some(*kind),
            Feedback::Closed => None,
        }
    }

    pub fn dismiss(&mut self) {
        *self = Feedback::Closed;
    }
}

/// Time-bounded celebratory animation trigger. Purely decorative: expiry
/// never touches the modal state, and tests of the core flow can ignore it.
#[derive(Clone, Debug, Default)]
pub struct ConfettiTimer {
    until: Option<Instant>,
}

impl ConfettiTimer {
    pub fn start(&mut self, duration: Duration) {
        self.until = Some(Instant::now() + duration);
    }

    pub fn is_active(&self, now: Instant) -> bool {
        self.until.map_or(false, |until| now < until)
    }

    /// Drop the expired deadline; called from the render tick.
    pub fn tick(&mut self, now: Instant) {
        if let Some(until) = self.until {
            if now >= until {
                self.until = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        let feedback = Feedback::Closed;
        assert!(!feedback.is_open());
        assert_eq!(feedback.kind(), None);
    }

    #[test]
    fn success_carries_detail_link() {
        let feedback = Feedback::success("Minting succeeded!", "https://x/tx/0xd".to_string());
        assert_eq!(feedback.kind(), Some(FeedbackKind::Success));
        match &feedback {
            Feedback::Open { detail_link, .. } => {
                assert_eq!(detail_link.as_deref(), Some("https://x/tx/0xd"));
            }
            Feedback::Closed => panic!("expected open feedback"),
        }
    }

    #[test]
    fn error_has_no_detail_link() {
        let feedback = Feedback::error("Minting failed: boom");
        assert_eq!(feedback.kind(), Some(FeedbackKind::Error));
        match &feedback {
            Feedback::Open { detail_link, .. } => assert!(detail_link.is_none()),
            Feedback::Closed => panic!("expected open feedback"),
        }
    }

    #[test]
    fn only_dismiss_closes_the_modal() {
        let mut feedback = Feedback::error("Minting failed: boom");
        assert!(feedback.is_open());
        feedback.dismiss();
        assert_eq!(feedback, Feedback::Closed);
    }

    #[test]
    fn confetti_expires_without_touching_feedback() {
        let feedback = Feedback::success("Minting succeeded!", "link".to_string());
        let mut confetti = ConfettiTimer::default();
        let start = Instant::now();
        confetti.start(Duration::from_millis(1_800));

        assert!(confetti.is_active(start));
        let after = start + Duration::from_millis(2_000);
        assert!(!confetti.is_active(after));

        confetti.tick(after);
        assert!(!confetti.is_active(after));
        assert!(feedback.is_open());
    }
}
