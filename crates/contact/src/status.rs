use serde::Deserialize;
use strum::{AsRefStr, Display};

pub const SUBMIT_LABEL: &str = "Send Message";
pub const SUBMIT_PENDING_LABEL: &str = "Sending...";

#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Pending,
    Succeeded(String),
    Failed(String),
}

#[derive(Display, AsRefStr, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum BannerKind {
    Success,
    Error,
}

/// Feedback shown above the form once a submission has settled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Banner<'a> {
    pub kind: BannerKind,
    pub message: &'a str,
}

impl SubmissionStatus {
    /// Status that renders back as the given banner.
    pub fn settled(kind: BannerKind, message: impl Into<String>) -> Self {
        match kind {
            BannerKind::Success => SubmissionStatus::Succeeded(message.into()),
            BannerKind::Error => SubmissionStatus::Failed(message.into()),
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, SubmissionStatus::Pending)
    }

    pub fn banner(&self) -> Option<Banner<'_>> {
        match self {
            SubmissionStatus::Succeeded(message) => Some(Banner {
                kind: BannerKind::Success,
                message,
            }),
            SubmissionStatus::Failed(message) => Some(Banner {
                kind: BannerKind::Error,
                message,
            }),
            SubmissionStatus::Idle | SubmissionStatus::Pending => None,
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_pending() {
            SUBMIT_PENDING_LABEL
        } else {
            SUBMIT_LABEL
        }
    }
}
