//! Classification verdict and its fixed visual presentation

use serde::{Deserialize, Serialize};

/// Outcome of classifying one email.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Spam,
    NotSpam,
}

impl Verdict {
    /// Map the service's `is_spam` flag to a verdict
    pub fn from_is_spam(is_spam: bool) -> Self {
        if is_spam {
            Verdict::Spam
        } else {
            Verdict::NotSpam
        }
    }

    pub fn is_spam(&self) -> bool {
        matches!(self, Verdict::Spam)
    }

    /// Visual panel for this verdict
    pub fn presentation(&self) -> ResultPresentation {
        match self {
            Verdict::Spam => ResultPresentation {
                icon: ResultIcon::Danger,
                heading: "Suspicious Email Detected!",
                message: "This email may be a spam or phishing attempt. \
                          Be cautious before clicking any links or providing personal details.",
                style: ResultStyle::Spam,
            },
            Verdict::NotSpam => ResultPresentation {
                icon: ResultIcon::Safe,
                heading: "Looks Safe!",
                message: "This email does not appear to be spam. \
                          However, always verify sender details before taking action.",
                style: ResultStyle::NotSpam,
            },
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Spam => write!(f, "spam"),
            Verdict::NotSpam => write!(f, "not spam"),
        }
    }
}

/// Icon slot shown at the top of the result panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultIcon {
    /// Warning triangle
    Danger,
    /// Check mark
    Safe,
}

/// Style class of the result panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultStyle {
    Spam,
    NotSpam,
}

impl ResultStyle {
    pub fn class_name(&self) -> &'static str {
        match self {
            ResultStyle::Spam => "spam",
            ResultStyle::NotSpam => "not-spam",
        }
    }
}

/// Everything needed to draw the result panel for a verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultPresentation {
    pub icon: ResultIcon,
    pub heading: &'static str,
    pub message: &'static str,
    pub style: ResultStyle,
}
