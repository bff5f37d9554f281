use serde::{Deserialize, Serialize};

/// Labels reserved by the mail provider, addressed by fixed identifiers
/// rather than created on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SystemLabel {
    /// The inbox.
    Inbox,
    /// The spam folder.
    Spam,
    /// The trash folder.
    Trash,
    /// The importance marker.
    Important,
    /// Sent mail.
    Sent,
    /// Drafts.
    Draft,
    /// The unread marker.
    Unread,
}

impl SystemLabel {
    /// Parse a label name case-insensitively. Returns `None` for anything
    /// that is not a reserved system label.
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_uppercase().as_str() {
            "INBOX" => Some(Self::Inbox),
            "SPAM" => Some(Self::Spam),
            "TRASH" => Some(Self::Trash),
            "IMPORTANT" => Some(Self::Important),
            "SENT" => Some(Self::Sent),
            "DRAFT" => Some(Self::Draft),
            "UNREAD" => Some(Self::Unread),
            _ => None,
        }
    }

    /// The provider-side identifier for this label.
    pub fn id(self) -> &'static str {
        match self {
            Self::Inbox => "INBOX",
            Self::Spam => "SPAM",
            Self::Trash => "TRASH",
            Self::Important => "IMPORTANT",
            Self::Sent => "SENT",
            Self::Draft => "DRAFT",
            Self::Unread => "UNREAD",
        }
    }
}

/// Where a `move_to_label` action will land.
///
/// Classification only: creating custom labels is the action sink's concern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelTarget {
    /// A reserved system label, addressed by its fixed identifier.
    System(SystemLabel),
    /// A user label, created by the sink if it does not exist yet.
    Custom(String),
}

impl LabelTarget {
    /// Classify a label name as system or custom.
    pub fn resolve(name: &str) -> Self {
        match SystemLabel::parse(name) {
            Some(system) => Self::System(system),
            None => Self::Custom(name.to_owned()),
        }
    }
}
