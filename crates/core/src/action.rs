use serde::{Deserialize, Serialize};

/// An effect to apply to a matched email.
///
/// The engine only decides which actions apply; the action sink collaborator
/// performs them. `move_message` is accepted as a legacy alias for
/// `move_to_label` on input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MailAction {
    /// Clear the unread marker.
    MarkAsRead,
    /// Set the unread marker.
    MarkAsUnread,
    /// Apply a label, creating it first if it does not exist.
    #[serde(alias = "move_message")]
    MoveToLabel {
        /// The label to apply. May name a reserved system label or a custom
        /// one; see [`LabelTarget::resolve`](crate::LabelTarget::resolve).
        label: String,
    },
}

impl MailAction {
    /// A human-readable description of the action, used in scan reports.
    pub fn describe(&self) -> String {
        match self {
            Self::MarkAsRead => "Marked as read".to_owned(),
            Self::MarkAsUnread => "Marked as unread".to_owned(),
            Self::MoveToLabel { label } => format!("Moved to label \"{label}\""),
        }
    }
}
