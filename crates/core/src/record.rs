use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The fixed set of record fields a condition may reference.
///
/// Wire names match the [`EmailRecord`] schema; the shorter header-style
/// aliases (`from`, `sender`, `to`, `recipient`, `date`, `body`) are accepted
/// on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldName {
    /// The sender address.
    #[serde(rename = "from_address", alias = "from", alias = "sender")]
    From,
    /// The recipient address.
    #[serde(rename = "to_address", alias = "to", alias = "recipient")]
    To,
    /// The subject line.
    #[serde(rename = "subject")]
    Subject,
    /// The timestamp the message was received. The only non-string field.
    #[serde(rename = "received_date", alias = "date")]
    ReceivedDate,
    /// The message body.
    #[serde(rename = "message_body", alias = "body")]
    Body,
}

impl FieldName {
    /// Return the canonical wire name of the field.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::From => "from_address",
            Self::To => "to_address",
            Self::Subject => "subject",
            Self::ReceivedDate => "received_date",
            Self::Body => "message_body",
        }
    }
}

impl std::fmt::Display for FieldName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An email as seen by the rule engine.
///
/// Records are supplied by the email source collaborator and are only ever
/// read during evaluation. Header-derived fields are optional: a record with
/// a missing header carries `None` rather than a placeholder string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailRecord {
    /// Provider-assigned message identifier.
    pub message_id: String,

    /// The sender address, if the `From` header was present.
    #[serde(default)]
    pub from_address: Option<String>,

    /// The recipient address, if the `To` header was present.
    #[serde(default)]
    pub to_address: Option<String>,

    /// The subject line, if present.
    #[serde(default)]
    pub subject: Option<String>,

    /// When the message was received, if the `Date` header parsed.
    #[serde(default)]
    pub received_date: Option<DateTime<Utc>>,

    /// The decoded message body, if any.
    #[serde(default)]
    pub message_body: Option<String>,

    /// Labels currently applied to the message.
    #[serde(default)]
    pub labels: Vec<String>,
}

impl EmailRecord {
    /// Create a record with the given message id and no other fields set.
    #[must_use]
    pub fn new(message_id: impl Into<String>) -> Self {
        Self {
            message_id: message_id.into(),
            from_address: None,
            to_address: None,
            subject: None,
            received_date: None,
            message_body: None,
            labels: Vec::new(),
        }
    }

    /// Set the sender address.
    #[must_use]
    pub fn with_from(mut self, from: impl Into<String>) -> Self {
        self.from_address = Some(from.into());
        self
    }

    /// Set the recipient address.
    #[must_use]
    pub fn with_to(mut self, to: impl Into<String>) -> Self {
        self.to_address = Some(to.into());
        self
    }

    /// Set the subject line.
    #[must_use]
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Set the received timestamp.
    #[must_use]
    pub fn with_received_date(mut self, received: DateTime<Utc>) -> Self {
        self.received_date = Some(received);
        self
    }

    /// Set the message body.
    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.message_body = Some(body.into());
        self
    }

    /// Set the applied labels.
    #[must_use]
    pub fn with_labels(mut self, labels: Vec<String>) -> Self {
        self.labels = labels;
        self
    }

    /// Return the value of a string field, or `None` when the field is
    /// absent on this record.
    ///
    /// [`FieldName::ReceivedDate`] is not a string field and always returns
    /// `None` here; callers read [`EmailRecord::received_date`] directly.
    pub fn string_field(&self, field: FieldName) -> Option<&str> {
        match field {
            FieldName::From => self.from_address.as_deref(),
            FieldName::To => self.to_address.as_deref(),
            FieldName::Subject => self.subject.as_deref(),
            FieldName::Body => self.message_body.as_deref(),
            FieldName::ReceivedDate => None,
        }
    }
}
