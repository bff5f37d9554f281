pub mod action;
pub mod label;
pub mod record;

pub use action::MailAction;
pub use label::{LabelTarget, SystemLabel};
pub use record::{EmailRecord, FieldName};
