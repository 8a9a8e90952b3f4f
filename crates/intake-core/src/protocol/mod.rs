//! Wire format of the webhook request body.

pub mod payload;

pub use payload::{SubmissionPayload, SOURCE_TAG};
