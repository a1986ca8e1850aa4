//! State and errors shared by the create and edit forms.

use crate::client::ClientError;

/// Lifecycle of a form.
///
/// `Editing → Submitting → Closed` on success; a failed submit returns to
/// `Editing` so the user can retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Editing,
    Submitting,
    Closed,
}

/// Errors from submitting a form.
#[derive(Debug, thiserror::Error)]
pub enum FormError {
    /// A client-side check failed; no request was sent. The message is the
    /// one shown to the user.
    #[error("{0}")]
    Invalid(&'static str),

    /// The form is submitting or already closed.
    #[error("Form is not open for editing")]
    NotEditing,

    /// The request was sent and failed.
    #[error(transparent)]
    Client(#[from] ClientError),
}
