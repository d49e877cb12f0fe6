//! Collaborator error model.
//!
//! External collaborators (AI client, completion handler) are opaque remote
//! calls: the only contract is resolution or rejection with an error that may
//! carry a human-readable message. Domain-level validation in this module is
//! never expressed as an error — it surfaces as boolean gates or stored
//! strings near the relevant field.

use thiserror::Error;

/// Failure of an external collaborator call.
///
/// Callers that display these to a user should go through [`CollaboratorError::message_or`]
/// so an opaque failure still renders something actionable.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CollaboratorError {
    /// The collaborator rejected with a human-readable message.
    #[error("{0}")]
    Message(String),

    /// The collaborator rejected without any usable message.
    #[error("collaborator call failed")]
    Opaque,
}

impl CollaboratorError {
    pub fn message(msg: impl Into<String>) -> Self {
        Self::Message(msg.into())
    }

    /// The carried message, or `fallback` when the error is opaque.
    pub fn message_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        match self {
            CollaboratorError::Message(msg) => msg,
            CollaboratorError::Opaque => fallback,
        }
    }
}
