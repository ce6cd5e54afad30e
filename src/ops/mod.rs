pub mod category_ops;
pub mod todo_ops;

use std::fmt;

/// Why a transition was refused without changing anything
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("title is empty")]
    EmptyTitle,
    #[error("no category selected")]
    NoCategorySelected,
    #[error("no todo is being edited")]
    NotEditing,
    #[error("a todo is being edited")]
    EditInProgress,
    #[error("category dialog is not open")]
    ModalClosed,
}

/// Result of a state transition. Anything other than `Applied` leaves the
/// state untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    /// The targeted category or todo does not exist
    NotFound,
    Rejected(Rejection),
}

impl Outcome {
    pub fn is_applied(self) -> bool {
        self == Outcome::Applied
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Applied => write!(f, "applied"),
            Outcome::NotFound => write!(f, "not found"),
            Outcome::Rejected(reason) => write!(f, "rejected: {}", reason),
        }
    }
}

impl From<Rejection> for Outcome {
    fn from(reason: Rejection) -> Self {
        Outcome::Rejected(reason)
    }
}

/// Titles made only of whitespace are refused
pub(crate) fn is_blank(title: &str) -> bool {
    title.trim().is_empty()
}
