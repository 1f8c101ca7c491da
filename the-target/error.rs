use thiserror::Error;

use crate::{
  document::DocumentId,
  position::Position,
  target::ScopeType,
};

pub type Result<T> = std::result::Result<T, TargetError>;

/// Why a target could not be resolved. Any of these aborts the whole
/// resolution call; no partial results are returned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TargetError {
  #[error("couldn't find mark {color} '{character}'")]
  MarkNotFound { color: String, character: char },
  #[error("couldn't find containing {scope}")]
  ContainingScopeNotFound { scope: ScopeType },
  #[error("piece index {index} out of range for {len} pieces")]
  IndexOutOfRange { index: isize, len: usize },
  #[error("range endpoints resolved to {start} and {end} spans")]
  LengthMismatch { start: usize, end: usize },
  #[error("range endpoints must be in the same document")]
  CrossDocumentRange,
  #[error("{feature} is not implemented")]
  NotImplemented { feature: &'static str },
  #[error("document {doc} is not open")]
  UnknownDocument { doc: DocumentId },
  /// A mark pointed past the end of its document, usually because it was
  /// recorded before an edit.
  #[error("{}:{} is outside document {doc}", position.row, position.col)]
  OutOfBounds { doc: DocumentId, position: Position },
  #[error("no {scope} matcher registered for language '{language_id}'")]
  NoScopeMatcher {
    language_id: String,
    scope:       ScopeType,
  },
}

impl TargetError {
  pub(crate) const fn not_implemented(feature: &'static str) -> Self {
    Self::NotImplemented { feature }
  }

  /// Errors the user can act on, as opposed to asking for an unsupported
  /// feature.
  pub fn is_user_actionable(&self) -> bool {
    !matches!(self, Self::NotImplemented { .. })
  }
}
