//! Directional ranges and document-bound spans.
//!
//! A [`Range`] has two positions: `anchor` and `head`. The `head` is the
//! active end, the one the caret sits on, while the `anchor` stays put when a
//! selection is extended. When `head` precedes `anchor` the range is reversed:
//!
//! ```text
//! anchor=(0,2), head=(0,7): "he[llo w]orld"  (forward)
//! anchor=(0,7), head=(0,2): "he]llo w[orld"  (backward)
//! anchor=(0,5), head=(0,5): "hello|world"    (point)
//! ```
//!
//! `start()` and `end()` return the bounds regardless of direction. Every
//! stage of the target pipeline that reshapes a range goes through
//! [`Range::with_direction`] so reversed input stays reversed.
//!
//! A [`Span`] binds a range to the document it lives in.

use crate::{
  document::DocumentId,
  position::Position,
};

/// The direction a range extends in.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
  /// Head at or after the anchor.
  Forward,
  /// Head before the anchor.
  Backward,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Range {
  pub anchor: Position,
  pub head:   Position,
}

impl Range {
  pub const fn new(anchor: Position, head: Position) -> Self {
    Self { anchor, head }
  }

  #[inline]
  pub const fn point(pos: Position) -> Self {
    Self::new(pos, pos)
  }

  /// Start of the range
  #[inline]
  #[must_use]
  pub fn start(&self) -> Position {
    std::cmp::min(self.anchor, self.head)
  }

  /// End of the range
  #[inline]
  #[must_use]
  pub fn end(&self) -> Position {
    std::cmp::max(self.anchor, self.head)
  }

  /// When the head and anchor are in the same position, we have no range.
  #[inline]
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.anchor == self.head
  }

  #[inline]
  #[must_use]
  pub fn is_reversed(&self) -> bool {
    self.head < self.anchor
  }

  #[inline]
  #[must_use]
  pub fn direction(&self) -> Direction {
    if self.is_reversed() {
      Direction::Backward
    } else {
      Direction::Forward
    }
  }

  /// Flips the direction of the range.
  #[inline]
  #[must_use]
  pub fn flip(&self) -> Self {
    Self::new(self.head, self.anchor)
  }

  /// Returns the range if it already goes the way of `direction`, else flips
  /// it. Empty ranges are always forward.
  #[inline]
  #[must_use]
  pub fn with_direction(self, direction: Direction) -> Self {
    if self.direction() == direction || self.is_empty() {
      self
    } else {
      self.flip()
    }
  }

  /// Smallest range covering both, in the direction of `self`.
  #[must_use]
  pub fn union(&self, other: &Self) -> Self {
    Self::new(
      self.start().min(other.start()),
      self.end().max(other.end()),
    )
    .with_direction(self.direction())
  }
}

impl From<(Position, Position)> for Range {
  fn from((anchor, head): (Position, Position)) -> Self {
    Self::new(anchor, head)
  }
}

/// A range inside one particular document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
  pub doc:   DocumentId,
  pub range: Range,
}

impl Span {
  pub const fn new(doc: DocumentId, range: Range) -> Self {
    Self { doc, range }
  }

  /// Same document, different range.
  #[inline]
  #[must_use]
  pub fn with_range(self, range: Range) -> Self {
    Self { range, ..self }
  }

  #[inline]
  pub fn start(&self) -> Position {
    self.range.start()
  }

  #[inline]
  pub fn end(&self) -> Position {
    self.range.end()
  }
}
