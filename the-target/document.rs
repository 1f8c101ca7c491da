//! Read-only document snapshots and the line metadata the pipeline consults.
//!
//! # Example
//!
//! ```
//! use std::num::NonZeroUsize;
//!
//! use ropey::Rope;
//! use the_target::{
//!   document::{
//!     Document,
//!     DocumentId,
//!   },
//!   position::Position,
//! };
//!
//! let id = DocumentId::new(NonZeroUsize::new(1).unwrap());
//! let doc = Document::new(id, "plaintext", Rope::from("  hello\nworld"));
//!
//! assert_eq!(doc.line_count(), 2);
//! assert_eq!(doc.first_non_whitespace(0), 2);
//! assert_eq!(doc.line_end(0), Position::new(0, 7));
//! ```

use std::{
  borrow::Cow,
  collections::HashMap,
  fmt,
  num::NonZeroUsize,
};

use ropey::{
  Rope,
  RopeSlice,
};
use the_core::line_ending::{
  first_non_whitespace_col,
  line_is_blank,
  line_len_chars,
  line_without_line_ending,
};

use crate::{
  position::{
    Position,
    char_idx_at_coords,
    coords_at_pos,
  },
  selection::Range,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocumentId(NonZeroUsize);

impl DocumentId {
  pub const fn new(id: NonZeroUsize) -> Self {
    Self(id)
  }

  pub const fn get(self) -> NonZeroUsize {
    self.0
  }
}

impl From<NonZeroUsize> for DocumentId {
  fn from(value: NonZeroUsize) -> Self {
    Self::new(value)
  }
}

impl fmt::Display for DocumentId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "#{}", self.0)
  }
}

#[derive(Debug, Clone)]
pub struct Document {
  id:          DocumentId,
  language_id: String,
  text:        Rope,
}

impl Document {
  pub fn new(id: DocumentId, language_id: impl Into<String>, text: Rope) -> Self {
    Self {
      id,
      language_id: language_id.into(),
      text,
    }
  }

  pub fn id(&self) -> DocumentId {
    self.id
  }

  /// Language id used to pick scope matchers, e.g. `"rust"`.
  pub fn language_id(&self) -> &str {
    &self.language_id
  }

  pub fn text(&self) -> &Rope {
    &self.text
  }

  #[inline]
  fn slice(&self) -> RopeSlice<'_> {
    self.text.slice(..)
  }

  /// Number of lines, counting the empty line after a trailing line ending.
  pub fn line_count(&self) -> usize {
    self.text.len_lines()
  }

  /// Length of `line` in chars, without its line ending.
  pub fn line_len(&self, line: usize) -> usize {
    line_len_chars(&self.slice(), line)
  }

  pub fn line_text(&self, line: usize) -> Cow<'_, str> {
    let slice = self.slice();
    line_without_line_ending(&slice, line).into()
  }

  pub fn first_non_whitespace(&self, line: usize) -> usize {
    first_non_whitespace_col(&self.slice(), line)
  }

  pub fn is_blank_line(&self, line: usize) -> bool {
    line_is_blank(&self.slice(), line)
  }

  /// Position just before the line ending of `line`.
  pub fn line_end(&self, line: usize) -> Position {
    Position::new(line, self.line_len(line))
  }

  /// Whether `pos` names a row of the document and a column no further than
  /// that row's end.
  pub fn contains(&self, pos: Position) -> bool {
    pos.row < self.line_count() && pos.col <= self.line_len(pos.row)
  }

  /// End of the last line.
  pub fn end(&self) -> Position {
    self.line_end(self.line_count().saturating_sub(1))
  }

  pub fn char_idx(&self, pos: Position) -> usize {
    char_idx_at_coords(self.slice(), pos)
  }

  pub fn position_at(&self, char_idx: usize) -> Position {
    coords_at_pos(self.slice(), char_idx)
  }

  pub fn byte_idx(&self, pos: Position) -> usize {
    self.text.char_to_byte(self.char_idx(pos))
  }

  pub fn position_at_byte(&self, byte_idx: usize) -> Position {
    let byte_idx = byte_idx.min(self.text.len_bytes());
    self.position_at(self.text.byte_to_char(byte_idx))
  }

  /// Text covered by `range`, regardless of its direction.
  pub fn text_of(&self, range: &Range) -> Cow<'_, str> {
    let from = self.char_idx(range.start());
    let to = self.char_idx(range.end());
    self.text.slice(from..to).into()
  }
}

/// The open documents a resolution may reach into.
#[derive(Debug, Clone, Default)]
pub struct Documents {
  docs: HashMap<DocumentId, Document>,
}

impl Documents {
  pub fn new() -> Self {
    Self::default()
  }

  /// Adds `doc`, returning the snapshot it replaces.
  pub fn insert(&mut self, doc: Document) -> Option<Document> {
    self.docs.insert(doc.id(), doc)
  }

  pub fn remove(&mut self, id: DocumentId) -> Option<Document> {
    self.docs.remove(&id)
  }

  pub fn get(&self, id: DocumentId) -> Option<&Document> {
    self.docs.get(&id)
  }

  pub fn len(&self) -> usize {
    self.docs.len()
  }

  pub fn is_empty(&self) -> bool {
    self.docs.is_empty()
  }

  pub fn iter(&self) -> impl Iterator<Item = &Document> {
    self.docs.values()
  }
}

impl FromIterator<Document> for Documents {
  fn from_iter<I: IntoIterator<Item = Document>>(iter: I) -> Self {
    Self {
      docs: iter.into_iter().map(|doc| (doc.id(), doc)).collect(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn doc(text: &str) -> Document {
    let id = DocumentId::new(NonZeroUsize::new(1).unwrap());
    Document::new(id, "plaintext", Rope::from(text))
  }

  #[test]
  fn line_metadata() {
    let doc = doc("  foo bar\n\n\tbaz\n");

    assert_eq!(doc.line_count(), 4);
    assert_eq!(doc.line_text(0), "  foo bar");
    assert_eq!(doc.line_len(0), 9);
    assert_eq!(doc.first_non_whitespace(0), 2);
    assert_eq!(doc.first_non_whitespace(2), 1);
    assert!(doc.is_blank_line(1));
    assert!(doc.is_blank_line(3));
    assert!(!doc.is_blank_line(2));
    assert_eq!(doc.line_end(2), Position::new(2, 4));
    assert_eq!(doc.end(), Position::new(3, 0));
  }

  #[test]
  fn contains_positions() {
    let doc = doc("foo\nbarbaz\n");

    assert!(doc.contains(Position::new(0, 3)));
    assert!(doc.contains(Position::new(1, 6)));
    assert!(doc.contains(Position::new(2, 0)));
    assert!(!doc.contains(Position::new(0, 4)));
    assert!(!doc.contains(Position::new(2, 1)));
    assert!(!doc.contains(Position::new(3, 0)));
  }

  #[test]
  fn text_of_ignores_direction() {
    let doc = doc("foo, bar, baz");
    let range = Range::new(Position::new(0, 8), Position::new(0, 5));

    assert_eq!(doc.text_of(&range), "bar");
    assert_eq!(doc.text_of(&range.flip()), "bar");
  }

  #[test]
  fn byte_positions_account_for_multibyte_chars() {
    let doc = doc("é = 1\nü");

    assert_eq!(doc.byte_idx(Position::new(0, 1)), 2);
    assert_eq!(doc.position_at_byte(2), Position::new(0, 1));
    assert_eq!(doc.byte_idx(Position::new(1, 1)), 9);
    assert_eq!(doc.position_at_byte(usize::MAX), Position::new(1, 1));
  }

  #[test]
  fn documents_by_id() {
    let mut docs = Documents::new();
    let first = doc("one");
    let id = first.id();

    assert!(docs.insert(first).is_none());
    assert_eq!(docs.len(), 1);
    assert_eq!(docs.get(id).map(|doc| doc.line_text(0).into_owned()), Some("one".into()));
    assert!(docs.insert(doc("two")).is_some());
    assert!(docs.remove(id).is_some());
    assert!(docs.is_empty());
  }
}
