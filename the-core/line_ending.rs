//! Line endings and per-line metadata over ropes.
//!
//! Every helper here works on char indices and never includes the line ending
//! itself in the returned line contents, so a line's "end" is the column just
//! before its terminator.

use ropey::RopeSlice;

use crate::chars::char_is_whitespace;

#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum LineEnding {
  /// CarriageReturn followed by LineFeed.
  Crlf,

  /// U+000A -- LineFeed
  LF,

  #[cfg(feature = "unicode-lines")]
  /// U+000B -- VerticalTab
  VT,

  #[cfg(feature = "unicode-lines")]
  /// U+000C -- FormFeed
  FF,

  #[cfg(feature = "unicode-lines")]
  /// U+000D -- CarriageReturn
  CR,

  #[cfg(feature = "unicode-lines")]
  /// U+0085 -- NextLine
  Nel,

  /// U+2028 -- Line Separator
  #[cfg(feature = "unicode-lines")]
  LS,

  /// U+2029 -- ParagraphSeparator
  #[cfg(feature = "unicode-lines")]
  PS,
}

impl LineEnding {
  #[inline]
  pub const fn len_chars(&self) -> usize {
    match self {
      Self::Crlf => 2,
      _ => 1,
    }
  }

  #[inline]
  pub const fn from_char(ch: char) -> Option<LineEnding> {
    match ch {
      '\u{000A}' => Some(LineEnding::LF),
      #[cfg(feature = "unicode-lines")]
      '\u{000B}' => Some(LineEnding::VT),
      #[cfg(feature = "unicode-lines")]
      '\u{000C}' => Some(LineEnding::FF),
      #[cfg(feature = "unicode-lines")]
      '\u{000D}' => Some(LineEnding::CR),
      #[cfg(feature = "unicode-lines")]
      '\u{0085}' => Some(LineEnding::Nel),
      #[cfg(feature = "unicode-lines")]
      '\u{2028}' => Some(LineEnding::LS),
      #[cfg(feature = "unicode-lines")]
      '\u{2029}' => Some(LineEnding::PS),
      _ => None,
    }
  }
}

/// Returns the line ending terminating `line`, if any.
///
/// Ropey keeps CRLF pairs contiguous, so looking at the last two chars is
/// enough to tell CRLF apart from a lone CR or LF.
pub fn get_line_ending(line: &RopeSlice) -> Option<LineEnding> {
  let len = line.len_chars();
  let last = line.get_char(len.checked_sub(1)?)?;
  let before_last = len.checked_sub(2).and_then(|idx| line.get_char(idx));

  if last == '\u{000A}' && before_last == Some('\u{000D}') {
    return Some(LineEnding::Crlf);
  }
  LineEnding::from_char(last)
}

/// Returns the char index of the end of the given line, not including its line
/// ending.
pub fn line_end_char_index(slice: &RopeSlice, line: usize) -> usize {
  slice.line_to_char(line + 1)
    - get_line_ending(&slice.line(line))
      .map(|le| le.len_chars())
      .unwrap_or(0)
}

/// Get line `line_idx` from the passed rope slice, sans any line ending.
pub fn line_without_line_ending<'a>(slice: &RopeSlice<'a>, line_idx: usize) -> RopeSlice<'a> {
  let start = slice.line_to_char(line_idx);
  let end = line_end_char_index(slice, line_idx);
  slice.slice(start..end)
}

/// Number of chars on `line`, excluding the line ending.
#[inline]
pub fn line_len_chars(slice: &RopeSlice, line: usize) -> usize {
  line_end_char_index(slice, line) - slice.line_to_char(line)
}

/// Column of the first non-whitespace char on `line`.
///
/// Blank lines report their full length, so the column always lands inside
/// the line.
pub fn first_non_whitespace_col(slice: &RopeSlice, line: usize) -> usize {
  let contents = line_without_line_ending(slice, line);
  contents
    .chars()
    .position(|ch| !char_is_whitespace(ch))
    .unwrap_or_else(|| contents.len_chars())
}

/// Whether `line` is empty or holds whitespace only.
pub fn line_is_blank(slice: &RopeSlice, line: usize) -> bool {
  line_without_line_ending(slice, line)
    .chars()
    .all(char_is_whitespace)
}
