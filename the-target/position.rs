use ropey::RopeSlice;
use the_core::line_ending::line_len_chars;

/// This is a single point in a text buffer.
/// 0-indexed as all things should be; `col` counts chars within the line.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
  pub row: usize,
  pub col: usize,
}

impl Position {
  pub const fn new(row: usize, col: usize) -> Self {
    Self { row, col }
  }

  pub const fn zero() -> Self {
    Self { row: 0, col: 0 }
  }
}

impl From<(usize, usize)> for Position {
  fn from(value: (usize, usize)) -> Self {
    Position::new(value.0, value.1)
  }
}

/// Converts a character index into a `Position`.
pub fn coords_at_pos(text: RopeSlice, pos: usize) -> Position {
  let pos = pos.min(text.len_chars());
  let line = text.char_to_line(pos);
  let line_start = text.line_to_char(line);

  Position::new(line, pos - line_start)
}

/// Convert a `(row, column)` to a character index.
///
/// If `row` exceeds the number of lines, the last line is used.
/// If `col` exceeds the length of the line, the line end (before any line
/// ending) is used.
pub fn char_idx_at_coords(text: RopeSlice, coords: Position) -> usize {
  let line = coords.row.min(text.len_lines().saturating_sub(1));
  let line_start = text.line_to_char(line);

  line_start + coords.col.min(line_len_chars(&text, line))
}

#[cfg(test)]
mod tests {
  use ropey::Rope;

  use super::*;

  #[test]
  fn ordering_is_row_major() {
    assert!(Position::new(0, 9) < Position::new(1, 0));
    assert!(Position::new(2, 1) < Position::new(2, 3));
    assert_eq!(Position::new(3, 3), Position::from((3, 3)));
  }

  #[test]
  fn coords_roundtrip_through_lines() {
    let text = Rope::from("ab\ncde\n\nf");
    let slice = text.slice(..);

    assert_eq!(coords_at_pos(slice, 0), Position::new(0, 0));
    assert_eq!(coords_at_pos(slice, 2), Position::new(0, 2));
    assert_eq!(coords_at_pos(slice, 3), Position::new(1, 0));
    assert_eq!(coords_at_pos(slice, 7), Position::new(2, 0));
    assert_eq!(coords_at_pos(slice, 8), Position::new(3, 0));
    assert_eq!(coords_at_pos(slice, 100), Position::new(3, 1));

    assert_eq!(char_idx_at_coords(slice, Position::new(1, 2)), 5);
    assert_eq!(char_idx_at_coords(slice, Position::new(3, 1)), 9);
  }

  #[test]
  fn char_idx_clamps_out_of_range() {
    let text = Rope::from("ab\ncde");
    let slice = text.slice(..);

    assert_eq!(char_idx_at_coords(slice, Position::new(0, 10)), 2);
    assert_eq!(char_idx_at_coords(slice, Position::new(9, 0)), 3);
    assert_eq!(char_idx_at_coords(slice, Position::new(9, 9)), 6);
  }

  #[test]
  fn columns_count_chars() {
    let text = Rope::from("héllo\nwörld");
    let slice = text.slice(..);

    assert_eq!(coords_at_pos(slice, 8), Position::new(1, 2));
    assert_eq!(char_idx_at_coords(slice, Position::new(1, 2)), 8);
  }
}
