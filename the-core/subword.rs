//! Subword decomposition.
//!
//! Identifiers are split into the pieces a person would name out loud:
//! `fooBarBaz` is `foo`, `Bar`, `Baz`; `HTTPServer2` is `HTTP`, `Server`, `2`;
//! `snake_case_name` is `snake`, `case`, `name`. A piece is one of
//!
//! - an optional capital followed by lowercase letters (`Bar`, `foo`),
//! - a run of capitals not followed by a lowercase letter (`HTTP` in
//!   `HTTPServer`, where the `S` starts the next piece),
//! - a run of digits.
//!
//! Anything else separates pieces and never belongs to one. Letters of
//! caseless scripts count as lowercase. Offsets are char indices into the
//! input.

use std::ops::Range;

use crate::chars::{
  SubwordClass,
  subword_class,
};

fn run_end(classes: &[SubwordClass], start: usize, pred: fn(SubwordClass) -> bool) -> usize {
  classes[start..]
    .iter()
    .position(|&class| !pred(class))
    .map_or(classes.len(), |offset| start + offset)
}

/// Splits `text` into subword pieces, in order, as half-open char ranges.
pub fn subword_pieces(text: &str) -> Vec<Range<usize>> {
  let classes: Vec<SubwordClass> = text.chars().map(subword_class).collect();
  let mut pieces = Vec::new();
  let mut idx = 0;

  while idx < classes.len() {
    let class = classes[idx];
    let next = classes.get(idx + 1).copied();

    let end = match class {
      SubwordClass::Upper if next.is_some_and(SubwordClass::is_lower) => {
        run_end(&classes, idx + 1, SubwordClass::is_lower)
      },
      SubwordClass::Upper => {
        let end = run_end(&classes, idx, SubwordClass::is_upper);
        // The last capital of a run belongs to the following word.
        if classes.get(end).copied().is_some_and(SubwordClass::is_lower) && end - 1 > idx {
          end - 1
        } else {
          end
        }
      },
      SubwordClass::Lower => run_end(&classes, idx, SubwordClass::is_lower),
      SubwordClass::Digit => run_end(&classes, idx, SubwordClass::is_digit),
      SubwordClass::Separator => {
        idx += 1;
        continue;
      },
    };

    pieces.push(idx..end);
    idx = end;
  }

  pieces
}

/// One piece per char of `text`.
pub fn char_pieces(text: &str) -> Vec<Range<usize>> {
  (0..text.chars().count()).map(|idx| idx..idx + 1).collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  fn words(text: &str) -> Vec<String> {
    subword_pieces(text)
      .into_iter()
      .map(|piece| text.chars().skip(piece.start).take(piece.len()).collect())
      .collect()
  }

  #[test]
  fn camel_case() {
    assert_eq!(words("fooBarBaz"), ["foo", "Bar", "Baz"]);
    assert_eq!(words("FooBar"), ["Foo", "Bar"]);
  }

  #[test]
  fn snake_and_kebab_case() {
    assert_eq!(words("snake_case_name"), ["snake", "case", "name"]);
    assert_eq!(words("kebab-case"), ["kebab", "case"]);
    assert_eq!(words("__dunder__"), ["dunder"]);
  }

  #[test]
  fn acronyms() {
    assert_eq!(words("HTTPServer"), ["HTTP", "Server"]);
    assert_eq!(words("parseHTML"), ["parse", "HTML"]);
    assert_eq!(words("ABC"), ["ABC"]);
  }

  #[test]
  fn digits() {
    assert_eq!(words("utf8Decoder"), ["utf", "8", "Decoder"]);
    assert_eq!(words("v2"), ["v", "2"]);
  }

  #[test]
  fn offsets_are_char_indices() {
    assert_eq!(subword_pieces("éclairBar"), vec![0..6, 6..9]);
    assert_eq!(subword_pieces("a_b"), vec![0..1, 2..3]);
    assert!(subword_pieces("--").is_empty());
  }

  #[test]
  fn chars() {
    assert_eq!(char_pieces("ab"), vec![0..1, 1..2]);
    assert_eq!(char_pieces("日本"), vec![0..1, 1..2]);
    assert!(char_pieces("").is_empty());
  }

  quickcheck::quickcheck! {
      fn pieces_are_ordered_and_disjoint(text: String) -> bool {
          let len = text.chars().count();
          let pieces = subword_pieces(&text);
          pieces.iter().all(|piece| piece.start < piece.end && piece.end <= len)
            && pieces.windows(2).all(|pair| pair[0].end <= pair[1].start)
      }
  }
}
