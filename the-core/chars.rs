//! Character classes used when splitting text into subwords and when guessing
//! the delimiters between list items.

use unicode_general_category::{
  GeneralCategory,
  get_general_category,
};

/// How a char takes part in subword splitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubwordClass {
  /// Uppercase and titlecase letters. They start a new piece.
  Upper,
  /// Lowercase letters, and letters of scripts without case.
  Lower,
  Digit,
  /// Anything that never belongs to a piece.
  Separator,
}

impl SubwordClass {
  #[inline]
  pub fn is_upper(self) -> bool {
    self == Self::Upper
  }

  #[inline]
  pub fn is_lower(self) -> bool {
    self == Self::Lower
  }

  #[inline]
  pub fn is_digit(self) -> bool {
    self == Self::Digit
  }
}

pub fn subword_class(ch: char) -> SubwordClass {
  if ch.is_ascii_digit() {
    return SubwordClass::Digit;
  }

  match get_general_category(ch) {
    GeneralCategory::UppercaseLetter | GeneralCategory::TitlecaseLetter => SubwordClass::Upper,
    GeneralCategory::LowercaseLetter
    | GeneralCategory::ModifierLetter
    | GeneralCategory::OtherLetter => SubwordClass::Lower,
    _ => SubwordClass::Separator,
  }
}

/// Horizontal whitespace. Line endings are excluded: callers always look at
/// single lines.
#[inline]
pub fn char_is_whitespace(ch: char) -> bool {
  match ch {
    '\t' | ' ' | '\u{00A0}' | '\u{202F}' | '\u{205F}' | '\u{3000}' | '\u{FEFF}' => true,
    ch => ('\u{2000}'..='\u{200B}').contains(&ch),
  }
}

/// Chars that may sit between two items of a plain-text list, e.g. the `, `
/// in `foo, bar`. Brackets and quotes never separate items.
#[inline]
pub fn char_is_list_separator(ch: char) -> bool {
  char_is_whitespace(ch) || matches!(ch, ',' | ';' | '|')
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn subword_classes() {
    assert_eq!(subword_class('B'), SubwordClass::Upper);
    assert_eq!(subword_class('ǅ'), SubwordClass::Upper);
    assert_eq!(subword_class('a'), SubwordClass::Lower);
    assert_eq!(subword_class('é'), SubwordClass::Lower);
    assert_eq!(subword_class('漢'), SubwordClass::Lower);
    assert_eq!(subword_class('7'), SubwordClass::Digit);
    assert_eq!(subword_class('_'), SubwordClass::Separator);
    assert_eq!(subword_class('-'), SubwordClass::Separator);
    assert_eq!(subword_class(' '), SubwordClass::Separator);
  }

  #[test]
  fn line_endings_are_not_whitespace() {
    assert!(!char_is_whitespace('\n'));
    assert!(!char_is_whitespace('\r'));
    assert!(char_is_whitespace('\u{3000}'));
    assert!(char_is_whitespace('\u{2009}'));
  }

  #[test]
  fn list_separators() {
    assert!(char_is_list_separator(','));
    assert!(char_is_list_separator(' '));
    assert!(char_is_list_separator('\t'));
    assert!(!char_is_list_separator('('));
    assert!(!char_is_list_separator('"'));
    assert!(!char_is_list_separator('\n'));
  }
}
