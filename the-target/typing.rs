//! Snapping modified spans to a selection granularity.
//!
//! Each selection type reshapes the span and, unless the modifier already
//! knew its delimiters, works out what separates the span from its
//! neighbours:
//!
//! - `token` keeps the span and looks at the same-line text around it,
//! - `line` covers whole lines, minus the indentation of the first one,
//! - `paragraph` grows a line selection out to the nearest blank lines,
//! - `document` covers everything.
//!
//! Expansions keep the direction of the span they were given.

use the_core::chars::char_is_list_separator;
use tracing::trace;

use crate::{
  context::{
    SelectionContext,
    TypedSpan,
  },
  document::Document,
  error::{
    Result,
    TargetError,
  },
  modifier::Transformed,
  position::Position,
  selection::Range,
  target::SelectionType,
};

const LINE_DELIMITER: &str = "\n";

pub fn apply_selection_type(
  selection_type: SelectionType,
  document: &Document,
  transformed: Transformed,
) -> Result<TypedSpan> {
  let Transformed { span, context } = transformed;
  let direction = span.range.direction();

  let (range, context) = match selection_type {
    SelectionType::Token => {
      let context = if context.is_empty() {
        infer_delimiters(document, span.range)
      } else {
        context
      };
      (span.range, context)
    },
    SelectionType::Line => {
      let range = line_range(document, span.range.start().row, span.range.end().row);
      (range, line_context(document, range, context))
    },
    SelectionType::Paragraph => {
      let (first, last) = paragraph_rows(document, span.range);
      let range = line_range(document, first, last);
      (range, paragraph_context(document, range, context))
    },
    SelectionType::Document => {
      let range = Range::new(Position::zero(), document.end());
      (range, context)
    },
    SelectionType::Character => {
      return Err(TargetError::not_implemented("character selection type"));
    },
  };

  let range = range.with_direction(direction);
  trace!(?selection_type, ?range, "typed span");
  Ok(TypedSpan::new(span.with_range(range), selection_type, context))
}

/// From the first non-whitespace column of `first` to the end of `last`.
fn line_range(document: &Document, first: usize, last: usize) -> Range {
  Range::new(
    Position::new(first, document.first_non_whitespace(first)),
    document.line_end(last),
  )
}

/// Rows of the paragraph around `range`: outward until a blank line or the
/// edge of the document.
fn paragraph_rows(document: &Document, range: Range) -> (usize, usize) {
  let mut first = range.start().row;
  while first > 0 && !document.is_blank_line(first - 1) {
    first -= 1;
  }

  let mut last = range.end().row;
  while last + 1 < document.line_count() && !document.is_blank_line(last + 1) {
    last += 1;
  }

  (first, last)
}

/// The untrimmed lines `range` touches.
fn full_lines(document: &Document, range: Range) -> Range {
  Range::new(
    Position::new(range.start().row, 0),
    document.line_end(range.end().row),
  )
}

fn newline_context(
  leading: Option<Range>,
  trailing: Option<Range>,
  outer: Range,
) -> SelectionContext {
  let is_in_delimited_list = leading.is_some() || trailing.is_some();
  SelectionContext {
    is_in_delimited_list,
    containing_list_delimiter: is_in_delimited_list.then(|| LINE_DELIMITER.to_owned()),
    leading_delimiter: leading,
    trailing_delimiter: trailing,
    outer: Some(outer),
  }
}

fn line_context(document: &Document, range: Range, context: SelectionContext) -> SelectionContext {
  if context.is_in_delimited_list {
    return context;
  }
  let (start, end) = (range.start(), range.end());

  let leading = (start.row > 0).then(|| Range::new(document.line_end(start.row - 1), start));
  let trailing = (end.row + 1 < document.line_count())
    .then(|| Range::new(end, Position::new(end.row + 1, 0)));

  newline_context(leading, trailing, full_lines(document, range))
}

/// Like lines, but the delimiters reach over one blank separator line on
/// each side when there is one.
fn paragraph_context(
  document: &Document,
  range: Range,
  context: SelectionContext,
) -> SelectionContext {
  if context.is_in_delimited_list {
    return context;
  }
  let (start, end) = (range.start(), range.end());
  let line_count = document.line_count();

  let leading_row = match start.row {
    0 => None,
    1 => Some(0),
    row => Some(row - 2),
  };
  let trailing_row = if end.row + 2 < line_count {
    Some(end.row + 2)
  } else if end.row + 1 < line_count {
    Some(end.row + 1)
  } else {
    None
  };

  let leading = leading_row.map(|row| Range::new(document.line_end(row), start));
  let trailing = trailing_row.map(|row| Range::new(end, Position::new(row, 0)));

  newline_context(leading, trailing, full_lines(document, range))
}

/// Guesses the delimiters around a token from its line.
///
/// On each side, the separator run touching the token (whitespace, commas,
/// semicolons, pipes) is a delimiter when more text lies beyond it. The
/// containing delimiter is the trailing run's text, else the leading one's.
/// With no delimiter on either side the context stays empty.
pub fn infer_delimiters(document: &Document, range: Range) -> SelectionContext {
  let (start, end) = (range.start(), range.end());

  let before: Vec<char> = document
    .line_text(start.row)
    .chars()
    .take(start.col)
    .collect();
  let leading = separator_run(before.iter().rev().copied())
    .map(|len| Range::new(Position::new(start.row, start.col - len), start));

  let after: Vec<char> = document.line_text(end.row).chars().skip(end.col).collect();
  let trailing = separator_run(after.iter().copied())
    .map(|len| Range::new(end, Position::new(end.row, end.col + len)));

  match trailing.or(leading) {
    Some(found) => {
      SelectionContext::delimited(document.text_of(&found).into_owned(), leading, trailing)
    },
    None => SelectionContext::default(),
  }
}

/// Length of the separator run at the front of `chars`, provided something
/// other than separators follows it.
fn separator_run(chars: impl Iterator<Item = char>) -> Option<usize> {
  let mut len = 0;
  for ch in chars {
    if char_is_list_separator(ch) {
      len += 1;
    } else {
      return (len > 0).then_some(len);
    }
  }
  None
}
