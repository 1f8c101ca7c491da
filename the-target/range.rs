//! Combining the two ends of a range target.

use tracing::trace;

use crate::{
  context::{
    SelectionContext,
    TypedSpan,
  },
  error::{
    Result,
    TargetError,
  },
  selection::Range,
  target::TargetPosition,
};

/// Joins a resolved start and end into one span.
///
/// The result runs from the start target to the end target. When the end
/// target comes first in the document, the result is reversed and the
/// delimiters are taken from whichever side is textually first and last.
/// List membership, selection type and inside/outside type come from the
/// start target.
pub fn combine(start: &TypedSpan, end: &TypedSpan) -> Result<TypedSpan> {
  if start.span.doc != end.span.doc {
    return Err(TargetError::CrossDocumentRange);
  }

  let (start_range, end_range) = (start.range(), end.range());
  let (start_outer, end_outer) = (start.outer_or_range(), end.outer_or_range());
  let forward = start_range.start() <= end_range.start();

  let (range, outer, leading, trailing) = if forward {
    (
      Range::new(start_range.start(), end_range.end()),
      Range::new(start_outer.start(), end_outer.end()),
      start.context.leading_delimiter,
      end.context.trailing_delimiter,
    )
  } else {
    (
      Range::new(start_range.end(), end_range.start()),
      Range::new(end_outer.start(), start_outer.end()),
      end.context.leading_delimiter,
      start.context.trailing_delimiter,
    )
  };
  trace!(forward, ?range, "combined range");

  Ok(TypedSpan {
    span:           start.span.with_range(range),
    selection_type: start.selection_type,
    context:        SelectionContext {
      is_in_delimited_list:      start.context.is_in_delimited_list,
      containing_list_delimiter: start.context.containing_list_delimiter.clone(),
      leading_delimiter:         leading,
      trailing_delimiter:        trailing,
      outer:                     Some(outer),
    },
    inside_outside: start.inside_outside,
    position:       TargetPosition::Contents,
  })
}

/// Pairs starts with ends one to one and combines each pair.
pub fn combine_all(starts: &[TypedSpan], ends: &[TypedSpan]) -> Result<Vec<TypedSpan>> {
  if starts.len() != ends.len() {
    return Err(TargetError::LengthMismatch {
      start: starts.len(),
      end:   ends.len(),
    });
  }

  starts
    .iter()
    .zip(ends)
    .map(|(start, end)| combine(start, end))
    .collect()
}
