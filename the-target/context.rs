//! Delimiter and list metadata carried next to every resolved span.

use crate::{
  selection::{
    Range,
    Span,
  },
  target::{
    InsideOutsideType,
    SelectionType,
    TargetPosition,
  },
};

/// What surrounds a span, for actions that delete or insert around it.
///
/// Delimiter ranges and `outer` always live in the same document as the span
/// they describe.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionContext {
  pub is_in_delimited_list:      bool,
  /// Literal separator text, such as `", "` or `"\n"`.
  pub containing_list_delimiter: Option<String>,
  pub leading_delimiter:         Option<Range>,
  pub trailing_delimiter:        Option<Range>,
  /// The span widened over its delimiters.
  pub outer:                     Option<Range>,
}

impl SelectionContext {
  /// True when no delimiter information is known, so a selection typer may
  /// infer its own.
  pub fn is_empty(&self) -> bool {
    !self.is_in_delimited_list
      && self.containing_list_delimiter.is_none()
      && self.leading_delimiter.is_none()
      && self.trailing_delimiter.is_none()
  }

  /// A list context from whichever delimiter ranges were found. The literal
  /// is taken from the trailing side when both are present.
  pub fn delimited(
    delimiter: impl Into<String>,
    leading: Option<Range>,
    trailing: Option<Range>,
  ) -> Self {
    Self {
      is_in_delimited_list: true,
      containing_list_delimiter: Some(delimiter.into()),
      leading_delimiter: leading,
      trailing_delimiter: trailing,
      outer: None,
    }
  }

  pub fn with_outer(mut self, outer: Range) -> Self {
    self.outer = Some(outer);
    self
  }
}

/// The value threaded between pipeline stages and handed back to callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypedSpan {
  pub span:           Span,
  pub selection_type: SelectionType,
  pub context:        SelectionContext,
  pub inside_outside: Option<InsideOutsideType>,
  pub position:       TargetPosition,
}

impl TypedSpan {
  pub fn new(span: Span, selection_type: SelectionType, context: SelectionContext) -> Self {
    Self {
      span,
      selection_type,
      context,
      inside_outside: None,
      position: TargetPosition::Contents,
    }
  }

  #[inline]
  pub fn range(&self) -> Range {
    self.span.range
  }

  /// The outer selection, falling back to the span itself.
  pub fn outer_or_range(&self) -> Range {
    self.context.outer.unwrap_or(self.span.range)
  }
}
