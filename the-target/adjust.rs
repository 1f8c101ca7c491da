use tracing::trace;

use crate::{
  context::TypedSpan,
  selection::Range,
  target::{
    InsideOutsideType,
    TargetPosition,
  },
};

/// Collapses `typed` to a point before or after itself, or keeps it whole.
/// The target's inside/outside type rides along for the final adjustment.
pub fn adjust_position(
  typed: TypedSpan,
  position: TargetPosition,
  inside_outside: Option<InsideOutsideType>,
) -> TypedSpan {
  let range = typed.range();
  let range = match position {
    TargetPosition::Contents => range,
    TargetPosition::Before => Range::point(range.start()),
    TargetPosition::After => Range::point(range.end()),
  };
  trace!(?position, ?range, "adjusted position");

  TypedSpan {
    span: typed.span.with_range(range),
    inside_outside,
    position,
    ..typed
  }
}

/// Runs once on every resolved span, after everything else.
pub trait InsideOutsideAdjuster {
  fn adjust(&self, typed: TypedSpan) -> TypedSpan;
}

impl<F> InsideOutsideAdjuster for F
where
  F: Fn(TypedSpan) -> TypedSpan,
{
  fn adjust(&self, typed: TypedSpan) -> TypedSpan {
    self(typed)
  }
}

/// Leaves every span as it is.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAdjustment;

impl InsideOutsideAdjuster for NoAdjustment {
  fn adjust(&self, typed: TypedSpan) -> TypedSpan {
    typed
  }
}

/// Widens `outside` targets over their delimiters.
///
/// The outer selection wins when there is one; otherwise the span takes in
/// its trailing delimiter, or its leading one at the end of a list. Points
/// from `before`/`after` positions and `inside` targets are left alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct OuterAdjustment;

impl InsideOutsideAdjuster for OuterAdjustment {
  fn adjust(&self, typed: TypedSpan) -> TypedSpan {
    if typed.inside_outside != Some(InsideOutsideType::Outside)
      || typed.position != TargetPosition::Contents
    {
      return typed;
    }

    let range = typed.range();
    let context = &typed.context;
    let widened = context
      .outer
      .or_else(|| context.trailing_delimiter.map(|delimiter| range.union(&delimiter)))
      .or_else(|| context.leading_delimiter.map(|delimiter| range.union(&delimiter)));

    match widened {
      Some(widened) => {
        let widened = widened.with_direction(range.direction());
        trace!(?range, ?widened, "widened outside target");
        TypedSpan {
          span: typed.span.with_range(widened),
          ..typed
        }
      },
      None => typed,
    }
  }
}
