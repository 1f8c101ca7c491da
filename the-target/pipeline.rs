//! Resolving target trees into typed spans.
//!
//! Every primitive target goes through the same stages:
//!
//! ```text
//! mark -> modifier -> selection type -> position
//! ```
//!
//! Ranges resolve both of their ends that way and combine them pairwise;
//! lists resolve their elements in order and concatenate the results. Every
//! span that comes out is handed to the inside/outside adjuster exactly once.
//!
//! Resolution is all or nothing: the first error aborts the call.

use tracing::trace;

use crate::{
  adjust::{
    InsideOutsideAdjuster,
    OuterAdjustment,
    adjust_position,
  },
  context::TypedSpan,
  document::{
    Document,
    DocumentId,
    Documents,
  },
  error::{
    Result,
    TargetError,
  },
  mark::{
    MarkSources,
    NavigationMap,
    NoTokens,
    resolve_mark,
  },
  modifier::{
    ScopeSources,
    apply_modifier,
  },
  range::combine_all,
  scope::ScopeRegistry,
  selection::Span,
  syntax::{
    NoSyntax,
    SyntaxProvider,
  },
  target::{
    ListElement,
    PrimitiveTarget,
    RangeTarget,
    Target,
  },
  typing::apply_selection_type,
};

/// Read-only snapshot of the editor state a resolution may consult.
#[derive(Clone, Copy)]
pub struct ProcessContext<'a> {
  documents:      &'a Documents,
  selections:     &'a [Span],
  that:           &'a [Span],
  navigation_map: &'a dyn NavigationMap,
  syntax:         &'a dyn SyntaxProvider,
  scopes:         Option<&'a ScopeRegistry>,
  inside_outside: &'a dyn InsideOutsideAdjuster,
}

impl<'a> ProcessContext<'a> {
  /// A context with no selections, no that mark, no tokens, no syntax trees
  /// and the default outside widening.
  pub fn new(documents: &'a Documents) -> Self {
    Self {
      documents,
      selections: &[],
      that: &[],
      navigation_map: &NoTokens,
      syntax: &NoSyntax,
      scopes: None,
      inside_outside: &OuterAdjustment,
    }
  }

  pub fn with_selections(mut self, selections: &'a [Span]) -> Self {
    self.selections = selections;
    self
  }

  pub fn with_that_mark(mut self, that: &'a [Span]) -> Self {
    self.that = that;
    self
  }

  pub fn with_navigation_map(mut self, navigation_map: &'a dyn NavigationMap) -> Self {
    self.navigation_map = navigation_map;
    self
  }

  pub fn with_syntax(mut self, syntax: &'a dyn SyntaxProvider) -> Self {
    self.syntax = syntax;
    self
  }

  pub fn with_scopes(mut self, scopes: &'a ScopeRegistry) -> Self {
    self.scopes = Some(scopes);
    self
  }

  pub fn with_inside_outside(mut self, inside_outside: &'a dyn InsideOutsideAdjuster) -> Self {
    self.inside_outside = inside_outside;
    self
  }

  pub fn document(&self, doc: DocumentId) -> Result<&'a Document> {
    self
      .documents
      .get(doc)
      .ok_or(TargetError::UnknownDocument { doc })
  }

  fn mark_sources(&self) -> MarkSources<'a> {
    MarkSources {
      selections:     self.selections,
      that:           self.that,
      navigation_map: self.navigation_map,
    }
  }

  fn scope_sources(&self) -> ScopeSources<'a> {
    ScopeSources {
      syntax: self.syntax,
      scopes: self.scopes,
    }
  }
}

/// Resolves every target, one group of spans per target, in order.
pub fn process_targets(ctx: &ProcessContext<'_>, targets: &[Target]) -> Result<Vec<Vec<TypedSpan>>> {
  targets
    .iter()
    .map(|target| process_target(ctx, target))
    .collect()
}

pub fn process_target(ctx: &ProcessContext<'_>, target: &Target) -> Result<Vec<TypedSpan>> {
  let spans = match target {
    Target::Primitive(primitive) => process_adjusted_primitive(ctx, primitive)?,
    Target::Range(range) => process_adjusted_range(ctx, range)?,
    Target::List(list) => {
      let mut spans = Vec::new();
      for element in &list.elements {
        let resolved = match element {
          ListElement::Primitive(primitive) => process_adjusted_primitive(ctx, primitive)?,
          ListElement::Range(range) => process_adjusted_range(ctx, range)?,
        };
        spans.extend(resolved);
      }
      spans
    },
  };

  trace!(count = spans.len(), "resolved target");
  Ok(spans)
}

fn process_adjusted_primitive(
  ctx: &ProcessContext<'_>,
  target: &PrimitiveTarget,
) -> Result<Vec<TypedSpan>> {
  let spans = process_primitive(ctx, target)?;
  Ok(adjust_inside_outside(ctx, spans))
}

fn process_adjusted_range(ctx: &ProcessContext<'_>, target: &RangeTarget) -> Result<Vec<TypedSpan>> {
  let starts = process_primitive(ctx, &target.start)?;
  let ends = process_primitive(ctx, &target.end)?;
  let spans = combine_all(&starts, &ends)?;
  Ok(adjust_inside_outside(ctx, spans))
}

fn adjust_inside_outside(ctx: &ProcessContext<'_>, spans: Vec<TypedSpan>) -> Vec<TypedSpan> {
  spans
    .into_iter()
    .map(|typed| ctx.inside_outside.adjust(typed))
    .collect()
}

/// Mark, modifier, selection type and position for one primitive target,
/// before any inside/outside adjustment.
pub fn process_primitive(
  ctx: &ProcessContext<'_>,
  target: &PrimitiveTarget,
) -> Result<Vec<TypedSpan>> {
  let mut typed = Vec::new();

  for span in resolve_mark(&target.mark, ctx.mark_sources())? {
    let document = ctx.document(span.doc)?;
    if let Some(position) = [span.range.anchor, span.range.head]
      .into_iter()
      .find(|&pos| !document.contains(pos))
    {
      return Err(TargetError::OutOfBounds {
        doc: span.doc,
        position,
      });
    }
    for transformed in apply_modifier(&target.modifier, document, span, ctx.scope_sources())? {
      let typed_span = apply_selection_type(target.selection_type, document, transformed)?;
      typed.push(adjust_position(
        typed_span,
        target.position,
        target.inside_outside_type,
      ));
    }
  }

  Ok(typed)
}
