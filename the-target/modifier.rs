//! Modifiers reshape a mark's raw span into the part the user meant.

use smallvec::{
  SmallVec,
  smallvec,
};
use the_core::subword::{
  char_pieces,
  subword_pieces,
};
use tracing::{
  debug,
  trace,
};

use crate::{
  context::SelectionContext,
  document::Document,
  error::{
    Result,
    TargetError,
  },
  scope::{
    ScopeMatch,
    ScopeRegistry,
  },
  selection::{
    Range,
    Span,
  },
  syntax::SyntaxProvider,
  target::{
    Modifier,
    PieceType,
    ScopeType,
  },
};

/// A modified span and whatever delimiter context the modifier found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transformed {
  pub span:    Span,
  pub context: SelectionContext,
}

impl Transformed {
  pub fn new(span: Span) -> Self {
    Self {
      span,
      context: SelectionContext::default(),
    }
  }
}

/// What containing-scope modifiers consult.
#[derive(Clone, Copy)]
pub struct ScopeSources<'a> {
  pub syntax: &'a dyn SyntaxProvider,
  pub scopes: Option<&'a ScopeRegistry>,
}

pub fn apply_modifier(
  modifier: &Modifier,
  document: &Document,
  span: Span,
  sources: ScopeSources<'_>,
) -> Result<SmallVec<[Transformed; 1]>> {
  let transformed = match modifier {
    Modifier::Identity => smallvec![Transformed::new(span)],
    Modifier::ContainingScope {
      scope_type,
      include_siblings,
    } => containing_scope(document, span, *scope_type, *include_siblings, sources)?,
    Modifier::Subpiece {
      piece_type,
      anchor,
      active,
    } => smallvec![subpiece(document, span, *piece_type, *anchor, *active)?],
    Modifier::MatchingPairSymbol => {
      return Err(TargetError::not_implemented("matchingPairSymbol modifier"));
    },
    Modifier::SurroundingPair => {
      return Err(TargetError::not_implemented("surroundingPair modifier"));
    },
  };

  trace!(?modifier, count = transformed.len(), "applied modifier");
  Ok(transformed)
}

/// Walks outward from the node at the start of `span` until the scope's
/// matcher accepts one.
fn containing_scope(
  document: &Document,
  span: Span,
  scope: ScopeType,
  include_siblings: bool,
  sources: ScopeSources<'_>,
) -> Result<SmallVec<[Transformed; 1]>> {
  let matcher = match sources.scopes {
    Some(scopes) => scopes.matcher(document.language_id(), scope)?,
    None => {
      return Err(TargetError::NoScopeMatcher {
        language_id: document.language_id().to_owned(),
        scope,
      });
    },
  };
  let not_found = || TargetError::ContainingScopeNotFound { scope };

  let mut node = sources
    .syntax
    .node_at(document, span.start())
    .ok_or_else(not_found)?;

  let (node, found) = loop {
    if let Some(found) = matcher.match_node(document, node) {
      break (node, found);
    }
    match node.parent() {
      Some(parent) => node = parent,
      None => {
        debug!(%scope, doc = %document.id(), "no containing scope");
        return Err(not_found());
      },
    }
  };
  debug!(%scope, kind = node.kind(), range = ?found.range, "found containing scope");

  let into_transformed = |found: ScopeMatch| {
    Transformed {
      span:    span.with_range(found.range),
      context: found.context,
    }
  };

  let parent = match node.parent() {
    Some(parent) if include_siblings => parent,
    _ => return Ok(smallvec![into_transformed(found)]),
  };

  let mut cursor = parent.walk();
  let siblings: SmallVec<[Transformed; 1]> = parent
    .children(&mut cursor)
    .filter_map(|sibling| matcher.match_node(document, sibling))
    .map(into_transformed)
    .collect();
  debug!(%scope, count = siblings.len(), "matched siblings");

  Ok(siblings)
}

fn subpiece(
  document: &Document,
  span: Span,
  piece_type: PieceType,
  anchor: isize,
  active: isize,
) -> Result<Transformed> {
  let text = document.text_of(&span.range);
  let pieces = match piece_type {
    PieceType::Word => subword_pieces(&text),
    PieceType::Character => char_pieces(&text),
  };

  let resolve = |index: isize| -> Result<usize> {
    let len = pieces.len();
    let resolved = if index < 0 {
      index.checked_add_unsigned(len)
    } else {
      Some(index)
    };
    resolved
      .and_then(|resolved| usize::try_from(resolved).ok())
      .filter(|resolved| *resolved < len)
      .ok_or(TargetError::IndexOutOfRange { index, len })
  };
  let anchor = resolve(anchor)?;
  let active = resolve(active)?;

  let (anchor_offset, active_offset) = if active < anchor {
    (pieces[anchor].end, pieces[active].start)
  } else {
    (pieces[anchor].start, pieces[active].end)
  };

  let base = document.char_idx(span.start());
  let range = Range::new(
    document.position_at(base + anchor_offset),
    document.position_at(base + active_offset),
  );
  Ok(Transformed::new(span.with_range(range)))
}
