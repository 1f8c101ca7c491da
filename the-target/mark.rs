//! Resolving marks to the raw spans they point at.

use std::collections::HashMap;

use smallvec::SmallVec;
use tracing::trace;

use crate::{
  error::{
    Result,
    TargetError,
  },
  selection::Span,
  target::Mark,
};

/// Looks up the token displayed under a colored symbol.
pub trait NavigationMap {
  fn token(&self, color: &str, character: char) -> Option<Span>;
}

/// A navigation map that never has a token.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTokens;

impl NavigationMap for NoTokens {
  fn token(&self, _color: &str, _character: char) -> Option<Span> {
    None
  }
}

/// Tokens registered by `(color, character)`.
#[derive(Debug, Clone, Default)]
pub struct TokenMap {
  tokens: HashMap<(String, char), Span>,
}

impl TokenMap {
  pub fn new() -> Self {
    Self::default()
  }

  /// Registers `span` under `color` and `character`, returning the span it
  /// displaced.
  pub fn insert(&mut self, color: impl Into<String>, character: char, span: Span) -> Option<Span> {
    self.tokens.insert((color.into(), character), span)
  }

  pub fn remove(&mut self, color: &str, character: char) -> Option<Span> {
    self.tokens.remove(&(color.to_owned(), character))
  }

  pub fn clear(&mut self) {
    self.tokens.clear();
  }

  pub fn len(&self) -> usize {
    self.tokens.len()
  }

  pub fn is_empty(&self) -> bool {
    self.tokens.is_empty()
  }
}

impl NavigationMap for TokenMap {
  fn token(&self, color: &str, character: char) -> Option<Span> {
    self.tokens.get(&(color.to_owned(), character)).copied()
  }
}

impl<F> NavigationMap for F
where
  F: Fn(&str, char) -> Option<Span>,
{
  fn token(&self, color: &str, character: char) -> Option<Span> {
    self(color, character)
  }
}

/// The spans the previous action produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThatMark {
  spans: Vec<Span>,
}

impl ThatMark {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn set(&mut self, spans: impl IntoIterator<Item = Span>) {
    self.spans.clear();
    self.spans.extend(spans);
  }

  pub fn get(&self) -> &[Span] {
    &self.spans
  }

  pub fn clear(&mut self) {
    self.spans.clear();
  }
}

/// Where marks read their spans from.
#[derive(Clone, Copy)]
pub struct MarkSources<'a> {
  pub selections:     &'a [Span],
  pub that:           &'a [Span],
  pub navigation_map: &'a dyn NavigationMap,
}

/// Resolves `mark` to its raw spans.
///
/// Cursors and the that mark may resolve to nothing at all; a decorated symbol
/// always resolves to exactly one span or fails.
pub fn resolve_mark(mark: &Mark, sources: MarkSources<'_>) -> Result<SmallVec<[Span; 1]>> {
  let spans: SmallVec<[Span; 1]> = match mark {
    Mark::Cursor => sources.selections.iter().copied().collect(),
    Mark::That => sources.that.iter().copied().collect(),
    Mark::DecoratedSymbol {
      symbol_color,
      character,
    } => {
      let span = sources
        .navigation_map
        .token(symbol_color, *character)
        .ok_or_else(|| {
          TargetError::MarkNotFound {
            color:     symbol_color.clone(),
            character: *character,
          }
        })?;
      smallvec::smallvec![span]
    },
    Mark::LastCursorPosition => return Err(TargetError::not_implemented("lastCursorPosition mark")),
  };

  trace!(?mark, count = spans.len(), "resolved mark");
  Ok(spans)
}
