//! Per-language scope matchers.
//!
//! A [`ScopeMatcher`] decides whether one syntax node is an instance of a
//! scope type ("namedFunction", "argumentOrParameter", ...) and, when it is,
//! which range the scope covers. Matchers are kept in a [`ScopeRegistry`]
//! keyed by language id and scope type, built once and passed by reference
//! into every resolution.

use std::{
  collections::HashMap,
  fmt,
};

use tree_sitter::Node;

use crate::{
  context::SelectionContext,
  document::Document,
  error::{
    Result,
    TargetError,
  },
  selection::Range,
  syntax::range_from_node,
  target::ScopeType,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopeMatch {
  pub range:   Range,
  /// Delimiter context the matcher detected itself. Left empty, the
  /// selection typer infers one.
  pub context: SelectionContext,
}

impl ScopeMatch {
  pub fn new(range: Range) -> Self {
    Self {
      range,
      context: SelectionContext::default(),
    }
  }

  pub fn with_context(mut self, context: SelectionContext) -> Self {
    self.context = context;
    self
  }
}

pub trait ScopeMatcher: Send + Sync {
  fn match_node(&self, document: &Document, node: Node<'_>) -> Option<ScopeMatch>;
}

impl<F> ScopeMatcher for F
where
  F: Fn(&Document, Node<'_>) -> Option<ScopeMatch> + Send + Sync,
{
  fn match_node(&self, document: &Document, node: Node<'_>) -> Option<ScopeMatch> {
    self(document, node)
  }
}

#[derive(Default)]
pub struct ScopeRegistry {
  languages: HashMap<String, HashMap<ScopeType, Box<dyn ScopeMatcher>>>,
}

impl fmt::Debug for ScopeRegistry {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut map = f.debug_map();
    for (language_id, scopes) in &self.languages {
      let mut scopes: Vec<_> = scopes.keys().collect();
      scopes.sort();
      map.entry(language_id, &scopes);
    }
    map.finish()
  }
}

impl ScopeRegistry {
  pub fn new() -> Self {
    Self::default()
  }

  /// Registers `matcher` for `scope` in `language_id`, replacing any
  /// previous one.
  pub fn register(
    &mut self,
    language_id: impl Into<String>,
    scope: ScopeType,
    matcher: impl ScopeMatcher + 'static,
  ) {
    self
      .languages
      .entry(language_id.into())
      .or_default()
      .insert(scope, Box::new(matcher));
  }

  pub fn with_matcher(
    mut self,
    language_id: impl Into<String>,
    scope: ScopeType,
    matcher: impl ScopeMatcher + 'static,
  ) -> Self {
    self.register(language_id, scope, matcher);
    self
  }

  pub fn matcher(&self, language_id: &str, scope: ScopeType) -> Result<&dyn ScopeMatcher> {
    self
      .languages
      .get(language_id)
      .and_then(|scopes| scopes.get(&scope))
      .map(|matcher| &**matcher)
      .ok_or_else(|| {
        TargetError::NoScopeMatcher {
          language_id: language_id.to_owned(),
          scope,
        }
      })
  }

  pub fn languages(&self) -> impl Iterator<Item = &str> {
    self.languages.keys().map(String::as_str)
  }
}

/// A matcher described by node kinds rather than code; what configuration
/// compiles into.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeMatcher {
  /// Kinds that match. Empty matches any named node.
  pub kinds:     Vec<String>,
  /// Kinds the parent must have, if any are given.
  pub parents:   Vec<String>,
  /// Narrow the match to the child under this field.
  pub field:     Option<String>,
  /// Separator token between siblings, such as `","`.
  pub delimiter: Option<String>,
}

impl NodeMatcher {
  pub fn kinds<I, S>(kinds: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    Self {
      kinds: kinds.into_iter().map(Into::into).collect(),
      ..Self::default()
    }
  }

  pub fn with_parents<I, S>(mut self, parents: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.parents = parents.into_iter().map(Into::into).collect();
    self
  }

  pub fn with_field(mut self, field: impl Into<String>) -> Self {
    self.field = Some(field.into());
    self
  }

  pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
    self.delimiter = Some(delimiter.into());
    self
  }

  fn accepts(&self, node: Node<'_>) -> bool {
    let kind_matches = if self.kinds.is_empty() {
      node.is_named()
    } else {
      self.kinds.iter().any(|kind| kind == node.kind())
    };
    if !kind_matches {
      return false;
    }

    self.parents.is_empty()
      || node
        .parent()
        .is_some_and(|parent| self.parents.iter().any(|kind| kind == parent.kind()))
  }
}

impl ScopeMatcher for NodeMatcher {
  fn match_node(&self, document: &Document, node: Node<'_>) -> Option<ScopeMatch> {
    if !self.accepts(node) {
      return None;
    }

    let target = match &self.field {
      Some(field) => node.child_by_field_name(field)?,
      None => node,
    };
    let range = range_from_node(document, target);

    let context = match &self.delimiter {
      Some(delimiter) => sibling_delimiters(document, target, range, delimiter),
      None => SelectionContext::default(),
    };

    Some(ScopeMatch { range, context })
  }
}

/// Delimiter context from the separator tokens next to `node`.
fn sibling_delimiters(
  document: &Document,
  node: Node<'_>,
  range: Range,
  delimiter: &str,
) -> SelectionContext {
  let leading = node
    .prev_sibling()
    .filter(|sibling| sibling.kind() == delimiter)
    .map(|sibling| {
      let from = sibling
        .prev_sibling()
        .filter(Node::is_named)
        .map_or(sibling.start_byte(), |prev| prev.end_byte());
      Range::new(
        document.position_at_byte(from),
        document.position_at_byte(node.start_byte()),
      )
    });

  let trailing = node
    .next_sibling()
    .filter(|sibling| sibling.kind() == delimiter)
    .map(|sibling| {
      let to = sibling
        .next_sibling()
        .filter(Node::is_named)
        .map_or(sibling.end_byte(), |next| next.start_byte());
      Range::new(
        document.position_at_byte(node.end_byte()),
        document.position_at_byte(to),
      )
    });

  let literal = trailing
    .or(leading)
    .map(|range| document.text_of(&range).into_owned())
    .unwrap_or_else(|| format!("{delimiter} "));

  let context = SelectionContext::delimited(literal, leading, trailing);
  match trailing.or(leading) {
    Some(delimiter) => context.with_outer(range.union(&delimiter)),
    None => context,
  }
}
