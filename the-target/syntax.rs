//! Syntax trees for containing-scope lookups.
//!
//! The pipeline only ever asks for the smallest node at a position and then
//! walks parents and children from there, so a provider just has to hand out
//! the current `tree_sitter::Tree` of a document.

use std::{
  collections::HashMap,
  fmt,
};

use thiserror::Error;
use tracing::trace;
use tree_sitter::{
  Language,
  Node,
  Parser,
  Point,
  Tree,
};

use crate::{
  document::{
    Document,
    DocumentId,
  },
  position::Position,
  selection::Range,
};

pub type Result<T> = std::result::Result<T, SyntaxError>;

#[derive(Debug, Error)]
pub enum SyntaxError {
  #[error("incompatible grammar for '{language_id}'")]
  Language {
    language_id: String,
    #[source]
    source:      tree_sitter::LanguageError,
  },
  #[error("failed to parse document {doc}")]
  Parse { doc: DocumentId },
}

pub trait SyntaxProvider {
  fn tree(&self, doc: DocumentId) -> Option<&Tree>;

  /// Smallest node covering `pos`, named or not.
  fn node_at<'a>(&'a self, document: &Document, pos: Position) -> Option<Node<'a>> {
    let tree = self.tree(document.id())?;
    let byte = document.byte_idx(pos);
    tree.root_node().descendant_for_byte_range(byte, byte)
  }
}

/// For documents without a grammar.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSyntax;

impl SyntaxProvider for NoSyntax {
  fn tree(&self, _doc: DocumentId) -> Option<&Tree> {
    None
  }
}

/// Parsed trees of the open documents.
#[derive(Default)]
pub struct SyntaxTrees {
  trees: HashMap<DocumentId, Tree>,
}

impl fmt::Debug for SyntaxTrees {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("SyntaxTrees")
      .field("documents", &self.trees.keys().collect::<Vec<_>>())
      .finish()
  }
}

impl SyntaxTrees {
  pub fn new() -> Self {
    Self::default()
  }

  /// Parses `document` from scratch with `language` and keeps the tree,
  /// replacing any previous one.
  pub fn parse(&mut self, document: &Document, language: &Language) -> Result<()> {
    let mut parser = Parser::new();
    parser
      .set_language(language)
      .map_err(|source| {
        SyntaxError::Language {
          language_id: document.language_id().to_owned(),
          source,
        }
      })?;

    let text = document.text();
    // Reads straight from the rope chunks.
    let mut read = |byte_idx: usize, _: Point| {
      text
        .get_chunk_at_byte(byte_idx)
        .map_or(&b""[..], |(chunk, chunk_start, ..)| {
          &chunk.as_bytes()[byte_idx - chunk_start..]
        })
    };
    let tree = parser
      .parse_with_options(&mut read, None, None)
      .ok_or(SyntaxError::Parse { doc: document.id() })?;

    trace!(doc = %document.id(), root = tree.root_node().kind(), "parsed document");
    self.trees.insert(document.id(), tree);
    Ok(())
  }

  pub fn insert(&mut self, doc: DocumentId, tree: Tree) -> Option<Tree> {
    self.trees.insert(doc, tree)
  }

  pub fn remove(&mut self, doc: DocumentId) -> Option<Tree> {
    self.trees.remove(&doc)
  }
}

impl SyntaxProvider for SyntaxTrees {
  fn tree(&self, doc: DocumentId) -> Option<&Tree> {
    self.trees.get(&doc)
  }
}

/// The forward range a node covers in `document`.
pub fn range_from_node(document: &Document, node: Node<'_>) -> Range {
  Range::new(
    document.position_at_byte(node.start_byte()),
    document.position_at_byte(node.end_byte()),
  )
}

#[cfg(test)]
mod tests {
  use std::num::NonZeroUsize;

  use ropey::Rope;

  use super::*;

  fn rust_doc(text: &str) -> Document {
    let id = DocumentId::new(NonZeroUsize::new(1).unwrap());
    Document::new(id, "rust", Rope::from(text))
  }

  #[test]
  fn no_syntax_has_no_nodes() {
    let doc = rust_doc("fn main() {}");

    assert!(NoSyntax.node_at(&doc, Position::zero()).is_none());
  }

  #[test]
  fn node_at_finds_smallest_node() {
    let doc = rust_doc("fn main() {\n  let answer = 42;\n}\n");
    let mut trees = SyntaxTrees::new();
    trees
      .parse(&doc, &tree_sitter_rust::LANGUAGE.into())
      .unwrap();

    let node = trees.node_at(&doc, Position::new(1, 8)).unwrap();
    assert_eq!(node.kind(), "identifier");
    assert_eq!(
      range_from_node(&doc, node),
      Range::new(Position::new(1, 6), Position::new(1, 12))
    );

    let function = node
      .parent()
      .and_then(|node| node.parent())
      .and_then(|node| node.parent())
      .unwrap();
    assert_eq!(function.kind(), "function_item");
  }

  #[test]
  fn parses_across_rope_chunks() {
    let text: String = (0..200)
      .map(|idx| format!("fn item_{idx}(é: u8) {{}}\n"))
      .collect();
    let doc = rust_doc(&text);
    assert!(doc.text().chunks().count() > 1);

    let mut trees = SyntaxTrees::new();
    trees
      .parse(&doc, &tree_sitter_rust::LANGUAGE.into())
      .unwrap();

    let root = trees.tree(doc.id()).unwrap().root_node();
    assert!(!root.has_error());
    assert_eq!(root.named_child_count(), 200);

    let name = trees.node_at(&doc, Position::new(199, 5)).unwrap();
    assert_eq!(doc.text_of(&range_from_node(&doc, name)), "item_199");
  }

  #[test]
  fn ranges_use_char_columns() {
    let doc = rust_doc("fn f() { g(\"é\", \"ü\"); }");
    let mut trees = SyntaxTrees::new();
    trees
      .parse(&doc, &tree_sitter_rust::LANGUAGE.into())
      .unwrap();

    let string = trees
      .node_at(&doc, Position::new(0, 17))
      .and_then(|node| {
        std::iter::successors(Some(node), |node| node.parent())
          .find(|node| node.kind() == "string_literal")
      })
      .unwrap();
    assert_eq!(
      range_from_node(&doc, string),
      Range::new(Position::new(0, 16), Position::new(0, 19))
    );
  }
}
