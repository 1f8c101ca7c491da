//! The target tree handed over by the command dispatcher.
//!
//! Targets are plain data and deserialize from the dispatcher's JSON, which
//! tags every variant with a `"type"` field:
//!
//! ```
//! use the_target::target::{
//!   Mark,
//!   Target,
//! };
//!
//! let json = r#"{
//!   "type": "primitive",
//!   "mark": { "type": "decoratedSymbol", "symbolColor": "blue", "character": "x" },
//!   "modifier": { "type": "identity" },
//!   "selectionType": "token",
//!   "position": "contents"
//! }"#;
//!
//! let Target::Primitive(target) = serde_json::from_str(json).unwrap() else {
//!   panic!("expected a primitive target");
//! };
//! assert_eq!(target.mark, Mark::DecoratedSymbol {
//!   symbol_color: "blue".into(),
//!   character:    'x',
//! });
//! ```

use std::fmt;

use serde::{
  Deserialize,
  Serialize,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Target {
  Primitive(PrimitiveTarget),
  Range(RangeTarget),
  List(ListTarget),
}

/// Ranges have primitive endpoints only; they never nest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeTarget {
  pub start: PrimitiveTarget,
  pub end:   PrimitiveTarget,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListTarget {
  pub elements: Vec<ListElement>,
}

/// Lists are flat, so an element is anything but another list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ListElement {
  Primitive(PrimitiveTarget),
  Range(RangeTarget),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrimitiveTarget {
  pub mark:                Mark,
  #[serde(default)]
  pub modifier:            Modifier,
  pub selection_type:      SelectionType,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub inside_outside_type: Option<InsideOutsideType>,
  #[serde(default)]
  pub position:            TargetPosition,
}

impl PrimitiveTarget {
  /// A token-sized, unmodified target on `mark`.
  pub fn new(mark: Mark) -> Self {
    Self {
      mark,
      modifier: Modifier::Identity,
      selection_type: SelectionType::Token,
      inside_outside_type: None,
      position: TargetPosition::Contents,
    }
  }

  pub fn with_modifier(mut self, modifier: Modifier) -> Self {
    self.modifier = modifier;
    self
  }

  pub fn with_selection_type(mut self, selection_type: SelectionType) -> Self {
    self.selection_type = selection_type;
    self
  }

  pub fn with_position(mut self, position: TargetPosition) -> Self {
    self.position = position;
    self
  }

  pub fn with_inside_outside(mut self, inside_outside_type: InsideOutsideType) -> Self {
    self.inside_outside_type = Some(inside_outside_type);
    self
  }
}

impl From<PrimitiveTarget> for Target {
  fn from(target: PrimitiveTarget) -> Self {
    Self::Primitive(target)
  }
}

impl From<RangeTarget> for Target {
  fn from(target: RangeTarget) -> Self {
    Self::Range(target)
  }
}

impl From<PrimitiveTarget> for ListElement {
  fn from(target: PrimitiveTarget) -> Self {
    Self::Primitive(target)
  }
}

impl From<RangeTarget> for ListElement {
  fn from(target: RangeTarget) -> Self {
    Self::Range(target)
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Mark {
  /// Every current caret or selection.
  Cursor,
  /// The token registered under a colored symbol.
  DecoratedSymbol { symbol_color: String, character: char },
  /// Whatever the previous action produced.
  That,
  LastCursorPosition,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Modifier {
  #[default]
  Identity,
  ContainingScope {
    scope_type:       ScopeType,
    #[serde(default)]
    include_siblings: bool,
  },
  /// `anchor` and `active` index into the piece list; negative values count
  /// from the end.
  Subpiece {
    piece_type: PieceType,
    anchor:     isize,
    active:     isize,
  },
  MatchingPairSymbol,
  SurroundingPair,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PieceType {
  Word,
  Character,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SelectionType {
  Token,
  Line,
  Document,
  Paragraph,
  Character,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TargetPosition {
  Before,
  After,
  #[default]
  Contents,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InsideOutsideType {
  Inside,
  Outside,
}

/// Syntactic scopes a containing-scope modifier can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScopeType {
  ArgumentOrParameter,
  ArrowFunction,
  Class,
  ClassName,
  Comment,
  Dictionary,
  FunctionCall,
  FunctionName,
  IfStatement,
  List,
  Name,
  NamedFunction,
  Pair,
  String,
  Type,
  Value,
}

impl ScopeType {
  pub const fn as_str(&self) -> &'static str {
    match self {
      Self::ArgumentOrParameter => "argumentOrParameter",
      Self::ArrowFunction => "arrowFunction",
      Self::Class => "class",
      Self::ClassName => "className",
      Self::Comment => "comment",
      Self::Dictionary => "dictionary",
      Self::FunctionCall => "functionCall",
      Self::FunctionName => "functionName",
      Self::IfStatement => "ifStatement",
      Self::List => "list",
      Self::Name => "name",
      Self::NamedFunction => "namedFunction",
      Self::Pair => "pair",
      Self::String => "string",
      Self::Type => "type",
      Self::Value => "value",
    }
  }
}

impl fmt::Display for ScopeType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn primitive_defaults() {
    let json = r#"{
      "type": "primitive",
      "mark": { "type": "cursor" },
      "selectionType": "line"
    }"#;
    let target: Target = serde_json::from_str(json).unwrap();

    assert_eq!(
      target,
      Target::Primitive(PrimitiveTarget::new(Mark::Cursor).with_selection_type(SelectionType::Line))
    );
  }

  #[test]
  fn modifiers_from_json() {
    let scope: Modifier = serde_json::from_str(
      r#"{ "type": "containingScope", "scopeType": "namedFunction", "includeSiblings": true }"#,
    )
    .unwrap();
    assert_eq!(scope, Modifier::ContainingScope {
      scope_type:       ScopeType::NamedFunction,
      include_siblings: true,
    });

    let piece: Modifier = serde_json::from_str(
      r#"{ "type": "subpiece", "pieceType": "word", "anchor": 0, "active": -1 }"#,
    )
    .unwrap();
    assert_eq!(piece, Modifier::Subpiece {
      piece_type: PieceType::Word,
      anchor:     0,
      active:     -1,
    });

    let pair: Modifier =
      serde_json::from_str(r#"{ "type": "surroundingPair", "delimiter": "parentheses" }"#).unwrap();
    assert_eq!(pair, Modifier::SurroundingPair);
  }

  #[test]
  fn range_inside_list() {
    let json = r#"{
      "type": "list",
      "elements": [
        { "type": "primitive", "mark": { "type": "that" }, "selectionType": "token", "position": "after" },
        {
          "type": "range",
          "start": { "type": "primitive", "mark": { "type": "cursor" }, "selectionType": "token" },
          "end": { "type": "primitive", "mark": { "type": "that" }, "selectionType": "token", "insideOutsideType": "outside" }
        }
      ]
    }"#;
    let Target::List(list) = serde_json::from_str::<Target>(json).unwrap() else {
      panic!("expected a list");
    };

    assert_eq!(list.elements.len(), 2);
    let ListElement::Range(range) = &list.elements[1] else {
      panic!("expected a range element");
    };
    assert_eq!(range.end.inside_outside_type, Some(InsideOutsideType::Outside));
  }

  #[test]
  fn nested_lists_are_rejected() {
    let json = r#"{ "type": "list", "elements": [ { "type": "list", "elements": [] } ] }"#;

    assert!(serde_json::from_str::<Target>(json).is_err());
  }

  #[test]
  fn scope_type_names_match_serde() {
    for scope in [ScopeType::ArgumentOrParameter, ScopeType::NamedFunction, ScopeType::Type] {
      let json = serde_json::to_string(&scope).unwrap();
      assert_eq!(json, format!("\"{}\"", scope.as_str()));
    }
  }
}
