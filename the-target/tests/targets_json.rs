//! Targets as the command dispatcher sends them, resolved end to end.

use std::num::NonZeroUsize;

use ropey::Rope;
use the_target::{
  ProcessContext,
  Target,
  TargetError,
  document::{
    Document,
    DocumentId,
    Documents,
  },
  mark::{
    ThatMark,
    TokenMap,
  },
  process_targets,
  selection::{
    Range,
    Span,
  },
};

const TEXT: &str = "let items = [alpha, beta, gamma];\n\nfn helperFunction() {}\n";

fn doc_id() -> DocumentId {
  DocumentId::new(NonZeroUsize::new(1).unwrap())
}

fn span(anchor: (usize, usize), head: (usize, usize)) -> Span {
  Span::new(doc_id(), Range::new(anchor.into(), head.into()))
}

fn setup() -> (Documents, TokenMap) {
  let docs = [Document::new(doc_id(), "plaintext", Rope::from(TEXT))]
    .into_iter()
    .collect();
  let mut map = TokenMap::new();
  map.insert("default", 'a', span((0, 13), (0, 18)));
  map.insert("default", 'b', span((0, 20), (0, 24)));
  map.insert("blue", 'g', span((0, 26), (0, 31)));
  map.insert("default", 'h', span((2, 3), (2, 17)));
  (docs, map)
}

fn targets(json: &str) -> Vec<Target> {
  serde_json::from_str(json).unwrap()
}

#[test]
fn token_and_line_targets() {
  let (docs, map) = setup();
  let ctx = ProcessContext::new(&docs).with_navigation_map(&map);

  let targets = targets(
    r#"[
      {
        "type": "primitive",
        "mark": { "type": "decoratedSymbol", "symbolColor": "default", "character": "b" },
        "modifier": { "type": "identity" },
        "selectionType": "token",
        "position": "contents"
      },
      {
        "type": "primitive",
        "mark": { "type": "decoratedSymbol", "symbolColor": "blue", "character": "g" },
        "selectionType": "line",
        "position": "contents",
        "insideOutsideType": "inside"
      }
    ]"#,
  );
  let result = process_targets(&ctx, &targets).unwrap();

  assert_eq!(result.len(), 2);
  let beta = &result[0][0];
  assert_eq!(beta.span, span((0, 20), (0, 24)));
  assert_eq!(beta.context.containing_list_delimiter.as_deref(), Some(", "));

  let line = &result[1][0];
  assert_eq!(line.span, span((0, 0), (0, 33)));
  assert_eq!(line.context.trailing_delimiter, Some(Range::new((0, 33).into(), (1, 0).into())));
}

#[test]
fn subpiece_range_and_list() {
  let (docs, map) = setup();
  let ctx = ProcessContext::new(&docs).with_navigation_map(&map);

  let targets = targets(
    r#"[
      {
        "type": "primitive",
        "mark": { "type": "decoratedSymbol", "symbolColor": "default", "character": "h" },
        "modifier": { "type": "subpiece", "pieceType": "word", "anchor": -1, "active": -1 },
        "selectionType": "token",
        "position": "contents"
      },
      {
        "type": "list",
        "elements": [
          {
            "type": "range",
            "start": { "type": "primitive", "mark": { "type": "decoratedSymbol", "symbolColor": "blue", "character": "g" }, "selectionType": "token", "position": "contents" },
            "end": { "type": "primitive", "mark": { "type": "decoratedSymbol", "symbolColor": "default", "character": "a" }, "selectionType": "token", "position": "contents" }
          },
          {
            "type": "primitive",
            "mark": { "type": "decoratedSymbol", "symbolColor": "default", "character": "a" },
            "selectionType": "token",
            "position": "after"
          }
        ]
      }
    ]"#,
  );
  let result = process_targets(&ctx, &targets).unwrap();

  assert_eq!(result[0][0].span, span((2, 9), (2, 17)));

  let list = &result[1];
  assert_eq!(list.len(), 2);
  assert_eq!(list[0].span, span((0, 31), (0, 13)));
  assert_eq!(list[1].span, span((0, 18), (0, 18)));
}

#[test]
fn paragraph_and_document() {
  let (docs, map) = setup();
  let mut that = ThatMark::new();
  that.set([span((2, 5), (2, 5))]);
  let ctx = ProcessContext::new(&docs)
    .with_navigation_map(&map)
    .with_that_mark(that.get());

  let targets = targets(
    r#"[
      { "type": "primitive", "mark": { "type": "that" }, "selectionType": "paragraph", "position": "contents" },
      { "type": "primitive", "mark": { "type": "that" }, "selectionType": "document", "position": "before" }
    ]"#,
  );
  let result = process_targets(&ctx, &targets).unwrap();

  let paragraph = &result[0][0];
  assert_eq!(paragraph.span, span((2, 0), (2, 22)));
  assert_eq!(
    paragraph.context.leading_delimiter,
    Some(Range::new((0, 33).into(), (2, 0).into()))
  );
  assert_eq!(
    paragraph.context.trailing_delimiter,
    Some(Range::new((2, 22).into(), (3, 0).into()))
  );

  assert_eq!(result[1][0].span, span((0, 0), (0, 0)));
}

#[test]
fn first_failure_aborts_everything() {
  let (docs, map) = setup();
  let ctx = ProcessContext::new(&docs).with_navigation_map(&map);

  let targets = targets(
    r#"[
      { "type": "primitive", "mark": { "type": "decoratedSymbol", "symbolColor": "default", "character": "a" }, "selectionType": "token" },
      { "type": "primitive", "mark": { "type": "decoratedSymbol", "symbolColor": "red", "character": "a" }, "selectionType": "token" },
      { "type": "primitive", "mark": { "type": "lastCursorPosition" }, "selectionType": "token" }
    ]"#,
  );

  let err = process_targets(&ctx, &targets).unwrap_err();
  assert_eq!(err, TargetError::MarkNotFound {
    color:     "red".into(),
    character: 'a',
  });
  assert!(err.is_user_actionable());
  assert_eq!(err.to_string(), "couldn't find mark red 'a'");
}
