//! Target resolution: turning a declarative target ("the containing function
//! of the token marked with a blue `b`, as a line") into concrete spans in
//! open documents, each annotated with the delimiters around it.
//!
//! The entry points are [`process_targets`] and [`process_target`], which take
//! a [`ProcessContext`] snapshot of editor state.

pub mod adjust;
pub mod config;
pub mod context;
pub mod document;
pub mod error;
pub mod mark;
pub mod modifier;
pub mod pipeline;
pub mod position;
pub mod range;
pub mod scope;
pub mod selection;
pub mod syntax;
pub mod target;
pub mod typing;

pub use context::{
  SelectionContext,
  TypedSpan,
};
pub use error::{
  Result,
  TargetError,
};
pub use pipeline::{
  ProcessContext,
  process_target,
  process_targets,
};
pub use target::Target;
