//! Text primitives shared by the target pipeline: character classes, line
//! metadata and subword decomposition.

pub mod chars;
pub mod line_ending;
pub mod subword;
