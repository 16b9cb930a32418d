//! The fixed four-generation family: entity store, breeding order, layout and output.

pub mod builder;
pub mod cat;
pub mod output;
pub mod tree;
