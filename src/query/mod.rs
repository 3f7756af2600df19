//! Query Engine Module
//!
//! Resolves search terms against the inverted index and shapes the
//! results for display.
//!
//! ## Responsibilities
//! - **Resolution**: point lookup of the searched word, optionally
//!   narrowed to one work or one character.
//! - **Grouping**: mentions come back grouped work by work, character by
//!   character, mirroring the index hierarchy.
//! - **Pagination**: when a word's total count exceeds the page limit,
//!   each work's lines are capped proportionally so no single work
//!   dominates the page.
//! - **Highlighting**: every whole-word occurrence of the term is
//!   wrapped in a bold tag, preserving the original casing.
//! - **Fallback**: a miss at the word level surfaces a spelling
//!   suggestion alongside the empty result.
//!
//! ## Submodules
//! - **`engine`**: filter resolution and result assembly.
//! - **`highlight`**: case-preserving whole-word match markup.
//! - **`types`**: result DTOs.

pub mod engine;
pub mod highlight;
pub mod types;

#[cfg(test)]
mod tests;
