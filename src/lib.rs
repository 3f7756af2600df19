//! Concordance Library
//!
//! This library crate builds and serves a hierarchical word index over a
//! corpus of plain-text plays. It is the foundation for the binary
//! executable (`main.rs`).
//!
//! ## Architecture Modules
//! The system is composed of six loosely coupled subsystems:
//!
//! - **`parser`**: Structural parsing of raw play texts. Pure functions
//!   that find a work's title, measure its epilog, and map byte offsets
//!   to speaking characters.
//! - **`pipeline`**: The index builder. A batch two-stage map-reduce:
//!   Stage 1 extracts per-file metadata in parallel, Stage 2 maps every
//!   line to `(word, work, character)` associations and reduces them
//!   into the store.
//! - **`store`**: The inverted index. A concurrent in-memory hierarchy
//!   `Word -> Work -> Character -> [Line]` with occurrence counts at
//!   every level and atomic per-entity upserts.
//! - **`query`**: The read path. Resolves a search term against the
//!   store, groups and paginates mentions, and highlights matches while
//!   preserving their casing.
//! - **`spelling`**: Edit-distance-1 suggestion generation for search
//!   terms that miss the index.
//! - **`definitions`**: Client for the remote dictionary-definition
//!   service.

pub mod definitions;
pub mod parser;
pub mod pipeline;
pub mod query;
pub mod spelling;
pub mod store;
