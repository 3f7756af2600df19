//! Index Builder Module
//!
//! The batch map-reduce pipeline that turns a corpus archive into the
//! inverted index.
//!
//! ## Architecture Overview
//! Indexing runs as two sequential map-reduce stages:
//! 1. **Metadata stage**: one task per file extracts the work's title and
//!    its speech-offset map. All per-file results are assembled into a
//!    [`metadata::MetadataCatalog`], an immutable snapshot broadcast to
//!    every Stage-2 task. Stage 2 never starts before every Stage-1 task
//!    has finished (hard barrier).
//! 2. **Index stage**: the map phase walks every line of every file,
//!    resolves the speaking character through the catalog, and emits one
//!    `(word, work, character) -> line` association per distinct word in
//!    the line. The reduce phase groups emissions by key, shards the keys
//!    by hash, and applies each batch to the store atomically.
//!
//! ## Failure Semantics
//! - A file with no detectable title degrades to `EPILOG` attribution
//!   under an empty title; the batch continues.
//! - A line whose file has no catalog entry is fatal to that record only:
//!   logged and skipped.
//! - An unreadable archive aborts the whole pipeline invocation.
//!
//! ## Submodules
//! - **`archive`**: the corpus ingestion boundary (deterministic file
//!   enumeration).
//! - **`metadata`**: Stage-1 output types and per-file extraction.
//! - **`indexer`**: Stage-2 tokenization and per-line mapping.
//! - **`runner`**: stage orchestration, sharding, and the reduce step.

pub mod archive;
pub mod indexer;
pub mod metadata;
pub mod runner;
