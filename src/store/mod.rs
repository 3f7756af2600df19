//! Inverted Index Store Module
//!
//! The persisted hierarchy `Word -> Work -> Character -> [Line]` with a
//! running occurrence count at every level.
//!
//! ## Core Concepts
//! - **Identity**: every level is addressed by its parent chain plus a
//!   local id (word name; word + work title; word + work + character).
//! - **Atomic upserts**: the reduce phase of the index pipeline touches
//!   one word entry at a time under a `DashMap` entry guard, so counts
//!   never lose updates when reduce shards run concurrently.
//! - **Reads**: point lookups for a word, ancestor-scoped listings for
//!   works, characters, and capped mention lists.

pub mod memory;
pub mod types;
