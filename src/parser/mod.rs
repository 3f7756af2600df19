//! Text Parser Module
//!
//! Structural parsing of raw play texts. A play file starts with a title
//! line, followed by front matter (dramatis personae, act and scene
//! headers) that we call the epilog, followed by the body: speech blocks
//! introduced by an all-caps character name terminated by a tab.
//!
//! ## Responsibilities
//! - **Title detection**: Locating the tab-prefixed title line of a work.
//! - **Epilog measurement**: Finding the span bounded by the second
//!   recurrence of the title, which separates front matter from the body.
//! - **Speech offsets**: Mapping the byte offset of each speech block to
//!   the character who speaks it.
//! - **Attribution**: Resolving which character a given line belongs to
//!   via an offset bisect.
//!
//! Everything here is a pure function of its text input. Per-file results
//! are assembled into pipeline metadata by the `pipeline` module.

pub mod play;
