//! Definition Service Module
//!
//! Client for the remote dictionary-definition service. The service is a
//! black box behind a synchronous request/response contract: send a
//! term, get back zero or more definitions. Transient transport errors
//! are retried with bounded exponential backoff; anything past that
//! surfaces to the caller.

pub mod client;
pub mod types;
