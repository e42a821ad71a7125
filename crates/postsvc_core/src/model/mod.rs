//! Domain model for post records.
//!
//! # Responsibility
//! - Define the data shapes shared by services and outer surfaces.
//!
//! # Invariants
//! - Every post is identified by a caller-supplied `PostId`.

pub mod post;
