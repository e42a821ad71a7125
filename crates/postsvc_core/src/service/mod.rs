//! Core use-case services.
//!
//! # Responsibility
//! - Expose use-case level APIs over the post model.
//! - Keep CLI and embedding callers decoupled from data-source details.

pub mod post_service;
