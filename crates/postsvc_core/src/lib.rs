//! Post lookups backed by a placeholder data source.
//!
//! `PostService::get_post` echoes the requested id with fixed title and
//! content; `logging` lets binaries route setup diagnostics to files.

pub mod logging;
pub mod model;
pub mod service;

pub use logging::{default_log_level, init_logging, LoggingError, LoggingResult};
pub use model::post::{Post, PostId, PLACEHOLDER_CONTENT, PLACEHOLDER_TITLE};
pub use service::post_service::PostService;
