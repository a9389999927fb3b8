//! Content brief generation for Scribe
//!
//! Turns a loosely structured brief request into a fixed content-strategy
//! prompt and asks the Google Generative Language API to write the brief.

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

pub mod error;
pub mod handler;
pub mod prompt;
pub mod protocol;
pub mod provider;
pub mod state;
pub mod types;

pub use error::BriefError;
pub use handler::brief_router;
pub use provider::GoogleProvider;
pub use state::BriefState;
pub use types::{BriefRequest, BriefResponse};
