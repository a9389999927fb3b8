//! Shared test harness
//!
//! Each test binary compiles its own copy of this module, so not every
//! binary uses every helper.
#![allow(dead_code)]

pub mod config;
pub mod mock_gemini;
