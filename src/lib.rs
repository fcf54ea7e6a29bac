//! Decide whether a module manifest version needs a new release tag
//!
//! # Modules
//!
//! - [`config`]: Run configuration read from the environment
//! - [`manifest`]: `__manifest__.py` parsing
//! - [`version`]: Version and tag naming
//! - [`release`]: Release listing, latest-match selection and decision
//! - [`check`]: The end-to-end check pipeline
//! - [`output`]: CI output emission
//! - [`logging`]: Tracing subscriber setup

pub mod check;
pub mod config;
pub mod error;
pub mod logging;
pub mod manifest;
pub mod output;
pub mod release;
pub mod version;
