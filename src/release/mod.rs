//! Release layer
//!
//! Fetches existing release tags and decides whether a new one is due.
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Lister    │────▶│  Selector   │────▶│   Decider   │
//! │ (fetch tags)│     │(latest tag) │     │ (compare)   │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │   GitHub    │
//! │ Releases API│
//! └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`lister`]: `ReleaseLister` trait for fetching release tags
//! - [`github`]: GitHub Releases API implementation
//! - [`selector`]: Latest matching tag selection
//! - [`decider`]: New release decision
//! - [`error`]: Error type for release listing

pub mod decider;
pub mod error;
pub mod github;
pub mod lister;
pub mod selector;

pub use decider::{Decision, decide};
pub use error::RegistryError;
pub use github::GitHubReleases;
pub use lister::ReleaseLister;
pub use selector::{TagOrdering, select_latest};
