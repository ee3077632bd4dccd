//! Core types shared across the codeinsights crates.
//!
//! Holds the error type, the host-platform build model and the
//! [`DisplayUrls`] collaborator trait. Nothing in here talks to the
//! network; the Bitbucket wire model and client live in
//! `codeinsights-bitbucket`.

pub mod build;
pub mod errors;
pub mod urls;

pub use build::{CompletedBuild, Job, Run, TestSummary};
pub use errors::{Error, Result};
pub use urls::DisplayUrls;
