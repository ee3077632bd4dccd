//! Code Insights publishing for finished CI builds.
//!
//! On every build-finished event the [`CompletionListener`] resolves a
//! [`InsightsContext`] from the build's Bitbucket SCM source, gates on its
//! validity, fans out to every registered [`ReportBuilder`] and upserts each
//! produced report against the built commit. Publishing is best-effort: any
//! failure is logged and never changes the build's own result.
//!
//! The host platform supplies its side of the picture through the
//! [`ScmFacade`] and [`codeinsights_core::DisplayUrls`] traits.

pub mod builder;
pub mod context;
pub mod listener;
pub mod publisher;
pub mod scm;
pub mod testreport;

pub use builder::{BuilderRegistry, ReportBuilder};
pub use context::InsightsContext;
pub use listener::CompletionListener;
pub use publisher::Publisher;
pub use scm::{BitbucketSource, ScmFacade, ScmHead, ScmRevision};
pub use testreport::TestReportBuilder;

pub use codeinsights_core::{Error, Result};
