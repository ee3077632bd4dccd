//! Report builder extension point and registry.
//!
//! Each builder inspects a finished build and optionally produces one
//! report. Builders are stateless and order-independent; the completion
//! listener runs every registered builder and isolates individual
//! failures, so one broken builder never blocks the rest.

use std::sync::Arc;

use codeinsights_bitbucket::Report;
use codeinsights_core::{CompletedBuild, Result};

use crate::context::InsightsContext;
use crate::testreport::TestReportBuilder;

/// Extension point: turn a finished build into a Code Insights report.
pub trait ReportBuilder: Send + Sync {
    /// Stable builder name, used in diagnostics.
    fn name(&self) -> &'static str;

    /// Build a report from a finished run.
    ///
    /// Returns `Ok(None)` when the build lacks the inputs this builder
    /// needs (not an error), `Err` when inspecting the build failed.
    fn build(&self, build: &CompletedBuild, context: &InsightsContext<'_>)
    -> Result<Option<Report>>;
}

/// Registry of report builders.
#[derive(Default)]
pub struct BuilderRegistry {
    builders: Vec<Arc<dyn ReportBuilder>>,
}

impl BuilderRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            builders: Vec::new(),
        }
    }

    /// Create a registry with the built-in builders registered.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(TestReportBuilder);
        registry
    }

    /// Register a builder.
    pub fn register(&mut self, builder: impl ReportBuilder + 'static) {
        self.builders.push(Arc::new(builder));
    }

    /// Register an Arc-wrapped builder.
    ///
    /// Useful when the builder is already shared.
    pub fn register_arc(&mut self, builder: Arc<dyn ReportBuilder>) {
        self.builders.push(builder);
    }

    /// All registered builders.
    #[must_use]
    pub fn all(&self) -> Vec<Arc<dyn ReportBuilder>> {
        self.builders.clone()
    }

    /// Number of registered builders.
    #[must_use]
    pub fn len(&self) -> usize {
        self.builders.len()
    }

    /// Whether the registry has no builders.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.builders.is_empty()
    }
}
