//! Build-completion hook: the one entry point of this workspace.
//!
//! Reacts to "build finished" events from the host platform. Owns no state
//! between invocations; concurrent completions each get their own context
//! and publisher.

use codeinsights_core::{CompletedBuild, DisplayUrls};
use tracing::error;

use crate::builder::BuilderRegistry;
use crate::context::InsightsContext;
use crate::publisher::Publisher;
use crate::scm::ScmFacade;

/// Publishes Code Insights reports to Bitbucket Cloud when a run completes.
pub struct CompletionListener {
    registry: BuilderRegistry,
}

impl Default for CompletionListener {
    fn default() -> Self {
        Self::new()
    }
}

impl CompletionListener {
    /// Create a listener with the built-in report builders.
    #[must_use]
    pub fn new() -> Self {
        Self {
            registry: BuilderRegistry::with_defaults(),
        }
    }

    /// Create a listener with an explicit builder registry.
    #[must_use]
    pub fn with_registry(registry: BuilderRegistry) -> Self {
        Self { registry }
    }

    /// Handle a build-finished event.
    ///
    /// Builds the context, gates on validity (an invalid context emits
    /// diagnostics and publishes nothing), then runs every registered
    /// builder and publishes each produced report. Failures never
    /// propagate to the host; the build's own result is untouched.
    pub async fn on_completed(
        &self,
        build: &CompletedBuild,
        urls: &dyn DisplayUrls,
        scm: &dyn ScmFacade,
    ) {
        let context = InsightsContext::from_run(build, urls, scm);
        if !context.is_valid() {
            return;
        }

        let publisher = Publisher::new(&context);
        self.publish_all(build, &context, &publisher).await;
    }

    /// Run every registered builder against a validated context and publish
    /// what they produce, isolating individual failures.
    pub async fn publish_all(
        &self,
        build: &CompletedBuild,
        context: &InsightsContext<'_>,
        publisher: &Publisher<'_>,
    ) {
        for builder in self.registry.all() {
            match builder.build(build, context) {
                Ok(Some(mut report)) => {
                    if let Err(err) = publisher.publish(&mut report).await {
                        error!(
                            report_type = %report.report_type,
                            error = %err,
                            "Failed to publish code insights report"
                        );
                    }
                }
                Ok(None) => {}
                Err(err) => {
                    error!(
                        builder = builder.name(),
                        error = %err,
                        "Report builder failed"
                    );
                }
            }
        }
    }
}
