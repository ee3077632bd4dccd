//! Identity context for addressing reports on a build's commit.
//!
//! The context is an immutable snapshot computed once per build-finished
//! event. Every fallible lookup happens eagerly at construction and absent
//! results stay absent; [`InsightsContext::is_valid`] decides afterwards
//! whether the context can be published against. Accessors on an
//! unvalidated context return [`Error::Context`] instead of guessing.

use codeinsights_bitbucket::EndpointType;
use codeinsights_core::{CompletedBuild, DisplayUrls, Error, Job, Result, Run};
use tracing::{debug, error};

use crate::scm::{BitbucketSource, ScmFacade};

/// Immutable identity snapshot of a build: owning job, optional run, and
/// the head commit the build ran against.
pub struct InsightsContext<'a> {
    job: &'a Job,
    run: Option<&'a Run>,
    urls: &'a dyn DisplayUrls,
    scm: &'a dyn ScmFacade,
    sha: Option<String>,
}

impl<'a> InsightsContext<'a> {
    /// Build a context for a finished run.
    ///
    /// The head SHA is resolved from the run's recorded revision, falling
    /// back to the job's head revision when the run carries none.
    #[must_use]
    pub fn from_run(
        build: &'a CompletedBuild,
        urls: &'a dyn DisplayUrls,
        scm: &'a dyn ScmFacade,
    ) -> Self {
        let sha = resolve_run_sha(scm, &build.job, &build.run)
            .or_else(|| resolve_head_sha(scm, &build.job));
        Self {
            job: &build.job,
            run: Some(&build.run),
            urls,
            scm,
            sha,
        }
    }

    /// Build a context for a job without a specific run, resolving the head
    /// revision of the job's tracked ref.
    #[must_use]
    pub fn from_job(job: &'a Job, urls: &'a dyn DisplayUrls, scm: &'a dyn ScmFacade) -> Self {
        let sha = resolve_head_sha(scm, job);
        Self {
            job,
            run: None,
            urls,
            scm,
            sha,
        }
    }

    /// The job this context was built for.
    #[must_use]
    pub fn job(&self) -> &Job {
        self.job
    }

    /// Root URL of the CI instance.
    #[must_use]
    pub fn root_url(&self) -> String {
        self.urls.root()
    }

    /// URL of the run's summary page; `None` for job-level contexts.
    #[must_use]
    pub fn run_url(&self) -> Option<String> {
        self.run.map(|run| self.urls.run_url(self.job, run))
    }

    /// The Bitbucket source configured for the job, if any.
    #[must_use]
    pub fn source(&self) -> Option<BitbucketSource> {
        self.scm.find_source(self.job)
    }

    /// Workspace owning the source repository, if a source is configured.
    #[must_use]
    pub fn owner(&self) -> Option<String> {
        self.source().map(|source| source.owner)
    }

    /// Slug of the source repository.
    ///
    /// Check [`Self::is_valid`] first; this fails when the job has no
    /// Bitbucket source.
    pub fn repository(&self) -> Result<String> {
        self.source()
            .map(|source| source.repository)
            .ok_or_else(|| {
                Error::context(format!(
                    "no Bitbucket SCM source found for job: {}",
                    self.job.full_name
                ))
            })
    }

    /// Commit hash of the head the build ran against.
    ///
    /// Check [`Self::is_valid`] first; this fails when no SHA resolved.
    pub fn head_sha(&self) -> Result<&str> {
        self.sha.as_deref().ok_or_else(|| {
            Error::context(format!(
                "no head SHA found for job: {}",
                self.job.full_name
            ))
        })
    }

    /// Pre-publish gate: whether every property needed for publishing
    /// resolved and the endpoint supports Code Insights.
    ///
    /// Failures are reported as diagnostics, not errors; an invalid
    /// context simply means there is nothing to publish for this build.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        debug!(
            job = %self.job.full_name,
            "Resolving code insights parameters from the Bitbucket SCM source"
        );

        let Some(source) = self.source() else {
            error!(job = %self.job.full_name, "Job does not use a Bitbucket SCM source");
            return false;
        };

        if self.sha.is_none() {
            error!(repository = %source.full_name(), "No head SHA found");
            return false;
        }

        let endpoint = EndpointType::from_server_url(&source.server_url);
        if !endpoint.supports_code_insights() {
            error!(
                server_url = %source.server_url,
                "Bitbucket Data Center does not support code insights"
            );
            return false;
        }

        true
    }
}

fn resolve_run_sha(scm: &dyn ScmFacade, job: &Job, run: &Run) -> Option<String> {
    let source = scm.find_source(job)?;
    let revision = scm.find_run_revision(&source, run)?;
    scm.find_hash(&revision)
}

fn resolve_head_sha(scm: &dyn ScmFacade, job: &Job) -> Option<String> {
    let source = scm.find_source(job)?;
    let head = scm.find_head(job)?;
    let revision = scm.find_head_revision(&source, &head)?;
    scm.find_hash(&revision)
}
