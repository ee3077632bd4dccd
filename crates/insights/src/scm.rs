//! Read-only access to the host's source-control metadata.
//!
//! The host platform knows which Bitbucket repository a job builds and
//! which revision a run checked out; this module is the seam it exposes
//! that knowledge through. Every lookup returns `Option` — a missing link
//! is normal (wrong SCM kind, revision not recorded yet) and only becomes
//! a problem at the context validity gate.

use codeinsights_bitbucket::Credentials;
use codeinsights_core::{Job, Run};

/// Bitbucket source configuration attached to a job.
#[derive(Clone, Debug)]
pub struct BitbucketSource {
    /// Configured server URL, e.g. `https://bitbucket.org`.
    pub server_url: String,
    /// Workspace (repository owner) the repository lives in.
    pub owner: String,
    /// Repository slug within the workspace.
    pub repository: String,
    /// Credentials bound to this source, when configured.
    pub credentials: Option<Credentials>,
}

impl BitbucketSource {
    /// Full repository name, `owner/slug`.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.repository)
    }
}

/// A branch or tag pointer tracked by a job.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScmHead {
    /// Ref name, e.g. `main`.
    pub name: String,
}

/// A resolved revision of a head.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScmRevision {
    /// Commit hash, when the revision kind carries one.
    pub hash: Option<String>,
}

/// Facade over the host's source-control metadata.
pub trait ScmFacade: Send + Sync {
    /// The Bitbucket source configured for a job, if the job uses one.
    fn find_source(&self, job: &Job) -> Option<BitbucketSource>;

    /// The head (branch/tag) a job tracks.
    fn find_head(&self, job: &Job) -> Option<ScmHead>;

    /// The revision a specific run was built from.
    fn find_run_revision(&self, source: &BitbucketSource, run: &Run) -> Option<ScmRevision>;

    /// The current revision of a head.
    fn find_head_revision(&self, source: &BitbucketSource, head: &ScmHead) -> Option<ScmRevision>;

    /// The commit hash of a revision, when it carries one.
    fn find_hash(&self, revision: &ScmRevision) -> Option<String> {
        revision.hash.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_name_joins_owner_and_slug() {
        let source = BitbucketSource {
            server_url: "https://bitbucket.org".into(),
            owner: "acme".into(),
            repository: "widget".into(),
            credentials: None,
        };
        assert_eq!(source.full_name(), "acme/widget");
    }
}
