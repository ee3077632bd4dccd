//! Browsable URL resolution for the host CI instance.

use crate::build::{Job, Run};

/// Resolves browsable URLs for the CI instance.
///
/// Implemented by the host platform; reports deep-link back to the run and
/// to result pages through these URLs.
pub trait DisplayUrls: Send + Sync {
    /// Root URL of the CI instance, e.g. `https://ci.example.com/`.
    fn root(&self) -> String;

    /// URL of a run's summary page,
    /// e.g. `https://ci.example.com/job/widget/42/`.
    fn run_url(&self, job: &Job, run: &Run) -> String;
}
