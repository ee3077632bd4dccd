//! Host-platform build model.
//!
//! Thin snapshots of what the CI host knows about a finished build. The
//! host hands these to the completion hook; nothing here is fetched or
//! persisted by this workspace.

/// Stable identity of the pipeline that owns a run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Job {
    /// Fully qualified job name, e.g. `acme/widget/main`.
    pub full_name: String,
    /// Stable URL path of the job relative to the CI root, e.g. `job/my-app/`.
    ///
    /// Report ids are derived from this path, so it must not change between
    /// builds of the same job.
    pub url_path: String,
}

impl Job {
    /// Create a job identity from its name and stable URL path.
    #[must_use]
    pub fn new(full_name: impl Into<String>, url_path: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
            url_path: url_path.into(),
        }
    }
}

/// One execution of a [`Job`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Run {
    /// Build number within the job, starting at 1.
    pub number: u64,
}

impl Run {
    /// Create a run identity.
    #[must_use]
    pub const fn new(number: u64) -> Self {
        Self { number }
    }
}

/// Aggregated test results attached to a finished run.
#[derive(Clone, Debug, PartialEq)]
pub struct TestSummary {
    /// Human-readable title of the aggregate, e.g. `Test Result`.
    pub title: String,
    /// URL of the test result page, relative to the CI root.
    pub url: String,
    /// Total number of test cases.
    pub total: u64,
    /// Number of skipped test cases.
    pub skipped: u64,
    /// Number of failed test cases.
    pub failed: u64,
    /// Number of passed test cases.
    pub passed: u64,
    /// Wall-clock duration of the test run, in seconds.
    pub duration_secs: f64,
}

/// Snapshot of a finished build handed to the completion hook.
#[derive(Clone, Debug)]
pub struct CompletedBuild {
    /// The job this build belongs to.
    pub job: Job,
    /// The run that just completed.
    pub run: Run,
    /// Test aggregate, when the build recorded one.
    pub tests: Option<TestSummary>,
}

impl CompletedBuild {
    /// Create a build snapshot without a test aggregate.
    #[must_use]
    pub const fn new(job: Job, run: Run) -> Self {
        Self {
            job,
            run,
            tests: None,
        }
    }

    /// Attach a test aggregate to the snapshot.
    #[must_use]
    pub fn with_tests(mut self, tests: TestSummary) -> Self {
        self.tests = Some(tests);
        self
    }
}
