//! Built-in builder: summarize a build's test results.

use codeinsights_bitbucket::{Report, ReportData, ReportDataType, ReportResult, ReportType};
use codeinsights_core::{CompletedBuild, Result, TestSummary};

use crate::builder::ReportBuilder;
use crate::context::InsightsContext;

/// Builds a TEST report from the build's test aggregate.
///
/// Produces nothing when the build recorded no tests. Zero-valued counters
/// are omitted from the summary table rather than shown as zero rows.
pub struct TestReportBuilder;

impl ReportBuilder for TestReportBuilder {
    fn name(&self) -> &'static str {
        "test"
    }

    fn build(
        &self,
        build: &CompletedBuild,
        context: &InsightsContext<'_>,
    ) -> Result<Option<Report>> {
        let Some(tests) = &build.tests else {
            return Ok(None);
        };
        if tests.total == 0 {
            return Ok(None);
        }

        let mut report = Report::new(ReportType::Test, &tests.title);
        report.link = Some(result_link(&context.root_url(), &tests.url));
        report.remote_link_enabled = true;
        report.data = build_data(tests);
        if tests.failed > 0 {
            report.details = Some("There are failed tests".to_string());
            report.result = ReportResult::Failed;
        } else {
            report.details = Some("Reports no tests failure".to_string());
            report.result = ReportResult::Passed;
        }

        Ok(Some(report))
    }
}

/// Root URL normalized to one trailing slash, then the relative result URL.
fn result_link(root_url: &str, relative: &str) -> String {
    let mut link = root_url.trim_end_matches('/').to_string();
    link.push('/');
    link.push_str(relative);
    link
}

fn build_data(tests: &TestSummary) -> Vec<ReportData> {
    let mut data = Vec::new();
    if tests.total != 0 {
        data.push(ReportData::new(
            ReportDataType::Number,
            "Number of test cases",
            tests.total,
        ));
    }
    if tests.skipped != 0 {
        data.push(ReportData::new(
            ReportDataType::Number,
            "Skipped Tests",
            tests.skipped,
        ));
    }
    if tests.failed != 0 {
        data.push(ReportData::new(
            ReportDataType::Number,
            "Failed Tests",
            tests.failed,
        ));
    }
    if tests.passed != 0 {
        data.push(ReportData::new(
            ReportDataType::Number,
            "Passed Tests",
            tests.passed,
        ));
    }
    if tests.duration_secs > 0.0 {
        // Whole seconds scaled to milliseconds; sub-second precision is
        // dropped to keep values stable with previously published reports.
        #[allow(clippy::cast_possible_truncation)]
        let millis = (tests.duration_secs as i64) * 1000;
        data.push(ReportData::new(
            ReportDataType::Duration,
            "Test Duration",
            millis,
        ));
    }
    data
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scm::{BitbucketSource, ScmFacade, ScmHead, ScmRevision};
    use codeinsights_core::{DisplayUrls, Job, Run};

    struct Urls;

    impl DisplayUrls for Urls {
        fn root(&self) -> String {
            // No trailing slash; the builder must add exactly one.
            "https://ci.example.com".into()
        }

        fn run_url(&self, job: &Job, run: &Run) -> String {
            format!("https://ci.example.com/{}{}/", job.url_path, run.number)
        }
    }

    struct Scm;

    impl ScmFacade for Scm {
        fn find_source(&self, _job: &Job) -> Option<BitbucketSource> {
            Some(BitbucketSource {
                server_url: "https://bitbucket.org".into(),
                owner: "acme".into(),
                repository: "widget".into(),
                credentials: None,
            })
        }

        fn find_head(&self, _job: &Job) -> Option<ScmHead> {
            Some(ScmHead { name: "main".into() })
        }

        fn find_run_revision(&self, _source: &BitbucketSource, _run: &Run) -> Option<ScmRevision> {
            Some(ScmRevision {
                hash: Some("a1b2c3".into()),
            })
        }

        fn find_head_revision(
            &self,
            _source: &BitbucketSource,
            _head: &ScmHead,
        ) -> Option<ScmRevision> {
            None
        }
    }

    fn build_with(tests: Option<TestSummary>) -> CompletedBuild {
        CompletedBuild {
            job: Job::new("acme/widget", "job/widget/"),
            run: Run::new(7),
            tests,
        }
    }

    fn summary(total: u64, skipped: u64, failed: u64, passed: u64, secs: f64) -> TestSummary {
        TestSummary {
            title: "Test Result".into(),
            url: "job/widget/7/testReport/".into(),
            total,
            skipped,
            failed,
            passed,
            duration_secs: secs,
        }
    }

    fn run_builder(build: &CompletedBuild) -> Option<Report> {
        let context = InsightsContext::from_run(build, &Urls, &Scm);
        TestReportBuilder.build(build, &context).unwrap()
    }

    #[test]
    fn no_report_without_tests() {
        assert!(run_builder(&build_with(None)).is_none());
    }

    #[test]
    fn no_report_for_empty_aggregate() {
        assert!(run_builder(&build_with(Some(summary(0, 0, 0, 0, 0.0)))).is_none());
    }

    #[test]
    fn passing_build_maps_to_passed_report() {
        let report = run_builder(&build_with(Some(summary(10, 1, 0, 9, 2.5)))).unwrap();

        assert_eq!(report.report_type, ReportType::Test);
        assert_eq!(report.result, ReportResult::Passed);
        assert_eq!(report.details.as_deref(), Some("Reports no tests failure"));
        assert!(report.remote_link_enabled);
        assert_eq!(
            report.link.as_deref(),
            Some("https://ci.example.com/job/widget/7/testReport/")
        );

        let rows: Vec<_> = report
            .data
            .iter()
            .map(|d| (d.title.as_str(), d.data_type, d.value.clone()))
            .collect();
        assert_eq!(
            rows,
            vec![
                ("Number of test cases", ReportDataType::Number, 10.into()),
                ("Skipped Tests", ReportDataType::Number, 1.into()),
                ("Passed Tests", ReportDataType::Number, 9.into()),
                // 2.5s truncates to 2s before scaling to milliseconds.
                ("Test Duration", ReportDataType::Duration, 2000.into()),
            ]
        );
    }

    #[test]
    fn failing_build_maps_to_failed_report() {
        let report = run_builder(&build_with(Some(summary(10, 1, 2, 7, 4.0)))).unwrap();

        assert_eq!(report.result, ReportResult::Failed);
        assert_eq!(report.details.as_deref(), Some("There are failed tests"));

        let titles: Vec<_> = report.data.iter().map(|d| d.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Number of test cases",
                "Skipped Tests",
                "Failed Tests",
                "Passed Tests",
                "Test Duration",
            ]
        );
    }

    #[test]
    fn zero_rows_are_omitted_not_zeroed() {
        let report = run_builder(&build_with(Some(summary(5, 0, 0, 5, 0.0)))).unwrap();

        let titles: Vec<_> = report.data.iter().map(|d| d.title.as_str()).collect();
        assert_eq!(titles, vec!["Number of test cases", "Passed Tests"]);
    }

    #[test]
    fn root_url_with_trailing_slash_is_not_doubled() {
        assert_eq!(
            result_link("https://ci.example.com/", "testReport/"),
            "https://ci.example.com/testReport/"
        );
        assert_eq!(
            result_link("https://ci.example.com", "testReport/"),
            "https://ci.example.com/testReport/"
        );
    }
}
