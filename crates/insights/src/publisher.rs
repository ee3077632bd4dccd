//! Addresses and transmits reports for one build-completion cycle.
//!
//! The publisher binds one API client to the build's Bitbucket source for
//! the duration of the cycle; when the job has no source, publishing is a
//! silent no-op. Reports are upserted (PUT) at a deterministic per-job,
//! per-kind path, so the next build of the same job overwrites the
//! previous report of the same kind.

use codeinsights_bitbucket::{BitbucketClient, InsightsApi, Report, ReportType};
use codeinsights_core::{Error, Result};

use crate::context::InsightsContext;

/// Resource path template of the reports API, expanded per publish.
const REPORT_PATH_TEMPLATE: &str =
    "/2.0/repositories/{workspace}/{repo_slug}/commit/{commit}/reports/{reportId}";

/// Publishes reports for a single validated [`InsightsContext`].
pub struct Publisher<'a> {
    context: &'a InsightsContext<'a>,
    client: Option<Box<dyn InsightsApi>>,
}

impl<'a> Publisher<'a> {
    /// Create a publisher for a context, binding a client to the context's
    /// source. Without a source every publish is a no-op.
    #[must_use]
    pub fn new(context: &'a InsightsContext<'a>) -> Self {
        let client = context.source().map(|source| {
            Box::new(BitbucketClient::cloud(source.credentials)) as Box<dyn InsightsApi>
        });
        Self { context, client }
    }

    /// Create a publisher with an explicit client.
    #[must_use]
    pub fn with_client(context: &'a InsightsContext<'a>, client: Box<dyn InsightsApi>) -> Self {
        Self {
            context,
            client: Some(client),
        }
    }

    /// Publish one report against the context's commit.
    ///
    /// Assigns the report's external id before sending, so repeated
    /// publishes of the same (job, kind) pair land on the same resource.
    pub async fn publish(&self, report: &mut Report) -> Result<()> {
        let Some(client) = &self.client else {
            return Ok(());
        };

        let report_id = external_id(report.report_type, &self.context.job().url_path);
        report.external_id = Some(report_id.clone());

        let workspace = self.context.owner().ok_or_else(|| {
            Error::context(format!(
                "no Bitbucket SCM source found for job: {}",
                self.context.job().full_name
            ))
        })?;

        let path = expand_template(
            REPORT_PATH_TEMPLATE,
            &[
                ("workspace", &workspace),
                ("repo_slug", &self.context.repository()?),
                ("commit", self.context.head_sha()?),
                ("reportId", &report_id),
            ],
        );

        client.put_report(&path, report).await
    }
}

/// Deterministic, job-scoped report id: `<KIND>-<abs(hash32(job path))>`.
///
/// The 32-bit hash space means distinct jobs can collide; that is an
/// accepted limitation of the id scheme, not a uniqueness guarantee.
#[must_use]
pub fn external_id(kind: ReportType, job_url_path: &str) -> String {
    format!("{kind}-{}", hash32(job_url_path).unsigned_abs())
}

/// 31-multiplier rolling hash over UTF-16 code units, wrapping at 32 bits.
fn hash32(s: &str) -> i32 {
    s.encode_utf16()
        .fold(0i32, |hash, unit| hash.wrapping_mul(31).wrapping_add(i32::from(unit)))
}

/// Expand `{name}` variables in a URI template, percent-encoding values.
fn expand_template(template: &str, vars: &[(&str, &str)]) -> String {
    let mut expanded = template.to_string();
    for (name, value) in vars {
        expanded = expanded.replace(&format!("{{{name}}}"), &encode_segment(value));
    }
    expanded
}

/// Percent-encode a path segment; unreserved characters pass through.
fn encode_segment(value: &str) -> String {
    let mut encoded = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                encoded.push(byte as char);
            }
            _ => encoded.push_str(&format!("%{byte:02X}")),
        }
    }
    encoded
}
