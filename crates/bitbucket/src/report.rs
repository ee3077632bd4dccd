//! Code Insights report wire model.
//!
//! Field names and enum spellings are the bit-exact wire contract of the
//! Bitbucket Cloud reports API. Timestamps go out as numeric
//! nanosecond-precision values.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::annotation::Annotation;

/// Kind of a Code Insights report, shown as a category in the commit UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ReportType {
    /// Test result summary.
    Test,
    /// Security scan findings.
    Security,
    /// Code coverage summary.
    Coverage,
    /// Bug detection findings.
    Bug,
}

impl ReportType {
    /// Wire token for this kind, also used in external report ids.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Test => "TEST",
            Self::Security => "SECURITY",
            Self::Coverage => "COVERAGE",
            Self::Bug => "BUG",
        }
    }
}

impl std::fmt::Display for ReportType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Overall result of a report, rendered as a pass/fail badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ReportResult {
    /// Everything the report covers succeeded.
    Passed,
    /// At least one covered item failed.
    Failed,
    /// The producing process has not finished yet.
    Pending,
}

/// How a [`ReportData`] value is rendered in the commit UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ReportDataType {
    /// JSON boolean, displayed as `Yes` or `No`.
    Boolean,
    /// JSON number holding a Unix timestamp in milliseconds, displayed as a
    /// relative date when less than a week old, absolute otherwise.
    Date,
    /// JSON number in milliseconds, displayed as a human readable duration.
    Duration,
    /// JSON object `{"text": ..., "href": ...}`, displayed as a clickable
    /// link.
    Link,
    /// JSON number; large values are abbreviated (e.g. `14.3k`).
    Number,
    /// JSON number between 0 and 100, displayed with a percent sign.
    Percentage,
    /// JSON string, displayed as-is.
    Text,
}

/// One key/value row in the report's summary table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReportData {
    /// Rendering rule for `value`.
    #[serde(rename = "type")]
    pub data_type: ReportDataType,
    /// Row label.
    pub title: String,
    /// Row value, typed per `data_type`.
    pub value: Value,
}

impl ReportData {
    /// Create a data row.
    #[must_use]
    pub fn new(
        data_type: ReportDataType,
        title: impl Into<String>,
        value: impl Into<Value>,
    ) -> Self {
        Self {
            data_type,
            title: title.into(),
            value: value.into(),
        }
    }
}

/// A Code Insights report attached to a commit.
///
/// Built fresh per publish attempt; the external service is the system of
/// record. Annotations are a separate sub-resource and are never serialized
/// with the report body.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Report {
    /// Entity discriminator, always `report`.
    #[serde(rename = "type")]
    pub entity_type: String,
    /// Caller-chosen id the report is addressed by.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    /// Server-assigned id, present on responses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<Uuid>,
    /// Overall pass/fail badge.
    pub result: ReportResult,
    /// Deep link back to the CI run or result page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Whether `link` is shown in the commit UI.
    pub remote_link_enabled: bool,
    /// Logo displayed next to the report title.
    #[serde(rename = "logo_url", skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    /// Report category.
    pub report_type: ReportType,
    /// Report title shown in the commit UI.
    pub title: String,
    /// Free-text summary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// Ordered summary-table rows.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub data: Vec<ReportData>,
    /// Creation timestamp, nanosecond-precision numeric on the wire.
    #[serde(
        default,
        with = "chrono::serde::ts_nanoseconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_on: Option<DateTime<Utc>>,
    /// Last-update timestamp, nanosecond-precision numeric on the wire.
    #[serde(
        default,
        with = "chrono::serde::ts_nanoseconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_on: Option<DateTime<Utc>>,
    /// Per-file findings, published separately from the report body.
    #[serde(skip)]
    pub annotations: Vec<Annotation>,
}

impl Report {
    /// Create an empty report of the given kind.
    ///
    /// Result starts as [`ReportResult::Pending`]; builders set the final
    /// result once they know it.
    #[must_use]
    pub fn new(report_type: ReportType, title: impl Into<String>) -> Self {
        Self {
            entity_type: "report".to_string(),
            external_id: None,
            uuid: None,
            result: ReportResult::Pending,
            link: None,
            remote_link_enabled: false,
            logo: None,
            report_type,
            title: title.into(),
            details: None,
            data: Vec::new(),
            created_on: None,
            updated_on: None,
            annotations: Vec::new(),
        }
    }
}
