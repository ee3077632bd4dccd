//! Per-file findings attached to a Code Insights report.
//!
//! Annotations are a sub-resource of a report on the Bitbucket side and are
//! published separately from the report body. The in-tree test report
//! builder does not emit any; the model is part of the wire contract for
//! builders that do.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Category of a finding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AnnotationType {
    /// A security vulnerability.
    Vulnerability,
    /// A maintainability issue.
    CodeSmell,
    /// A functional defect.
    Bug,
}

/// Severity of a finding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    /// Informational.
    Low,
    /// Should be looked at.
    Medium,
    /// Needs fixing.
    High,
    /// Blocks the change.
    Critical,
}

/// Outcome of the check behind a finding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AnnotationResult {
    /// The check passed.
    Passed,
    /// The check failed.
    Failed,
    /// The finding was suppressed.
    Ignored,
    /// The check did not run.
    Skipped,
}

/// One per-file, per-line finding.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Annotation {
    /// Entity discriminator, `report_annotation` on the wire.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<String>,
    /// Caller-chosen id the annotation is addressed by.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    /// Server-assigned id, present on responses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<Uuid>,
    /// Finding category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotation_type: Option<AnnotationType>,
    /// Path of the file the finding is in, relative to the repository root.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// 1-based line the finding points at.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
    /// Short title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// One-line summary shown inline.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Longer description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// Outcome of the check behind the finding.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<AnnotationResult>,
    /// Severity of the finding.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,
    /// Deep link to the finding in the producing tool.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
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
}
