//! Bitbucket Cloud integration for codeinsights.
//!
//! Contains the Code Insights wire model (reports and annotations,
//! serialized to the exact field names and enum tokens of the
//! [reports REST API](https://developer.atlassian.com/cloud/bitbucket/rest/api-group-reports/)),
//! endpoint classification for configured server URLs, and the
//! authenticated HTTP client used to upsert reports against a commit.

pub mod annotation;
pub mod client;
pub mod endpoint;
pub mod report;

pub use annotation::{Annotation, AnnotationResult, AnnotationType, Severity};
pub use client::{BitbucketClient, Credentials, InsightsApi};
pub use endpoint::EndpointType;
pub use report::{Report, ReportData, ReportDataType, ReportResult, ReportType};
