//! Deployment-variant classification for configured server URLs.
//!
//! Code Insights is a Bitbucket Cloud feature. Sources pointing at a
//! self-hosted Data Center install must be rejected before any publish is
//! attempted.

/// Deployment flavor behind a configured server URL.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EndpointType {
    /// bitbucket.org, the hosted service.
    Cloud,
    /// A self-hosted Bitbucket Data Center install.
    DataCenter,
}

impl EndpointType {
    /// Classify a configured server URL.
    ///
    /// Anything that is not recognizably bitbucket.org is treated as Data
    /// Center, including unparseable URLs.
    #[must_use]
    pub fn from_server_url(server_url: &str) -> Self {
        match host_of(server_url) {
            Some(host)
                if host.eq_ignore_ascii_case("bitbucket.org")
                    || host.eq_ignore_ascii_case("api.bitbucket.org")
                    || host.eq_ignore_ascii_case("www.bitbucket.org") =>
            {
                Self::Cloud
            }
            _ => Self::DataCenter,
        }
    }

    /// Whether this endpoint supports Code Insights.
    #[must_use]
    pub const fn supports_code_insights(self) -> bool {
        matches!(self, Self::Cloud)
    }
}

/// Extract the host part of a URL, without scheme, userinfo, port or path.
fn host_of(url: &str) -> Option<&str> {
    let rest = url.split_once("://").map_or(url, |(_, rest)| rest);
    let authority = rest.split(['/', '?', '#']).next()?;
    let host = authority.rsplit_once('@').map_or(authority, |(_, h)| h);
    let host = host.split(':').next()?;
    if host.is_empty() { None } else { Some(host) }
}
