//! Release metadata check against the GitHub releases API

use crate::error::{Error, Result};
use semver::Version;
use serde::Deserialize;
use std::time::Duration;
use url::Url;

const DEFAULT_RELEASE_URL: &str =
    "https://api.github.com/repos/launchpad-dev/launchpad/releases/latest";

/// Environment override for the release endpoint, mainly for testing
/// against a local fixture server.
pub const RELEASE_URL_ENV: &str = "LAUNCHPAD_RELEASE_URL";

/// User agent sent with every launchpad HTTP request. GitHub rejects
/// anonymous requests without one.
pub const USER_AGENT: &str = "launchpad-cli";

const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// Latest-release descriptor as served by the releases endpoint.
/// `latest_version` is normalized (tag prefixes stripped) before anyone
/// outside this module sees it.
#[derive(Debug, Clone, Deserialize)]
pub struct VersionInfo {
    #[serde(rename = "tag_name")]
    pub latest_version: String,
    #[serde(rename = "html_url")]
    pub download_url: String,
    pub assets_url: String,
}

/// Outcome of a successful check. A check that could not complete is an
/// `Err`, never `UpToDate`.
#[derive(Debug, Clone)]
pub enum UpdateStatus {
    UpToDate,
    Available(VersionInfo),
}

/// Strip the release-tag prefixes this project has published under
/// ("cli-tool-v1.2.0", "v1.2.0").
pub fn normalize_tag(tag: &str) -> &str {
    let tag = tag.strip_prefix("cli-tool-").unwrap_or(tag);
    tag.strip_prefix('v').unwrap_or(tag)
}

/// True when `remote` is strictly newer than `current` under semver
/// precedence. Equal and older both mean no update.
pub fn is_newer(current: &str, remote: &str) -> Result<bool> {
    let current = Version::parse(current)
        .map_err(|e| Error::parse(format!("invalid current version '{current}': {e}")))?;
    let remote = Version::parse(remote)
        .map_err(|e| Error::parse(format!("invalid latest version '{remote}': {e}")))?;
    Ok(remote > current)
}

pub(crate) fn http_client() -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(HTTP_TIMEOUT)
        .build()
        .map_err(|e| Error::network("failed to build HTTP client", e))
}

fn release_url() -> Result<Url> {
    let raw =
        std::env::var(RELEASE_URL_ENV).unwrap_or_else(|_| DEFAULT_RELEASE_URL.to_string());
    Url::parse(&raw).map_err(|e| Error::parse(format!("invalid release URL '{raw}': {e}")))
}

/// Fetch the latest release and compare it against `current_version`.
pub async fn check_for_updates(current_version: &str) -> Result<UpdateStatus> {
    let client = http_client()?;
    let url = release_url()?;

    let response = client.get(url.clone()).send().await.map_err(|e| {
        Error::network(format!("failed to fetch release metadata from {url}"), e)
    })?;
    if !response.status().is_success() {
        return Err(Error::network_status(format!(
            "release endpoint {} returned HTTP {}",
            url,
            response.status()
        )));
    }
    let body = response
        .text()
        .await
        .map_err(|e| Error::network("failed to read release metadata", e))?;
    let mut info: VersionInfo = serde_json::from_str(&body)
        .map_err(|e| Error::parse(format!("failed to parse release metadata: {e}")))?;
    info.latest_version = normalize_tag(&info.latest_version).to_string();

    if is_newer(current_version, &info.latest_version)? {
        Ok(UpdateStatus::Available(info))
    } else {
        Ok(UpdateStatus::UpToDate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_known_prefixes() {
        assert_eq!(normalize_tag("cli-tool-v1.2.0"), "1.2.0");
        assert_eq!(normalize_tag("v1.2.0"), "1.2.0");
        assert_eq!(normalize_tag("1.2.0"), "1.2.0");
    }

    #[test]
    fn test_newer_version_is_detected() {
        assert!(is_newer("1.0.0", "1.2.0").unwrap());
        assert!(is_newer("1.0.0", "2.0.0-rc.1").unwrap());
    }

    #[test]
    fn test_equal_and_older_are_not_updates() {
        assert!(!is_newer("1.0.0", "1.0.0").unwrap());
        assert!(!is_newer("1.2.0", "1.0.0").unwrap());
    }

    #[test]
    fn test_garbage_version_is_a_parse_error() {
        assert!(matches!(
            is_newer("1.0.0", "not-a-version"),
            Err(Error::Parse(_))
        ));
        assert!(matches!(is_newer("", "1.0.0"), Err(Error::Parse(_))));
    }

    #[test]
    fn test_release_payload_shape() {
        let info: VersionInfo = serde_json::from_str(
            r#"{
                "tag_name": "cli-tool-v1.3.0",
                "html_url": "https://github.com/launchpad-dev/launchpad/releases/tag/v1.3.0",
                "assets_url": "https://api.github.com/repos/launchpad-dev/launchpad/releases/1/assets",
                "name": "ignored",
                "prerelease": false
            }"#,
        )
        .unwrap();
        assert_eq!(info.latest_version, "cli-tool-v1.3.0");
        assert_eq!(normalize_tag(&info.latest_version), "1.3.0");
        assert!(info.download_url.contains("/releases/tag/"));
    }
}
