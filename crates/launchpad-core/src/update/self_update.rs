//! In-place binary replacement from a release asset

use crate::error::{Error, Result};
use crate::update::checker::{self, VersionInfo};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::Path;

/// One downloadable artifact attached to a release.
#[derive(Debug, Clone, Deserialize)]
pub struct ReleaseAsset {
    pub name: String,
    #[serde(rename = "browser_download_url")]
    pub download_url: String,
}

/// Pick the asset whose name mentions both `os` and `arch`
/// (case-insensitive substring match), falling back to the first
/// OS-only match when no asset names the architecture.
pub fn select_asset<'a>(
    assets: &'a [ReleaseAsset],
    os: &str,
    arch: &str,
) -> Option<&'a ReleaseAsset> {
    let os = os.to_lowercase();
    let arch = arch.to_lowercase();
    assets
        .iter()
        .find(|asset| {
            let name = asset.name.to_lowercase();
            name.contains(&os) && name.contains(&arch)
        })
        .or_else(|| {
            assets
                .iter()
                .find(|asset| asset.name.to_lowercase().contains(&os))
        })
}

async fn fetch_assets(client: &reqwest::Client, assets_url: &str) -> Result<Vec<ReleaseAsset>> {
    let response = client.get(assets_url).send().await.map_err(|e| {
        Error::network(format!("failed to fetch release assets from {assets_url}"), e)
    })?;
    if !response.status().is_success() {
        return Err(Error::network_status(format!(
            "assets endpoint returned HTTP {}",
            response.status()
        )));
    }
    let body = response
        .text()
        .await
        .map_err(|e| Error::network("failed to read release assets", e))?;
    serde_json::from_str(&body)
        .map_err(|e| Error::parse(format!("failed to parse release assets: {e}")))
}

/// Download the platform-matching binary for `info` and swap it over
/// the running executable.
///
/// The download is staged next to the executable so the final rename
/// never crosses filesystems. The old binary stays at `<exe>.old` until
/// the replacement has landed; if that last rename fails the original
/// is restored.
pub async fn install(info: &VersionInfo) -> Result<()> {
    let client = checker::http_client()?;
    let assets = fetch_assets(&client, &info.assets_url).await?;
    let asset = select_asset(&assets, env::consts::OS, env::consts::ARCH).ok_or_else(|| {
        Error::Network {
            context: format!(
                "no release asset matches {}-{}",
                env::consts::OS,
                env::consts::ARCH
            ),
            source: None,
        }
    })?;

    let bytes = download(&client, asset).await?;

    let exe = env::current_exe()
        .map_err(|e| Error::io("failed to locate the current executable", e))?;
    let staging = exe.with_extension("download");
    fs::write(&staging, &bytes)
        .map_err(|e| Error::io(format!("failed to write {}", staging.display()), e))?;
    make_executable(&staging)?;

    let backup = exe.with_extension("old");
    fs::rename(&exe, &backup)
        .map_err(|e| Error::io("failed to move the current executable aside", e))?;
    if let Err(e) = fs::rename(&staging, &exe) {
        let _ = fs::rename(&backup, &exe);
        return Err(Error::io("failed to install the new executable", e));
    }
    let _ = fs::remove_file(&backup);
    Ok(())
}

async fn download(client: &reqwest::Client, asset: &ReleaseAsset) -> Result<Vec<u8>> {
    let response = client
        .get(&asset.download_url)
        .send()
        .await
        .map_err(|e| Error::network(format!("failed to download {}", asset.name), e))?;
    if !response.status().is_success() {
        return Err(Error::network_status(format!(
            "download of {} returned HTTP {}",
            asset.name,
            response.status()
        )));
    }
    let bytes = response
        .bytes()
        .await
        .map_err(|e| Error::network(format!("failed to download {}", asset.name), e))?;
    Ok(bytes.to_vec())
}

#[cfg(unix)]
fn make_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o755))
        .map_err(|e| Error::io(format!("failed to mark {} executable", path.display()), e))
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> Result<()> {
    Ok(())
}
