//! Release checking and self-update

pub mod checker;
pub mod self_update;

pub use checker::{check_for_updates, is_newer, normalize_tag, UpdateStatus, VersionInfo};
pub use self_update::{install, select_asset, ReleaseAsset};
