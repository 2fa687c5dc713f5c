//! Bundled-asset-or-public-path resolution for the avatar and résumé.
//!
//! A bundled asset (fingerprinted by the site build) wins whenever the build
//! reports one; otherwise the file is expected under the public base path.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "/";
pub const AVATAR_BUNDLED_NAME: &str = "headshot.jpg";
pub const AVATAR_PUBLIC_NAME: &str = "avatar.jpg";
pub const RESUME_NAME: &str = "resume.pdf";

/// Assets known to the site build, as handed over from JavaScript (`baseUrl`, `bundled`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct AssetManifest {
    /// Public base path of the deployment, e.g. `/portfolio/` on a project page.
    #[serde(default, alias = "base_url")]
    pub base_url: Option<String>,
    /// File name -> content URL of each bundled asset.
    #[serde(default)]
    pub bundled: BTreeMap<String, String>,
}

impl AssetManifest {
    pub fn base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .filter(|base| !base.is_empty())
            .unwrap_or(DEFAULT_BASE_URL)
    }
}

/// URLs the page links to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageAssets {
    pub avatar_src: String,
    pub resume_href: String,
}

impl Default for PageAssets {
    fn default() -> Self {
        resolve_page_assets(&AssetManifest::default())
    }
}

/// Join a file name onto the public base. The base is treated as a directory.
pub fn public_asset_url(base_url: &str, name: &str) -> String {
    let name = name.trim_start_matches('/');
    if base_url.ends_with('/') {
        format!("{base_url}{name}")
    } else {
        format!("{base_url}/{name}")
    }
}

pub fn resolve_asset(manifest: &AssetManifest, bundled_name: &str, public_name: &str) -> String {
    match manifest.bundled.get(bundled_name) {
        Some(url) if !url.is_empty() => url.clone(),
        _ => public_asset_url(manifest.base_url(), public_name),
    }
}

pub fn resolve_page_assets(manifest: &AssetManifest) -> PageAssets {
    PageAssets {
        avatar_src: resolve_asset(manifest, AVATAR_BUNDLED_NAME, AVATAR_PUBLIC_NAME),
        resume_href: resolve_asset(manifest, RESUME_NAME, RESUME_NAME),
    }
}
