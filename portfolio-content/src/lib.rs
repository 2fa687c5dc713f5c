//! Authored portfolio content, JSON loading and asset URL resolution.

mod assets;

pub use assets::{
    public_asset_url, resolve_asset, resolve_page_assets, AssetManifest, PageAssets,
    AVATAR_BUNDLED_NAME, AVATAR_PUBLIC_NAME, DEFAULT_BASE_URL, RESUME_NAME,
};

use portfolio_core::{PortfolioContent, Timeline, TimelineError};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

/// Content shipped with the site.
pub const BUNDLED_CONTENT: &str = include_str!("../data/portfolio.json");

/// Parse the bundled content.
pub fn default_content() -> Result<PortfolioContent, TimelineError> {
    load_content_str(BUNDLED_CONTENT)
}

/// Load content from a JSON string.
pub fn load_content_str(content_json: &str) -> Result<PortfolioContent, TimelineError> {
    let content: PortfolioContent =
        serde_json::from_str(content_json).map_err(|err| TimelineError::Parse(err.to_string()))?;
    log_loaded(&content);
    Ok(content)
}

/// Load content from an already parsed `serde_json::Value`.
pub fn load_content_value(content: &Value) -> Result<PortfolioContent, TimelineError> {
    let content = PortfolioContent::deserialize(content)
        .map_err(|err| TimelineError::Parse(err.to_string()))?;
    log_loaded(&content);
    Ok(content)
}

/// Load content from JSON and build its timeline in one step.
pub fn summarize_content_str(content_json: &str) -> Result<Timeline, TimelineError> {
    load_content_str(content_json)?.timeline()
}

fn log_loaded(content: &PortfolioContent) {
    debug!(
        education = content.education.len(),
        experience = content.experience.len(),
        extracurriculars = content.extracurriculars.len(),
        projects = content.projects.len(),
        "portfolio content loaded"
    );
}
