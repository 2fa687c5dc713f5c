//! Framework-neutral WASM <-> JavaScript bridge for the portfolio timeline.

use portfolio_content::{resolve_page_assets, AssetManifest};
use portfolio_core::{PortfolioContent, Timeline, TimelineError, TimelineSelection};
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

/// Resolve the avatar and résumé URLs, preferring bundled assets over public paths.
#[wasm_bindgen(js_name = resolveAssets)]
pub fn resolve_assets(manifest: Option<JsValue>) -> Result<JsValue, JsValue> {
    let manifest = match manifest {
        Some(js_manifest) if !js_manifest.is_undefined() && !js_manifest.is_null() => {
            from_value::<AssetManifest>(js_manifest)
                .map_err(|err| JsValue::from_str(&format!("Could not read asset manifest: {err}")))?
        }
        _ => AssetManifest::default(),
    };

    to_value(&resolve_page_assets(&manifest))
        .map_err(|err| JsValue::from_str(&format!("Could not serialize assets: {err}")))
}

/// Build the ordered timeline from a JS content object.
#[wasm_bindgen(js_name = buildTimeline)]
pub fn build_timeline(content: JsValue) -> Result<JsValue, JsValue> {
    install_panic_hook();

    let content = read_content(Some(content))?;
    let timeline = content.timeline().map_err(to_js_error)?;

    to_value(&timeline)
        .map_err(|err| JsValue::from_str(&format!("Could not serialize timeline: {err}")))
}

/// A built timeline together with its active entry.
///
/// Each handle owns its own selection, so several widgets on a page stay independent.
#[wasm_bindgen]
pub struct TimelineHandle {
    timeline: Timeline,
    selection: TimelineSelection,
}

#[wasm_bindgen]
impl TimelineHandle {
    /// Build from a JS content object, or from the bundled content when omitted.
    #[wasm_bindgen(constructor)]
    pub fn new(content: Option<JsValue>) -> Result<TimelineHandle, JsValue> {
        install_panic_hook();

        let content = read_content(content)?;
        let timeline = content.timeline().map_err(to_js_error)?;
        let selection = timeline.latest_selection().map_err(to_js_error)?;
        Ok(Self {
            timeline,
            selection,
        })
    }

    #[wasm_bindgen(getter)]
    pub fn length(&self) -> usize {
        self.timeline.len()
    }

    #[wasm_bindgen(getter, js_name = activeIndex)]
    pub fn active_index(&self) -> usize {
        self.selection.index()
    }

    pub fn entries(&self) -> Result<JsValue, JsValue> {
        to_value(&self.timeline)
            .map_err(|err| JsValue::from_str(&format!("Could not serialize timeline: {err}")))
    }

    pub fn active(&self) -> Result<JsValue, JsValue> {
        to_value(&self.selection.active(&self.timeline))
            .map_err(|err| JsValue::from_str(&format!("Could not serialize entry: {err}")))
    }

    /// Select an entry. Negative or out-of-range indexes throw and keep the current selection.
    pub fn select(&mut self, index: i32) -> Result<(), JsValue> {
        self.selection
            .select_signed(i64::from(index))
            .map_err(to_js_error)
    }
}

fn read_content(content: Option<JsValue>) -> Result<PortfolioContent, JsValue> {
    match content.filter(|value| !value.is_undefined() && !value.is_null()) {
        Some(value) => {
            let value = from_value::<serde_json::Value>(value)
                .map_err(|err| JsValue::from_str(&format!("Could not read content JSON: {err}")))?;
            portfolio_content::load_content_value(&value).map_err(to_js_error)
        }
        None => portfolio_content::default_content().map_err(to_js_error),
    }
}

fn install_panic_hook() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();
}

fn to_js_error(err: TimelineError) -> JsValue {
    JsValue::from_str(&format!("Timeline error: {err}"))
}
