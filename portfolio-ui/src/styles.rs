#![cfg(target_arch = "wasm32")]

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Node};

const STYLE_TAG_SELECTOR: &str = "style[data-portfolio-ui]";

/// Default page CSS. Colours are exposed as custom properties so a host page can retheme.
pub const DEFAULT_STYLES: &str = r#"
:root {
  --portfolio-font-family: 'Inter', system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
  --portfolio-bg-top: #0f1517;
  --portfolio-bg-bottom: #1b2427;
  --portfolio-sage: #9dbf9a;
  --portfolio-sand: #e6d5b8;
  --portfolio-coral: #f3a38c;
  --portfolio-text: #f4f4f5;
  --portfolio-muted: #a1a1aa;
  --portfolio-card-bg: rgba(24, 24, 27, 0.5);
  --portfolio-card-border: rgba(255, 255, 255, 0.1);
  --portfolio-active-ring: #6ee7b7;
  --portfolio-radius: 16px;
}

.portfolio-root {
  min-height: 100vh;
  font-family: var(--portfolio-font-family);
  color: var(--portfolio-text);
  background:
    radial-gradient(900px 500px at 80% -10%, rgba(157, 190, 154, 0.18), transparent 60%),
    radial-gradient(700px 420px at -20% 110%, rgba(243, 163, 140, 0.15), transparent 60%),
    linear-gradient(180deg, var(--portfolio-bg-top) 0%, var(--portfolio-bg-bottom) 100%);
}

.portfolio-nav {
  position: sticky;
  top: 0;
  z-index: 40;
  display: flex;
  justify-content: space-between;
  align-items: center;
  padding: 12px 24px;
  border-bottom: 1px solid var(--portfolio-card-border);
  background: rgba(9, 9, 11, 0.6);
  backdrop-filter: blur(8px);
}

.portfolio-nav a {
  color: inherit;
  text-decoration: none;
  padding: 8px 12px;
  border-radius: 8px;
  font-size: 14px;
}

.portfolio-nav a:hover {
  background: rgba(255, 255, 255, 0.08);
}

.portfolio-nav .nav-brand {
  font-weight: 600;
  font-size: 18px;
}

.portfolio-section,
.portfolio-hero {
  max-width: 72rem;
  margin: 0 auto;
  padding: 64px 16px;
  scroll-margin-top: 96px;
}

.portfolio-hero {
  display: grid;
  grid-template-columns: 1.2fr 0.8fr;
  gap: 32px;
  align-items: center;
}

.gradient-heading {
  font-weight: 800;
  background: linear-gradient(90deg, var(--portfolio-sage), var(--portfolio-sand), var(--portfolio-coral));
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

.portfolio-hero h1 {
  font-size: 48px;
  margin: 0 0 16px;
}

.section-kicker {
  font-size: 12px;
  letter-spacing: 0.2em;
  text-transform: uppercase;
  color: var(--portfolio-muted);
  margin: 0 0 8px;
}

.portfolio-section h2 {
  font-size: 36px;
  margin: 0 0 24px;
}

.hero-actions {
  display: flex;
  flex-wrap: wrap;
  gap: 12px;
}

.hero-action {
  display: inline-flex;
  align-items: center;
  gap: 8px;
  border-radius: 12px;
  border: 1px solid var(--portfolio-card-border);
  padding: 8px 16px;
  color: #fff;
  text-decoration: none;
  background: linear-gradient(90deg, rgba(157, 190, 154, 0.25), rgba(243, 163, 140, 0.25));
}

.hero-location {
  margin-top: 16px;
  font-size: 14px;
  color: var(--portfolio-muted);
}

.hero-avatar {
  justify-self: center;
  width: 208px;
  height: 208px;
  border-radius: var(--portfolio-radius);
  border: 1px solid rgba(255, 255, 255, 0.15);
  overflow: hidden;
}

.hero-avatar img {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.card {
  border-radius: var(--portfolio-radius);
  border: 1px solid var(--portfolio-card-border);
  background: var(--portfolio-card-bg);
  padding: 20px;
  box-shadow: 0 8px 30px -12px rgba(99, 102, 241, 0.35);
  backdrop-filter: blur(8px);
}

.card-grid {
  display: grid;
  gap: 24px;
  grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
}

.card-header {
  display: flex;
  justify-content: space-between;
  align-items: flex-start;
  gap: 12px;
}

.card h3 {
  margin: 0;
  font-size: 20px;
}

.card-subtitle {
  font-size: 14px;
  color: var(--portfolio-muted);
  margin: 4px 0 0;
}

.pill {
  display: inline-flex;
  align-items: center;
  border-radius: 999px;
  border: 1px solid var(--portfolio-card-border);
  background: rgba(255, 255, 255, 0.05);
  padding: 4px 12px;
  margin: 0 8px 8px 0;
  font-size: 14px;
}

.project-links a {
  color: inherit;
  margin-right: 12px;
  font-size: 14px;
}

.timeline-widget-header {
  display: flex;
  justify-content: space-between;
  margin-bottom: 16px;
  font-weight: 600;
}

.timeline-hint {
  font-weight: 400;
  font-size: 14px;
  color: var(--portfolio-muted);
}

.timeline-strip {
  display: flex;
  gap: 24px;
  overflow-x: auto;
  scroll-snap-type: x mandatory;
  padding-bottom: 16px;
  outline: none;
}

.timeline-item {
  flex-shrink: 0;
  width: 16rem;
  scroll-snap-align: start;
  text-align: left;
  color: inherit;
  font: inherit;
  cursor: pointer;
  border-radius: var(--portfolio-radius);
  border: 1px solid var(--portfolio-card-border);
  background: var(--portfolio-card-bg);
  padding: 16px;
  transition: transform 0.15s ease, background 0.15s ease;
}

.timeline-item:hover {
  transform: translateY(-4px);
  background: rgba(24, 24, 27, 0.9);
}

.timeline-item.is-active {
  box-shadow: 0 0 0 2px var(--portfolio-active-ring);
}

.timeline-item-category,
.timeline-item-badge {
  font-size: 12px;
  color: var(--portfolio-muted);
}

.timeline-item-title {
  font-weight: 600;
  margin: 4px 0;
}

.timeline-detail {
  margin-top: 16px;
  border-radius: var(--portfolio-radius);
  border: 1px solid var(--portfolio-card-border);
  padding: 20px;
  background: linear-gradient(135deg, rgba(157, 190, 154, 0.12), rgba(243, 163, 140, 0.12));
  animation: timeline-detail-in 0.25s ease;
}

.timeline-detail-category {
  font-size: 14px;
  text-transform: uppercase;
  letter-spacing: 0.1em;
  color: var(--portfolio-active-ring);
}

.timeline-detail-title {
  margin-top: 4px;
  font-size: 18px;
  font-weight: 600;
}

.timeline-empty,
.timeline-error {
  color: var(--portfolio-muted);
}

.portfolio-footer {
  border-top: 1px solid var(--portfolio-card-border);
  padding: 32px 16px;
  display: flex;
  justify-content: space-between;
  max-width: 72rem;
  margin: 0 auto;
  font-size: 14px;
}

.portfolio-footer a {
  color: inherit;
}

@keyframes timeline-detail-in {
  from { opacity: 0; transform: translateY(8px); }
  to { opacity: 1; transform: translateY(0); }
}

@media (max-width: 768px) {
  .portfolio-hero {
    grid-template-columns: 1fr;
  }

  .portfolio-nav .nav-links {
    display: none;
  }

  .portfolio-footer {
    flex-direction: column;
    align-items: center;
    gap: 12px;
  }
}
"#;

pub fn ensure_styles(document: &Document) -> Result<(), JsValue> {
    if document.query_selector(STYLE_TAG_SELECTOR)?.is_some() {
        return Ok(());
    }

    let head = document
        .head()
        .ok_or_else(|| JsValue::from_str("Document has no <head> element"))?;

    let style_el = document.create_element("style")?;
    style_el.set_attribute("data-portfolio-ui", "v1")?;
    style_el.set_text_content(Some(DEFAULT_STYLES));
    head.append_child(&style_el.clone().dyn_into::<Node>()?)?;

    Ok(())
}
