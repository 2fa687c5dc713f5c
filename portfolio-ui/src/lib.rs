//! Yew page for the portfolio, mounted into a host element from JavaScript.

#[cfg(target_arch = "wasm32")]
mod styles;

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use portfolio_core::{Timeline, TimelineSelection};

/// In-page anchors shown in the sticky navigation bar.
pub const NAV_ITEMS: [(&str, &str); 8] = [
    ("about", "About"),
    ("timeline", "Timeline"),
    ("education", "Education"),
    ("experience", "Experience"),
    ("extracurriculars", "Extracurriculars"),
    ("projects", "Projects"),
    ("passions", "Passions"),
    ("resume", "Résumé"),
];

/// Apply a keyboard key to the timeline selection. Returns whether the active entry changed.
pub fn step_selection(selection: &mut TimelineSelection, key: &str) -> bool {
    match key {
        "ArrowLeft" => selection.select_previous(),
        "ArrowRight" => selection.select_next(),
        "Home" => selection.select_first(),
        "End" => selection.select_last(),
        _ => false,
    }
}

/// Component key for a built timeline. Changes whenever the entry sequence
/// changes, so the strip restarts from the latest entry instead of keeping
/// an index into the old sequence.
pub fn timeline_key(timeline: &Timeline) -> String {
    let mut hasher = DefaultHasher::new();
    for entry in timeline.entries() {
        entry.category.hash(&mut hasher);
        entry.title.hash(&mut hasher);
        entry.start_date.hash(&mut hasher);
        entry.end_date.hash(&mut hasher);
    }
    format!("{}-{:x}", timeline.len(), hasher.finish())
}

pub fn footer_text(name: &str, year: i32) -> String {
    format!("© {year} {name}. All rights reserved.")
}

#[cfg(target_arch = "wasm32")]
mod wasm_ui {
    use std::rc::Rc;

    use crate::{footer_text, step_selection, styles, timeline_key, NAV_ITEMS};
    use chrono::{Datelike, Utc};
    use portfolio_content::{default_content, resolve_page_assets, AssetManifest, PageAssets};
    use portfolio_core::{
        EducationRecord, ExperienceRecord, ExtracurricularRecord, Passion, PortfolioContent,
        ProjectRecord, Timeline, TimelineEntry, TimelineError, TimelineSelection,
    };
    use serde_wasm_bindgen::from_value;
    use wasm_bindgen::prelude::*;
    use web_sys::{console, Document, Element, Window};
    use yew::prelude::*;

    #[derive(Properties, PartialEq)]
    pub struct PortfolioPageProps {
        pub content: Rc<PortfolioContent>,
        pub assets: PageAssets,
    }

    #[function_component(PortfolioPage)]
    fn portfolio_page(props: &PortfolioPageProps) -> Html {
        let content = &props.content;

        use_effect_with((), |_| {
            if let Some(window) = web_sys::window() {
                if let Some(document) = window.document() {
                    if let Err(err) = styles::ensure_styles(&document) {
                        console::error_1(&err);
                    }
                }
            }
            || ()
        });

        html! {
            <div id="top" class="portfolio-root">
                { render_nav(&content.profile.name) }
                { render_hero(content, &props.assets) }
                { render_section("about", "Overview", "About", html! {
                    <div class="card">
                        <p>{"Snapshot of my journey so far, from high school awards to building software and leading teams. Scroll for details, or jump via the top nav."}</p>
                    </div>
                }) }
                { render_section("timeline", "Interactive Timeline", "Highlights", html! {
                    <TimelineWidget content={content.clone()} />
                }) }
                { render_section("education", "Education", "Academics", html! {
                    <div class="card-grid">{ for content.education.iter().map(render_education) }</div>
                }) }
                { render_section("experience", "Professional Experience", "Work", html! {
                    <div class="card-grid">{ for content.experience.iter().map(render_experience) }</div>
                }) }
                { render_section("extracurriculars", "Extracurriculars", "Leadership & Teams", html! {
                    <div class="card-grid">{ for content.extracurriculars.iter().map(render_extracurricular) }</div>
                }) }
                { render_section("projects", "Projects", "Builds", html! {
                    <div class="card-grid">{ for content.projects.iter().map(render_project) }</div>
                }) }
                { render_section("passions", "Passions", "Life", html! {
                    <div class="card-grid">{ for content.passions.iter().map(render_passion) }</div>
                }) }
                { render_section("resume", "Résumé", "Download & quick facts", render_resume(content, &props.assets)) }
                { render_footer(content) }
            </div>
        }
    }

    #[derive(Properties, PartialEq)]
    pub struct TimelineWidgetProps {
        pub content: Rc<PortfolioContent>,
    }

    /// Builds the timeline once per content value and hands it to the strip.
    #[function_component(TimelineWidget)]
    fn timeline_widget(props: &TimelineWidgetProps) -> Html {
        let built = use_memo(props.content.clone(), |content| build_widget_state(content));

        use_effect_with(built.clone(), |built| {
            if let Err(err) = &**built {
                console::error_1(&JsValue::from_str(&format!("Timeline error: {err}")));
            }
            || ()
        });

        let body = match &*built {
            Ok((timeline, initial)) => html! {
                <TimelineStrip key={timeline_key(timeline)} timeline={timeline.clone()} initial={*initial} />
            },
            Err(TimelineError::EmptyTimeline) => html! {
                <p class="timeline-empty">{"No timeline entries yet."}</p>
            },
            Err(err) => html! {
                <p class="timeline-error">{ format!("Timeline unavailable: {err}") }</p>
            },
        };

        html! {
            <div class="card">
                <div class="timeline-widget-header">
                    <span>{"Interactive Timeline"}</span>
                    <span class="timeline-hint">{"Scroll · Click · ← →"}</span>
                </div>
                { body }
            </div>
        }
    }

    fn build_widget_state(
        content: &PortfolioContent,
    ) -> Result<(Rc<Timeline>, TimelineSelection), TimelineError> {
        let timeline = content.timeline()?;
        let selection = timeline.latest_selection()?;
        Ok((Rc::new(timeline), selection))
    }

    #[derive(Properties, PartialEq)]
    pub struct TimelineStripProps {
        pub timeline: Rc<Timeline>,
        pub initial: TimelineSelection,
    }

    /// Owns the selection for one widget instance.
    #[function_component(TimelineStrip)]
    fn timeline_strip(props: &TimelineStripProps) -> Html {
        let initial = props.initial;
        let selection = use_state(move || initial);

        let on_keydown = {
            let selection = selection.clone();
            Callback::from(move |event: KeyboardEvent| {
                let mut next = *selection;
                if step_selection(&mut next, &event.key()) {
                    event.prevent_default();
                    selection.set(next);
                }
            })
        };

        let items = props.timeline.entries().iter().enumerate().map(|(index, entry)| {
            let is_active = selection.is_active(index);
            let onclick = {
                let selection = selection.clone();
                Callback::from(move |_: MouseEvent| {
                    let mut next = *selection;
                    match next.select(index) {
                        Ok(()) => selection.set(next),
                        Err(err) => console::warn_1(&JsValue::from_str(&err.to_string())),
                    }
                })
            };
            render_timeline_item(entry, is_active, onclick)
        });

        html! {
            <div class="timeline-widget">
                <div
                    class="timeline-strip"
                    tabindex="0"
                    role="listbox"
                    aria-label="Timeline entries"
                    onkeydown={on_keydown}
                >
                    { for items }
                </div>
                {
                    selection
                        .active(&props.timeline)
                        .map(|entry| render_timeline_detail(selection.index(), entry))
                        .unwrap_or_default()
                }
            </div>
        }
    }

    fn render_timeline_item(entry: &TimelineEntry, is_active: bool, onclick: Callback<MouseEvent>) -> Html {
        html! {
            <button
                type="button"
                role="option"
                aria-selected={is_active.to_string()}
                class={classes!("timeline-item", is_active.then_some("is-active"))}
                data-category={entry.category.slug()}
                onclick={onclick}
            >
                <div class="timeline-item-category">{ entry.category.label() }</div>
                <div class="timeline-item-title">{ entry.title.clone() }</div>
                <div class="timeline-item-badge">{ entry.badge.clone() }</div>
            </button>
        }
    }

    fn render_timeline_detail(index: usize, entry: &TimelineEntry) -> Html {
        html! {
            <div key={index} class="timeline-detail" aria-live="polite">
                <div class="timeline-detail-category">{ entry.category.label() }</div>
                <div class="timeline-detail-title">{ entry.title.clone() }</div>
                <div class="card-subtitle">{ entry.badge.clone() }</div>
                <p>{ entry.detail.clone() }</p>
            </div>
        }
    }

    fn render_nav(name: &str) -> Html {
        html! {
            <nav class="portfolio-nav">
                <a href="#top" class="nav-brand">{ name.to_string() }</a>
                <div class="nav-links">
                    { for NAV_ITEMS.iter().map(|(id, label)| html! {
                        <a href={format!("#{id}")}>{ *label }</a>
                    }) }
                </div>
            </nav>
        }
    }

    fn render_hero(content: &PortfolioContent, assets: &PageAssets) -> Html {
        let profile = &content.profile;
        html! {
            <header class="portfolio-hero">
                <div>
                    <h1 class="gradient-heading">{ profile.name.clone() }</h1>
                    <p>{ profile.tagline.clone() }</p>
                    <div class="hero-actions">
                        { profile.email.as_ref().map(|email| html! {
                            <a class="hero-action" href={format!("mailto:{email}")}>{"Contact"}</a>
                        }).unwrap_or_default() }
                        { profile.github.as_ref().map(|github| html! {
                            <a class="hero-action" href={github.clone()} target="_blank" rel="noreferrer">{"GitHub"}</a>
                        }).unwrap_or_default() }
                        <a class="hero-action" href={assets.resume_href.clone()} download="" target="_blank" rel="noopener">
                            {"Download Résumé"}
                        </a>
                    </div>
                    <div class="hero-location">{ profile.location.clone() }</div>
                </div>
                <div class="hero-avatar">
                    <img src={assets.avatar_src.clone()} alt={format!("{} avatar", profile.name)} />
                </div>
            </header>
        }
    }

    fn render_section(id: &'static str, title: &'static str, kicker: &'static str, body: Html) -> Html {
        html! {
            <section id={id} class="portfolio-section">
                <p class="section-kicker">{ kicker }</p>
                <h2 class="gradient-heading">{ title }</h2>
                { body }
            </section>
        }
    }

    fn render_pill(text: &String) -> Html {
        html! { <span class="pill">{ text.clone() }</span> }
    }

    fn render_education(record: &EducationRecord) -> Html {
        html! {
            <article class="card">
                <div class="card-header">
                    <div>
                        <h3>{ record.school.clone() }</h3>
                        <p class="card-subtitle">{ record.city.clone() }</p>
                    </div>
                    { render_pill(&record.dates) }
                </div>
                <ul>
                    { for record.bullets.iter().map(|bullet| html! { <li>{ bullet.clone() }</li> }) }
                </ul>
            </article>
        }
    }

    fn render_experience(record: &ExperienceRecord) -> Html {
        html! {
            <article class="card">
                <div class="card-header">
                    <h3>{ record.role.clone() }</h3>
                    <p class="card-subtitle">{ format!("{} • {}", record.org, record.dates) }</p>
                </div>
                <p>{ record.summary.clone() }</p>
                <div>{ for record.skills.iter().map(render_pill) }</div>
            </article>
        }
    }

    fn render_extracurricular(record: &ExtracurricularRecord) -> Html {
        html! {
            <article class="card">
                <h3>{ record.title.clone() }</h3>
                <p class="card-subtitle">{ record.org.clone() }</p>
                { render_pill(&record.dates) }
                <div>{ for record.bullets.iter().map(render_pill) }</div>
            </article>
        }
    }

    fn render_project(record: &ProjectRecord) -> Html {
        let links = if record.links.is_empty() {
            Html::default()
        } else {
            html! {
                <div class="project-links">
                    { for record.links.iter().map(|link| html! {
                        <a href={link.href.clone()} target="_blank" rel="noreferrer">{ link.label.clone() }</a>
                    }) }
                </div>
            }
        };

        html! {
            <article class="card">
                <div class="card-header">
                    <div>
                        <h3>{ record.name.clone() }</h3>
                        <p class="card-subtitle">{ record.city.clone() }</p>
                    </div>
                    { render_pill(&record.dates) }
                </div>
                <p>{ record.desc.clone() }</p>
                <div>{ for record.tech.iter().map(render_pill) }</div>
                { links }
            </article>
        }
    }

    fn render_passion(passion: &Passion) -> Html {
        html! {
            <article class="card">
                <h3>{ passion.title.clone() }</h3>
                { render_pill(&passion.dates) }
                <ul>
                    { for passion.items.iter().map(|item| html! { <li>{ item.clone() }</li> }) }
                </ul>
            </article>
        }
    }

    fn render_resume(content: &PortfolioContent, assets: &PageAssets) -> Html {
        html! {
            <div class="card">
                <p>{"Grab a PDF version of my résumé, or skim highlights below."}</p>
                <div>{ for content.highlights.iter().map(render_pill) }</div>
                <a class="hero-action" href={assets.resume_href.clone()} download="" target="_blank" rel="noopener">
                    {"Download PDF"}
                </a>
            </div>
        }
    }

    fn render_footer(content: &PortfolioContent) -> Html {
        let profile = &content.profile;
        html! {
            <footer class="portfolio-footer">
                <span>{ footer_text(&profile.name, Utc::now().year()) }</span>
                { profile.github.as_ref().map(|github| html! {
                    <a href={github.clone()} target="_blank" rel="noreferrer">{"GitHub"}</a>
                }).unwrap_or_default() }
            </footer>
        }
    }

    /// Mount the page. `content` defaults to the bundled content; `assets` is an
    /// optional manifest (`baseUrl`, `bundled`) used to resolve the avatar and résumé.
    #[wasm_bindgen]
    pub fn mount_portfolio(
        selector: &str,
        content: Option<JsValue>,
        assets: Option<JsValue>,
    ) -> Result<(), JsValue> {
        let window: Window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
        let document: Document = window
            .document()
            .ok_or_else(|| JsValue::from_str("Cannot access document"))?;

        let target: Element = document
            .query_selector(selector)
            .map_err(|err| JsValue::from_str(&format!("Invalid selector: {err:?}")))?
            .ok_or_else(|| JsValue::from_str("No element matches the selector"))?;

        let content: PortfolioContent = match content {
            Some(value) if !value.is_undefined() && !value.is_null() => from_value(value)?,
            _ => default_content()
                .map_err(|err| JsValue::from_str(&format!("Timeline error: {err}")))?,
        };

        let manifest: AssetManifest = match assets {
            Some(value) if !value.is_undefined() && !value.is_null() => from_value(value)?,
            _ => AssetManifest::default(),
        };
        let assets = resolve_page_assets(&manifest);

        yew::Renderer::<PortfolioPage>::with_root_and_props(
            target,
            PortfolioPageProps {
                content: Rc::new(content),
                assets,
            },
        )
        .render();
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm_ui::mount_portfolio;

#[cfg(not(target_arch = "wasm32"))]
pub fn mount_portfolio(
    _: &str,
    _: Option<wasm_bindgen::JsValue>,
    _: Option<wasm_bindgen::JsValue>,
) -> Result<(), wasm_bindgen::JsValue> {
    Err(wasm_bindgen::JsValue::from_str(
        "portfolio-ui only supports the wasm32 target",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrow_keys_step_within_bounds() {
        let mut selection = TimelineSelection::latest(3).unwrap();

        assert!(!step_selection(&mut selection, "ArrowRight"));
        assert!(step_selection(&mut selection, "ArrowLeft"));
        assert_eq!(selection.index(), 1);
    }

    #[test]
    fn home_and_end_jump_to_the_ends() {
        let mut selection = TimelineSelection::latest(5).unwrap();

        assert!(step_selection(&mut selection, "Home"));
        assert_eq!(selection.index(), 0);
        assert!(!step_selection(&mut selection, "Home"));
        assert!(step_selection(&mut selection, "End"));
        assert_eq!(selection.index(), 4);
    }

    #[test]
    fn other_keys_are_ignored() {
        let mut selection = TimelineSelection::latest(2).unwrap();
        assert!(!step_selection(&mut selection, "Enter"));
        assert_eq!(selection.index(), 1);
    }

    fn entry(title: &str, start: &str) -> portfolio_core::TimelineEntry {
        let date = chrono::NaiveDate::parse_from_str(start, portfolio_core::CONTENT_DATE_FORMAT).unwrap();
        portfolio_core::TimelineEntry {
            category: portfolio_core::Category::Project,
            title: title.to_string(),
            detail: String::new(),
            start_date: date,
            end_date: date,
            badge: String::new(),
        }
    }

    #[test]
    fn timeline_key_follows_the_entries() {
        let original = Timeline::from_entries(vec![entry("A", "2022-01-01"), entry("B", "2023-01-01")]);
        let same = Timeline::from_entries(vec![entry("A", "2022-01-01"), entry("B", "2023-01-01")]);
        let shorter = Timeline::from_entries(vec![entry("A", "2022-01-01")]);
        let renamed = Timeline::from_entries(vec![entry("A", "2022-01-01"), entry("C", "2023-01-01")]);

        assert_eq!(timeline_key(&original), timeline_key(&same));
        assert_ne!(timeline_key(&original), timeline_key(&shorter));
        assert_ne!(timeline_key(&original), timeline_key(&renamed));
    }

    #[test]
    fn footer_names_the_owner() {
        assert_eq!(
            footer_text("Eren Ahwai", 2025),
            "© 2025 Eren Ahwai. All rights reserved."
        );
    }
}
