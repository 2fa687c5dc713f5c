//! Core portfolio model: content records, the chronological timeline builder
//! and the active-entry selector.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Date format used by authored content (`2024-09-01`).
pub const CONTENT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Which content collection a timeline entry came from.
///
/// Variant order is the concatenation order of the builder.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Education,
    Experience,
    Extracurricular,
    Project,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Education,
        Category::Experience,
        Category::Extracurricular,
        Category::Project,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Education => "Education",
            Category::Experience => "Experience",
            Category::Extracurricular => "Extracurricular",
            Category::Project => "Project",
        }
    }

    /// Lowercase key for CSS hooks and machine-readable output.
    pub fn slug(self) -> &'static str {
        match self {
            Category::Education => "education",
            Category::Experience => "experience",
            Category::Extracurricular => "extracurricular",
            Category::Project => "project",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A normalised, dated and categorised display record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimelineEntry {
    pub category: Category,
    pub title: String,
    pub detail: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Authored date-range label. Kept verbatim, it may disagree with the dates.
    pub badge: String,
}

/// Header information about the page owner.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Profile {
    pub name: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub github: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EducationRecord {
    pub school: String,
    pub dates: String,
    pub start: String,
    pub end: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExperienceRecord {
    pub role: String,
    pub org: String,
    pub dates: String,
    pub start: String,
    pub end: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExtracurricularRecord {
    pub title: String,
    pub org: String,
    pub dates: String,
    pub start: String,
    pub end: String,
    #[serde(default)]
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProjectRecord {
    pub name: String,
    pub dates: String,
    pub start: String,
    pub end: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub desc: String,
    #[serde(default)]
    pub tech: Vec<String>,
    /// Absent in content means no links; the section is simply not rendered.
    #[serde(default)]
    pub links: Vec<ProjectLink>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProjectLink {
    pub href: String,
    pub label: String,
}

/// Undated interest shown on the page but never placed on the timeline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Passion {
    pub title: String,
    pub dates: String,
    #[serde(default)]
    pub items: Vec<String>,
}

/// Everything the page renders.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct PortfolioContent {
    pub profile: Profile,
    #[serde(default)]
    pub education: Vec<EducationRecord>,
    #[serde(default)]
    pub experience: Vec<ExperienceRecord>,
    #[serde(default)]
    pub extracurriculars: Vec<ExtracurricularRecord>,
    #[serde(default)]
    pub projects: Vec<ProjectRecord>,
    #[serde(default)]
    pub passions: Vec<Passion>,
    /// Quick facts listed next to the résumé download.
    #[serde(default)]
    pub highlights: Vec<String>,
}

impl PortfolioContent {
    /// Build the chronological timeline from the four dated collections.
    pub fn timeline(&self) -> Result<Timeline, TimelineError> {
        build_timeline(
            &self.education,
            &self.experience,
            &self.extracurriculars,
            &self.projects,
        )
    }
}

/// Which date of a source record failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateField {
    Start,
    End,
}

impl fmt::Display for DateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateField::Start => f.write_str("start"),
            DateField::End => f.write_str("end"),
        }
    }
}

/// A source record that normalises into a [`TimelineEntry`].
pub trait TimelineSource {
    const CATEGORY: Category;

    fn title(&self) -> String;
    fn detail(&self) -> String;
    fn badge(&self) -> &str;
    fn start(&self) -> &str;
    fn end(&self) -> &str;

    fn to_entry(&self) -> Result<TimelineEntry, TimelineError> {
        let title = self.title();
        let start_date =
            parse_content_date(Self::CATEGORY, &title, DateField::Start, self.start())?;
        let end_date = parse_content_date(Self::CATEGORY, &title, DateField::End, self.end())?;
        Ok(TimelineEntry {
            category: Self::CATEGORY,
            detail: self.detail(),
            title,
            start_date,
            end_date,
            badge: self.badge().to_string(),
        })
    }
}

impl TimelineSource for EducationRecord {
    const CATEGORY: Category = Category::Education;

    fn title(&self) -> String {
        self.school.clone()
    }

    fn detail(&self) -> String {
        self.city.clone()
    }

    fn badge(&self) -> &str {
        &self.dates
    }

    fn start(&self) -> &str {
        &self.start
    }

    fn end(&self) -> &str {
        &self.end
    }
}

impl TimelineSource for ExperienceRecord {
    const CATEGORY: Category = Category::Experience;

    fn title(&self) -> String {
        format!("{} · {}", self.role, self.org)
    }

    fn detail(&self) -> String {
        self.summary.clone()
    }

    fn badge(&self) -> &str {
        &self.dates
    }

    fn start(&self) -> &str {
        &self.start
    }

    fn end(&self) -> &str {
        &self.end
    }
}

impl TimelineSource for ExtracurricularRecord {
    const CATEGORY: Category = Category::Extracurricular;

    fn title(&self) -> String {
        format!("{} · {}", self.title, self.org)
    }

    fn detail(&self) -> String {
        self.bullets.join(" • ")
    }

    fn badge(&self) -> &str {
        &self.dates
    }

    fn start(&self) -> &str {
        &self.start
    }

    fn end(&self) -> &str {
        &self.end
    }
}

impl TimelineSource for ProjectRecord {
    const CATEGORY: Category = Category::Project;

    fn title(&self) -> String {
        self.name.clone()
    }

    fn detail(&self) -> String {
        self.desc.clone()
    }

    fn badge(&self) -> &str {
        &self.dates
    }

    fn start(&self) -> &str {
        &self.start
    }

    fn end(&self) -> &str {
        &self.end
    }
}

fn parse_content_date(
    category: Category,
    record: &str,
    field: DateField,
    value: &str,
) -> Result<NaiveDate, TimelineError> {
    NaiveDate::parse_from_str(value, CONTENT_DATE_FORMAT).map_err(|_| TimelineError::InvalidDate {
        category,
        record: record.to_string(),
        field,
        value: value.to_string(),
    })
}

fn normalize_into<S: TimelineSource>(
    records: &[S],
    entries: &mut Vec<TimelineEntry>,
) -> Result<(), TimelineError> {
    for record in records {
        entries.push(record.to_entry()?);
    }
    Ok(())
}

/// Normalise, concatenate (education, experience, extracurricular, project)
/// and stably sort by start date.
pub fn build_timeline(
    education: &[EducationRecord],
    experience: &[ExperienceRecord],
    extracurriculars: &[ExtracurricularRecord],
    projects: &[ProjectRecord],
) -> Result<Timeline, TimelineError> {
    let mut entries = Vec::with_capacity(
        education.len() + experience.len() + extracurriculars.len() + projects.len(),
    );
    normalize_into(education, &mut entries)?;
    normalize_into(experience, &mut entries)?;
    normalize_into(extracurriculars, &mut entries)?;
    normalize_into(projects, &mut entries)?;

    let timeline = Timeline::from_entries(entries);
    debug!(entries = timeline.len(), "timeline built");
    Ok(timeline)
}

/// Entries in ascending start-date order. Immutable once built.
#[derive(Debug, Clone, Serialize, PartialEq, Eq, Default)]
#[serde(transparent)]
pub struct Timeline {
    entries: Vec<TimelineEntry>,
}

impl Timeline {
    /// Sort already-normalised entries. `sort_by_key` is stable, so equal
    /// start dates keep their input order.
    pub fn from_entries(mut entries: Vec<TimelineEntry>) -> Self {
        entries.sort_by_key(|entry| entry.start_date);
        Self { entries }
    }

    pub fn entries(&self) -> &[TimelineEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&TimelineEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Selection pointing at the chronologically last entry.
    pub fn latest_selection(&self) -> Result<TimelineSelection, TimelineError> {
        TimelineSelection::latest(self.len())
    }
}

/// The single entry currently shown in detail.
///
/// There is no empty state: a selection always points inside `0..len`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineSelection {
    index: usize,
    len: usize,
}

impl TimelineSelection {
    pub fn latest(len: usize) -> Result<Self, TimelineError> {
        if len == 0 {
            return Err(TimelineError::EmptyTimeline);
        }
        Ok(Self {
            index: len - 1,
            len,
        })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.index == index
    }

    /// Replace the active index. Out-of-range indexes leave the selection as it was.
    pub fn select(&mut self, index: usize) -> Result<(), TimelineError> {
        if index >= self.len {
            let index = i64::try_from(index).unwrap_or(i64::MAX);
            warn!(index, len = self.len, "rejected timeline selection");
            return Err(TimelineError::OutOfRange {
                index,
                len: self.len,
            });
        }
        self.index = index;
        Ok(())
    }

    /// Same as [`select`](Self::select) for callers holding a signed index (JavaScript).
    pub fn select_signed(&mut self, index: i64) -> Result<(), TimelineError> {
        match usize::try_from(index) {
            Ok(index) => self.select(index),
            Err(_) => {
                warn!(index, len = self.len, "rejected timeline selection");
                Err(TimelineError::OutOfRange {
                    index,
                    len: self.len,
                })
            }
        }
    }

    /// Step towards earlier entries. Returns whether the selection moved.
    pub fn select_previous(&mut self) -> bool {
        if self.index == 0 {
            return false;
        }
        self.index -= 1;
        true
    }

    /// Step towards later entries. Returns whether the selection moved.
    pub fn select_next(&mut self) -> bool {
        if self.index + 1 >= self.len {
            return false;
        }
        self.index += 1;
        true
    }

    /// Jump to the earliest entry. Returns whether the selection moved.
    pub fn select_first(&mut self) -> bool {
        let moved = self.index != 0;
        self.index = 0;
        moved
    }

    /// Jump to the latest entry. Returns whether the selection moved.
    pub fn select_last(&mut self) -> bool {
        let last = self.len - 1;
        let moved = self.index != last;
        self.index = last;
        moved
    }

    pub fn active<'a>(&self, timeline: &'a Timeline) -> Option<&'a TimelineEntry> {
        timeline.get(self.index)
    }
}

/// Errors raised while building or navigating a timeline.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimelineError {
    #[error("{category} record \"{record}\" has an invalid {field} date: {value:?}")]
    InvalidDate {
        category: Category,
        record: String,
        field: DateField,
        value: String,
    },
    #[error("selection index {index} is out of range for {len} entries")]
    OutOfRange { index: i64, len: usize },
    #[error("timeline has no entries to select")]
    EmptyTimeline,
    #[error("could not read content: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(value: &str) -> NaiveDate {
        NaiveDate::parse_from_str(value, CONTENT_DATE_FORMAT).unwrap()
    }

    fn education(school: &str, start: &str) -> EducationRecord {
        EducationRecord {
            school: school.to_string(),
            dates: "2024 – Present".to_string(),
            start: start.to_string(),
            end: "2028-04-30".to_string(),
            city: "Kingston, ON".to_string(),
            bullets: vec!["Dean's Honour List".to_string()],
        }
    }

    fn experience(role: &str, start: &str) -> ExperienceRecord {
        ExperienceRecord {
            role: role.to_string(),
            org: "Tutorax".to_string(),
            dates: "May 2025 – Present".to_string(),
            start: start.to_string(),
            end: "2025-10-01".to_string(),
            summary: "1-on-1 sessions".to_string(),
            skills: vec!["Teaching".to_string()],
        }
    }

    fn extracurricular(title: &str, start: &str) -> ExtracurricularRecord {
        ExtracurricularRecord {
            title: title.to_string(),
            org: "Engineering Society".to_string(),
            dates: "Sept 2025 – Present".to_string(),
            start: start.to_string(),
            end: "2025-10-01".to_string(),
            bullets: vec!["Leadership".to_string(), "Planning".to_string()],
        }
    }

    fn project(name: &str, start: &str) -> ProjectRecord {
        ProjectRecord {
            name: name.to_string(),
            dates: "Summer 2025 – Present".to_string(),
            start: start.to_string(),
            end: "2025-10-01".to_string(),
            city: "Ottawa, ON".to_string(),
            desc: "Ranks photos".to_string(),
            tech: vec!["Python".to_string()],
            links: Vec::new(),
        }
    }

    fn scenario() -> Timeline {
        build_timeline(
            &[education("Queen's", "2024-09-01")],
            &[experience("Tutor", "2025-05-01")],
            &[extracurricular("Project Manager", "2025-09-01")],
            &[project("Photo Optimizer", "2025-06-01")],
        )
        .unwrap()
    }

    #[test]
    fn orders_categories_by_start_date() {
        let timeline = scenario();
        let order: Vec<(Category, NaiveDate)> = timeline
            .entries()
            .iter()
            .map(|entry| (entry.category, entry.start_date))
            .collect();

        assert_eq!(
            order,
            vec![
                (Category::Education, date("2024-09-01")),
                (Category::Experience, date("2025-05-01")),
                (Category::Project, date("2025-06-01")),
                (Category::Extracurricular, date("2025-09-01")),
            ]
        );
    }

    #[test]
    fn keeps_every_entry_and_sorts_ascending() {
        let timeline = build_timeline(
            &[education("A", "2024-09-01"), education("B", "2020-09-01")],
            &[experience("Tutor", "2025-05-01"), experience("Instructor", "2021-11-01")],
            &[
                extracurricular("PM", "2025-09-01"),
                extracurricular("Software", "2024-11-01"),
                extracurricular("Webmaster", "2023-11-01"),
            ],
            &[project("Photos", "2025-06-01"), project("Report", "2022-09-01")],
        )
        .unwrap();

        assert_eq!(timeline.len(), 9);
        assert!(timeline
            .entries()
            .windows(2)
            .all(|pair| pair[0].start_date <= pair[1].start_date));
    }

    #[test]
    fn equal_start_dates_follow_category_order() {
        let same = "2023-01-01";
        let timeline = build_timeline(
            &[education("School", same)],
            &[experience("Tutor", same)],
            &[extracurricular("Club", same)],
            &[project("Build", same)],
        )
        .unwrap();

        let categories: Vec<Category> = timeline.entries().iter().map(|e| e.category).collect();
        assert_eq!(categories, Category::ALL.to_vec());
    }

    #[test]
    fn equal_start_dates_within_a_category_keep_source_order() {
        let timeline = build_timeline(
            &[],
            &[],
            &[],
            &[project("First", "2022-01-01"), project("Second", "2022-01-01")],
        )
        .unwrap();

        let titles: Vec<&str> = timeline.entries().iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["First", "Second"]);
    }

    #[test]
    fn normalises_each_category() {
        let timeline = scenario();
        let by_category = |category: Category| {
            timeline
                .entries()
                .iter()
                .find(|entry| entry.category == category)
                .unwrap()
        };

        let edu = by_category(Category::Education);
        assert_eq!(edu.title, "Queen's");
        assert_eq!(edu.detail, "Kingston, ON");

        let exp = by_category(Category::Experience);
        assert_eq!(exp.title, "Tutor · Tutorax");
        assert_eq!(exp.detail, "1-on-1 sessions");

        let extra = by_category(Category::Extracurricular);
        assert_eq!(extra.title, "Project Manager · Engineering Society");
        assert_eq!(extra.detail, "Leadership • Planning");

        let proj = by_category(Category::Project);
        assert_eq!(proj.title, "Photo Optimizer");
        assert_eq!(proj.detail, "Ranks photos");
        assert_eq!(proj.end_date, date("2025-10-01"));
    }

    #[test]
    fn badge_is_copied_not_derived() {
        let mut record = experience("Tutor", "2025-05-01");
        record.dates = "Present".to_string();
        record.end = "2020-01-01".to_string();

        let entry = record.to_entry().unwrap();
        assert_eq!(entry.badge, "Present");
        assert_eq!(entry.end_date, date("2020-01-01"));
    }

    #[test]
    fn empty_collections_contribute_nothing() {
        let timeline = build_timeline(&[], &[], &[], &[project("Only", "2022-09-01")]).unwrap();
        assert_eq!(timeline.len(), 1);

        let empty = build_timeline(&[], &[], &[], &[]).unwrap();
        assert!(empty.is_empty());
        assert_eq!(empty.latest_selection(), Err(TimelineError::EmptyTimeline));
    }

    #[test]
    fn malformed_date_names_the_record() {
        let err = build_timeline(
            &[education("Queen's", "2024-09-01")],
            &[experience("Tutor", "May 2025")],
            &[],
            &[],
        )
        .unwrap_err();

        assert_eq!(
            err,
            TimelineError::InvalidDate {
                category: Category::Experience,
                record: "Tutor · Tutorax".to_string(),
                field: DateField::Start,
                value: "May 2025".to_string(),
            }
        );
        assert_eq!(
            err.to_string(),
            "Experience record \"Tutor · Tutorax\" has an invalid start date: \"May 2025\""
        );
    }

    #[test]
    fn malformed_end_date_is_rejected() {
        let mut record = project("Photos", "2025-06-01");
        record.end = "2025-02-30".to_string();

        let err = record.to_entry().unwrap_err();
        assert!(matches!(
            err,
            TimelineError::InvalidDate {
                field: DateField::End,
                ..
            }
        ));
    }

    #[test]
    fn initial_selection_is_the_latest_entry() {
        let timeline = scenario();
        let selection = timeline.latest_selection().unwrap();

        assert_eq!(selection.index(), timeline.len() - 1);
        assert_eq!(
            selection.active(&timeline).map(|e| e.category),
            Some(Category::Extracurricular)
        );
    }

    #[test]
    fn select_zero_shows_the_earliest_entry() {
        let timeline = scenario();
        let mut selection = timeline.latest_selection().unwrap();

        selection.select(0).unwrap();
        let active = selection.active(&timeline).unwrap();
        assert_eq!(active, &timeline.entries()[0]);
        assert_eq!(active.start_date, date("2024-09-01"));
    }

    #[test]
    fn select_updates_to_exactly_that_entry() {
        let timeline = scenario();
        let mut selection = timeline.latest_selection().unwrap();

        for index in 0..timeline.len() {
            selection.select(index).unwrap();
            assert!(selection.is_active(index));
            assert_eq!(selection.active(&timeline), timeline.get(index));
        }
    }

    #[test]
    fn out_of_range_selection_does_not_mutate() {
        let timeline = scenario();
        let mut selection = timeline.latest_selection().unwrap();
        selection.select(1).unwrap();

        assert_eq!(
            selection.select(4),
            Err(TimelineError::OutOfRange { index: 4, len: 4 })
        );
        assert_eq!(
            selection.select_signed(-1),
            Err(TimelineError::OutOfRange { index: -1, len: 4 })
        );
        assert_eq!(selection.index(), 1);

        selection.select_signed(2).unwrap();
        assert_eq!(selection.index(), 2);
    }

    #[test]
    fn stepping_stays_in_bounds() {
        let mut selection = TimelineSelection::latest(2).unwrap();

        assert!(!selection.select_next());
        assert!(selection.select_previous());
        assert_eq!(selection.index(), 0);
        assert!(!selection.select_previous());
        assert_eq!(selection.index(), 0);
    }

    #[test]
    fn jumping_to_the_ends() {
        let mut selection = TimelineSelection::latest(3).unwrap();

        assert!(!selection.select_last());
        assert!(selection.select_first());
        assert_eq!(selection.index(), 0);
        assert!(!selection.select_first());
        assert!(selection.select_last());
        assert_eq!(selection.index(), 2);
    }

    #[test]
    fn project_links_default_to_empty() {
        let record: ProjectRecord = serde_json::from_str(
            r#"{"name":"Report","dates":"Sept 2022 – Jan 2023","start":"2022-09-01","end":"2023-01-31"}"#,
        )
        .unwrap();
        assert!(record.links.is_empty());
        assert!(record.tech.is_empty());
    }
}
