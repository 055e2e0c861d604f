//! Client-side view model: filter, sort, paginate.
//!
//! `Dashboard` owns the unfiltered record sequence and a `ViewState`; the
//! visible page is derived from the two on every call, with no hidden
//! state, so the whole pipeline is testable without any UI attached.

use crate::model::{parse_timestamp, ApplicantRecord};

pub const PAGE_SIZE: usize = 20;

/// Sortable table columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Id,
    Name,
    Email,
    Stage,
    Source,
    LastUpdate,
}

impl SortField {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "id" | "applicant_id" => Some(Self::Id),
            "name" => Some(Self::Name),
            "email" => Some(Self::Email),
            "stage" | "current_stage" => Some(Self::Stage),
            "source" => Some(Self::Source),
            "updated" | "last_update" | "last_status_update" => Some(Self::LastUpdate),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Id => "ID",
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Stage => "Stage",
            Self::Source => "Source",
            Self::LastUpdate => "Last Update",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    fn flip(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            Self::Ascending => "↑",
            Self::Descending => "↓",
        }
    }
}

/// Ephemeral interaction state. Initialized from CLI defaults, mutated
/// only through [`Dashboard`] handlers, never persisted.
#[derive(Debug, Clone)]
pub struct ViewState {
    pub search: String,
    /// Empty string means "all stages"; otherwise an exact match.
    pub stage: String,
    /// Empty string means "all sources"; otherwise an exact match.
    pub source: String,
    pub sort: Option<(SortField, SortDirection)>,
    /// 1-based page number.
    pub page: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            search: String::new(),
            stage: String::new(),
            source: String::new(),
            sort: None,
            page: 1,
        }
    }
}

/// Per-field comparison key. Identifiers compare as integers, timestamps
/// as parsed instants (unparseable ones sort first), everything else as
/// lowercased text.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
enum SortKey {
    Int(i64),
    Time(i64),
    Text(String),
}

fn sort_key(record: &ApplicantRecord, field: SortField) -> SortKey {
    match field {
        SortField::Id => SortKey::Int(record.ident()),
        SortField::LastUpdate => SortKey::Time(
            record
                .last_update()
                .and_then(parse_timestamp)
                .unwrap_or(i64::MIN),
        ),
        SortField::Name => SortKey::Text(record.name.to_lowercase()),
        SortField::Email => SortKey::Text(record.email.to_lowercase()),
        SortField::Stage => SortKey::Text(record.current_stage.to_lowercase()),
        SortField::Source => SortKey::Text(
            record
                .source
                .as_deref()
                .unwrap_or_default()
                .to_lowercase(),
        ),
    }
}

/// The record sequence plus its view state.
#[derive(Debug, Clone, Default)]
pub struct Dashboard {
    records: Vec<ApplicantRecord>,
    pub view: ViewState,
}

impl Dashboard {
    pub fn new(view: ViewState) -> Self {
        Self {
            records: Vec::new(),
            view,
        }
    }

    pub fn records(&self) -> &[ApplicantRecord] {
        &self.records
    }

    /// Swap in a freshly loaded record sequence. Filters and sort carry
    /// over; the page resets like any other re-derivation.
    pub fn replace_records(&mut self, records: Vec<ApplicantRecord>) {
        self.records = records;
        self.view.page = 1;
    }

    /// Filtered (and, when a sort field is set, stably sorted) records.
    pub fn filtered(&self) -> Vec<&ApplicantRecord> {
        let term = self.view.search.trim().to_lowercase();
        let mut out: Vec<&ApplicantRecord> = self
            .records
            .iter()
            .filter(|r| self.matches(r, &term))
            .collect();

        if let Some((field, direction)) = self.view.sort {
            // Stable sort: equal keys keep their pre-sort relative order,
            // in both directions.
            out.sort_by(|a, b| {
                let ord = sort_key(a, field).cmp(&sort_key(b, field));
                match direction {
                    SortDirection::Ascending => ord,
                    SortDirection::Descending => ord.reverse(),
                }
            });
        }
        out
    }

    fn matches(&self, record: &ApplicantRecord, term: &str) -> bool {
        let matches_search = term.is_empty()
            || record.name.to_lowercase().contains(term)
            || record.email.to_lowercase().contains(term)
            || record.tags.iter().any(|t| t.to_lowercase().contains(term));

        let matches_stage = self.view.stage.is_empty() || record.current_stage == self.view.stage;
        let matches_source =
            self.view.source.is_empty() || record.source.as_deref() == Some(self.view.source.as_str());

        matches_search && matches_stage && matches_source
    }

    pub fn total(&self) -> usize {
        self.filtered().len()
    }

    pub fn total_pages(&self) -> usize {
        self.total().div_ceil(PAGE_SIZE).max(1)
    }

    /// The slice of filtered records for the current page.
    pub fn visible_page(&self) -> Vec<&ApplicantRecord> {
        let filtered = self.filtered();
        let start = (self.view.page.saturating_sub(1)) * PAGE_SIZE;
        filtered
            .into_iter()
            .skip(start)
            .take(PAGE_SIZE)
            .collect()
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.view.search = term.into();
        self.view.page = 1;
    }

    pub fn set_stage(&mut self, stage: impl Into<String>) {
        self.view.stage = stage.into();
        self.view.page = 1;
    }

    pub fn set_source(&mut self, source: impl Into<String>) {
        self.view.source = source.into();
        self.view.page = 1;
    }

    /// Selecting the active sort field flips its direction; selecting a
    /// new field starts ascending. Either way the page resets.
    pub fn toggle_sort(&mut self, field: SortField) {
        self.view.sort = match self.view.sort {
            Some((current, direction)) if current == field => Some((field, direction.flip())),
            _ => Some((field, SortDirection::Ascending)),
        };
        self.view.page = 1;
    }

    pub fn clear_filters(&mut self) {
        self.view.search.clear();
        self.view.stage.clear();
        self.view.source.clear();
        self.view.page = 1;
    }

    /// Direct page change. Out-of-range requests are rejected no-ops.
    pub fn change_page(&mut self, page: usize) -> bool {
        if page >= 1 && page <= self.total_pages() {
            self.view.page = page;
            true
        } else {
            false
        }
    }
}
