use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, PrimitiveDateTime};

/// Pipeline stages as enumerated by the server. The first entry is the
/// default stage for newly created applicants.
pub const STAGES: [&str; 8] = [
    "Submitted",
    "Under Review",
    "Interview Stage",
    "Technical Assessment",
    "Final Interview",
    "Offer Extended",
    "Hired",
    "Rejected",
];

/// Recruiting sources as enumerated by the server.
pub const SOURCES: [&str; 6] = [
    "LinkedIn",
    "Indeed",
    "Referral",
    "Company Website",
    "Job Board",
    "Other",
];

pub const DEFAULT_STAGE: &str = "Submitted";

fn default_stage() -> String {
    DEFAULT_STAGE.to_string()
}

/// A single applicant as served by `/api/applicants/`.
///
/// Server-owned and read-only on this side except through submitted
/// payloads. The serializer emits both `id` and an `applicant_id` alias;
/// [`ApplicantRecord::ident`] resolves the effective identifier. Loose
/// shapes (tags and interview dates arriving as either a string or a
/// sequence) are collapsed to one canonical sequence at this boundary so
/// no downstream consumer has to care.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicantRecord {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub applicant_id: Option<i64>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default, deserialize_with = "shape::tag_list")]
    pub tags: Vec<String>,
    #[serde(default = "default_stage")]
    pub current_stage: String,
    #[serde(default)]
    pub resume_file: Option<String>,
    #[serde(default)]
    pub resume_text: Option<String>,
    #[serde(default)]
    pub interviewers: Option<String>,
    #[serde(default, deserialize_with = "shape::date_list")]
    pub interview_dates: Vec<String>,
    #[serde(default)]
    pub comments_ta: Option<String>,
    #[serde(default)]
    pub comments_initial_call: Option<String>,
    #[serde(default)]
    pub comments_evaluation: Option<String>,
    #[serde(default)]
    pub overall_feedback: Option<String>,
    #[serde(default)]
    pub final_decision: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub last_status_update: Option<String>,
}

impl ApplicantRecord {
    /// Effective identifier: the serializer's `applicant_id` alias when
    /// present, else `id`.
    pub fn ident(&self) -> i64 {
        self.applicant_id.unwrap_or(self.id)
    }

    /// Timestamp shown in the "Last Update" column: `last_status_update`
    /// when present, else `updated_at`.
    pub fn last_update(&self) -> Option<&str> {
        self.last_status_update
            .as_deref()
            .or(self.updated_at.as_deref())
    }
}

/// Parse an ISO-8601 timestamp (or bare date) to unix seconds.
///
/// The server emits RFC 3339 datetimes for record timestamps and bare
/// `YYYY-MM-DD` dates inside `interview_dates`.
pub fn parse_timestamp(s: &str) -> Option<i64> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = time::OffsetDateTime::parse(s, &Rfc3339) {
        return Some(dt.unix_timestamp());
    }
    // Django also serializes naive datetimes without an offset.
    let naive = format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");
    if let Ok(dt) = PrimitiveDateTime::parse(s, naive) {
        return Some(dt.assume_utc().unix_timestamp());
    }
    let date_only = format_description!("[year]-[month]-[day]");
    if let Ok(d) = Date::parse(s, date_only) {
        return Some(d.midnight().assume_utc().unix_timestamp());
    }
    None
}

/// Creation payload for `POST /api/applicants/`.
///
/// Tags stay a raw comma-separated string here: the payload mirrors what
/// the form collected, and the server owns canonicalization on write.
#[derive(Debug, Clone, Serialize)]
pub struct NewApplicant {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub source: String,
    pub tags: String,
    pub current_stage: String,
}

/// Update payload for `PATCH /api/applicants/{id}/`.
#[derive(Debug, Clone, Serialize)]
pub struct StagePatch {
    pub current_stage: String,
    pub comments_ta: String,
    pub comments_initial_call: String,
    pub comments_evaluation: String,
}

/// Commands emitted by presentation layers toward the controller.
#[derive(Debug, Clone)]
pub enum UiCommand {
    /// Reload the applicant collection, superseding any load in flight.
    Refresh,
    LoadDetail {
        id: i64,
    },
    Create {
        payload: NewApplicant,
        resume: Option<PathBuf>,
    },
    Update {
        id: i64,
        patch: StagePatch,
    },
    Quit,
}

/// Events emitted by the controller and consumed by UI/CLI layers.
#[derive(Debug, Clone)]
pub enum AppEvent {
    LoadStarted,
    Loaded {
        records: Vec<ApplicantRecord>,
    },
    LoadFailed {
        message: String,
    },
    DetailLoaded {
        // Box to keep AppEvent small; ApplicantRecord carries free text.
        record: Box<ApplicantRecord>,
    },
    DetailFailed {
        message: String,
    },
    Created {
        record: Box<ApplicantRecord>,
    },
    Updated {
        record: Box<ApplicantRecord>,
    },
    SubmitFailed {
        message: String,
    },
    /// Deferred navigation to a record's detail view after a successful
    /// create (fires once the redirect delay elapses).
    OpenDetail {
        id: i64,
    },
    Info(String),
}

mod shape {
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrSeq {
        Seq(Vec<String>),
        Text(String),
    }

    fn trimmed(items: Vec<String>) -> Vec<String> {
        items
            .into_iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }

    /// Tags arrive as a comma-separated string or a sequence of strings.
    pub fn tag_list<'de, D>(d: D) -> Result<Vec<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<StringOrSeq>::deserialize(d)? {
            None => Vec::new(),
            Some(StringOrSeq::Seq(items)) => trimmed(items),
            Some(StringOrSeq::Text(s)) => trimmed(s.split(',').map(str::to_string).collect()),
        })
    }

    /// Interview dates arrive as a sequence, a JSON-encoded string of a
    /// sequence, or a bare string.
    pub fn date_list<'de, D>(d: D) -> Result<Vec<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<StringOrSeq>::deserialize(d)? {
            None => Vec::new(),
            Some(StringOrSeq::Seq(items)) => trimmed(items),
            Some(StringOrSeq::Text(s)) => match serde_json::from_str::<Vec<String>>(&s) {
                Ok(items) => trimmed(items),
                Err(_) => trimmed(vec![s]),
            },
        })
    }
}
