//! Form controller: field state, validation, payload assembly.
//!
//! Required and email-shape checks run when a field loses focus and again
//! on submit; submission is blocked while any check fails, with the
//! message attached to the offending field.

use crate::model::{NewApplicant, StagePatch, ApplicantRecord, DEFAULT_STAGE, SOURCES, STAGES};
use regex::Regex;
use std::path::PathBuf;
use std::sync::OnceLock;

const REQUIRED_MESSAGE: &str = "This field is required";
const EMAIL_MESSAGE: &str = "Please enter a valid email address";

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap())
}

/// Outcome of running a field's checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    Invalid(String),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            ValidationResult::Valid => None,
            ValidationResult::Invalid(msg) => Some(msg),
        }
    }
}

/// Interaction state of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldState {
    /// Not interacted with yet.
    #[default]
    Pristine,
    Focused,
    /// Focused then blurred.
    Touched,
    /// Value modified.
    Dirty,
}

/// A single form field with its checks and interaction state.
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub value: String,
    pub required: bool,
    pub email: bool,
    /// When set, the field is a selector cycling these options instead of
    /// accepting typed input.
    pub options: Option<&'static [&'static str]>,
    pub state: FieldState,
    pub validation: ValidationResult,
}

impl FormField {
    pub fn new(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            value: String::new(),
            required: false,
            email: false,
            options: None,
            state: FieldState::Pristine,
            validation: ValidationResult::Valid,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn email(mut self) -> Self {
        self.email = true;
        self
    }

    pub fn select(mut self, options: &'static [&'static str]) -> Self {
        self.options = Some(options);
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Run the field's checks, recording the result. Email shape is only
    /// checked against a non-empty value, matching the required check's
    /// responsibility for emptiness.
    pub fn validate(&mut self) -> bool {
        let value = self.value.trim();
        self.validation = if self.required && value.is_empty() {
            ValidationResult::Invalid(REQUIRED_MESSAGE.to_string())
        } else if self.email && !value.is_empty() && !email_regex().is_match(value) {
            ValidationResult::Invalid(EMAIL_MESSAGE.to_string())
        } else {
            ValidationResult::Valid
        };
        self.validation.is_valid()
    }

    pub fn focus(&mut self) {
        self.state = FieldState::Focused;
    }

    /// Leaving the field validates it.
    pub fn blur(&mut self) {
        self.state = FieldState::Touched;
        self.validate();
    }

    /// Typing clears any displayed error until the next blur or submit.
    pub fn push_char(&mut self, c: char) {
        if self.options.is_some() {
            return;
        }
        self.value.push(c);
        self.state = FieldState::Dirty;
        self.validation = ValidationResult::Valid;
    }

    pub fn backspace(&mut self) {
        if self.options.is_some() {
            return;
        }
        self.value.pop();
        self.state = FieldState::Dirty;
        self.validation = ValidationResult::Valid;
    }

    /// Step a selector field through its options. `delta` of -1/1 moves
    /// backwards/forwards; an unset selector starts at the first option.
    pub fn cycle(&mut self, delta: isize) {
        let Some(options) = self.options else {
            return;
        };
        if options.is_empty() {
            return;
        }
        let len = options.len() as isize;
        let current = options
            .iter()
            .position(|o| *o == self.value)
            .map(|i| i as isize);
        let next = match current {
            Some(i) => (i + delta).rem_euclid(len),
            None => {
                if delta >= 0 {
                    0
                } else {
                    len - 1
                }
            }
        };
        self.value = options[next as usize].to_string();
        self.state = FieldState::Dirty;
        self.validation = ValidationResult::Valid;
    }

    /// The message to show inline, if any. Pristine fields stay silent
    /// even when empty-and-required, so an untouched form is not a wall
    /// of errors.
    pub fn error(&self) -> Option<&str> {
        match self.state {
            FieldState::Pristine | FieldState::Focused => None,
            FieldState::Touched | FieldState::Dirty => self.validation.error_message(),
        }
    }
}

/// Shared focus/blur/submit machinery for a field list.
#[derive(Debug, Clone)]
pub struct FieldSet {
    pub fields: Vec<FormField>,
    pub focus: usize,
}

impl FieldSet {
    fn new(mut fields: Vec<FormField>) -> Self {
        if let Some(first) = fields.first_mut() {
            first.focus();
        }
        Self { fields, focus: 0 }
    }

    pub fn focused_mut(&mut self) -> &mut FormField {
        &mut self.fields[self.focus]
    }

    pub fn focus_next(&mut self) {
        self.move_focus(1);
    }

    pub fn focus_prev(&mut self) {
        self.move_focus(-1);
    }

    fn move_focus(&mut self, delta: isize) {
        let len = self.fields.len() as isize;
        self.fields[self.focus].blur();
        self.focus = (self.focus as isize + delta).rem_euclid(len) as usize;
        self.fields[self.focus].focus();
    }

    /// Submit-time validation: every field is treated as touched and
    /// re-checked. Returns whether the whole set passed.
    pub fn validate_all(&mut self) -> bool {
        let mut ok = true;
        for field in &mut self.fields {
            if field.state == FieldState::Pristine || field.state == FieldState::Focused {
                field.state = FieldState::Touched;
            }
            if !field.validate() {
                ok = false;
            }
        }
        ok
    }

    pub fn value(&self, name: &str) -> &str {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.value.as_str())
            .unwrap_or_default()
    }
}

/// The create-applicant form.
#[derive(Debug, Clone)]
pub struct NewApplicantForm {
    pub set: FieldSet,
}

impl NewApplicantForm {
    pub fn new() -> Self {
        Self {
            set: FieldSet::new(vec![
                FormField::new("name", "Name").required(),
                FormField::new("email", "Email").required().email(),
                FormField::new("phone", "Phone"),
                FormField::new("source", "Source").required().select(&SOURCES),
                FormField::new("tags", "Tags (comma-separated)"),
                FormField::new("resume_file", "Resume file path"),
            ]),
        }
    }

    /// Assemble the creation payload. Only valid after
    /// [`FieldSet::validate_all`] returned true.
    pub fn payload(&self) -> NewApplicant {
        NewApplicant {
            name: self.set.value("name").trim().to_string(),
            email: self.set.value("email").trim().to_string(),
            phone: self.set.value("phone").trim().to_string(),
            source: self.set.value("source").trim().to_string(),
            tags: self.set.value("tags").trim().to_string(),
            current_stage: DEFAULT_STAGE.to_string(),
        }
    }

    pub fn resume_path(&self) -> Option<PathBuf> {
        let path = self.set.value("resume_file").trim();
        if path.is_empty() {
            None
        } else {
            Some(PathBuf::from(path))
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for NewApplicantForm {
    fn default() -> Self {
        Self::new()
    }
}

/// The detail-view update form: stage selector plus the three comment
/// fields, pre-filled from the loaded record.
#[derive(Debug, Clone)]
pub struct StagePatchForm {
    pub set: FieldSet,
}

impl StagePatchForm {
    pub fn from_record(record: &ApplicantRecord) -> Self {
        Self {
            set: FieldSet::new(vec![
                FormField::new("current_stage", "Current Stage")
                    .required()
                    .select(&STAGES)
                    .with_value(record.current_stage.clone()),
                FormField::new("comments_ta", "Technical Assessment Comments")
                    .with_value(record.comments_ta.clone().unwrap_or_default()),
                FormField::new("comments_initial_call", "Initial Call Comments")
                    .with_value(record.comments_initial_call.clone().unwrap_or_default()),
                FormField::new("comments_evaluation", "Evaluation Comments")
                    .with_value(record.comments_evaluation.clone().unwrap_or_default()),
            ]),
        }
    }

    pub fn patch(&self) -> StagePatch {
        StagePatch {
            current_stage: self.set.value("current_stage").to_string(),
            comments_ta: self.set.value("comments_ta").to_string(),
            comments_initial_call: self.set.value("comments_initial_call").to_string(),
            comments_evaluation: self.set.value("comments_evaluation").to_string(),
        }
    }
}
