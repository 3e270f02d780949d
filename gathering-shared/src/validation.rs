/// Request validation
///
/// Candidates are the raw shapes clients submit. They deserialize leniently
/// (missing fields become empty strings) so that every problem is reported
/// as a field error rather than a parse failure, and then pass through a
/// pure validation function that either produces the store's `New*` type or
/// a [`ValidationFailure`] listing every offending field.
///
/// Validation is all-or-nothing: no partially checked candidate ever reaches
/// the store.
///
/// # Example
///
/// ```
/// use gathering_shared::validation::{validate_event, EventCandidate};
///
/// let candidate = EventCandidate {
///     title: "ab".to_string(),
///     date: "2023/09/15".to_string(),
///     time: "09:00".to_string(),
///     location: "Main Hall".to_string(),
///     description: "Bring a friend along.".to_string(),
///     category: "social".to_string(),
/// };
///
/// let failure = validate_event(candidate).unwrap_err();
/// let fields: Vec<&str> = failure.errors.iter().map(|e| e.field.as_str()).collect();
/// assert_eq!(fields, vec!["date", "title"]);
/// ```

use crate::models::{
    category::Category,
    event::NewEvent,
    user::NewUser,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

/// Four digits, dash, two digits, dash, two digits. Shape only.
static DATE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("date pattern compiles"));

/// Two digits, colon, two digits. Shape only.
static TIME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{2}:[0-9]{2}$").expect("time pattern compiles"));

const CATEGORY_MESSAGE: &str = "Please select a valid category";

/// Submitted event, before validation
///
/// `title`, `location` and `description` lengths are checked in
/// [`validate_event`], counted in UTF-16 code units the way the browser form
/// counts them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct EventCandidate {
    pub title: String,

    #[validate(regex(path = *DATE_PATTERN, message = "Date must be in YYYY-MM-DD format"))]
    pub date: String,

    #[validate(regex(path = *TIME_PATTERN, message = "Time must be in HH:MM format"))]
    pub time: String,

    pub location: String,

    pub description: String,

    /// Checked against [`Category`] in [`validate_event`]
    pub category: String,
}

/// Submitted user, before validation
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct UserCandidate {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// A single failed rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Name of the offending field, as it appears in the request body
    pub field: String,

    /// Human-readable explanation
    pub message: String,
}

/// Every rule a candidate failed, ordered by field name
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("validation failed for {} field(s)", .errors.len())]
pub struct ValidationFailure {
    pub errors: Vec<FieldError>,
}

impl ValidationFailure {
    fn push(&mut self, field: &str, message: &str) {
        self.errors.push(FieldError {
            field: field.to_string(),
            message: message.to_string(),
        });
    }

    /// Returns true if `field` failed at least one rule
    pub fn has_field(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    fn sorted(mut self) -> Self {
        self.errors
            .sort_by(|a, b| a.field.cmp(&b.field).then_with(|| a.message.cmp(&b.message)));
        self
    }
}

impl From<ValidationErrors> for ValidationFailure {
    fn from(errors: ValidationErrors) -> Self {
        let errors = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |error| FieldError {
                    field: field.to_string(),
                    message: error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| "Validation failed".to_string()),
                })
            })
            .collect();

        Self { errors }
    }
}

/// Length as a browser reports it (`String.length`)
fn utf16_len(value: &str) -> usize {
    value.encode_utf16().count()
}

fn check<T: Validate>(candidate: &T) -> ValidationFailure {
    match candidate.validate() {
        Ok(()) => ValidationFailure::default(),
        Err(errors) => errors.into(),
    }
}

/// Validates an event candidate
///
/// # Errors
///
/// Returns a [`ValidationFailure`] naming each field that breaks a rule:
///
/// - `title`: fewer than 3 UTF-16 code units
/// - `date`: not `YYYY-MM-DD`
/// - `time`: not `HH:MM`
/// - `location`: fewer than 3 UTF-16 code units
/// - `description`: fewer than 10 UTF-16 code units
/// - `category`: not exactly `religious`, `social` or `charity`
pub fn validate_event(candidate: EventCandidate) -> Result<NewEvent, ValidationFailure> {
    let mut failure = check(&candidate);

    let min_lengths = [
        ("title", &candidate.title, 3, "Title must be at least 3 characters"),
        ("location", &candidate.location, 3, "Location is required"),
        ("description", &candidate.description, 10, "Description must be at least 10 characters"),
    ];
    for (field, value, min, message) in min_lengths {
        if utf16_len(value) < min {
            failure.push(field, message);
        }
    }

    let category = candidate.category.parse::<Category>();
    if category.is_err() {
        failure.push("category", CATEGORY_MESSAGE);
    }

    match category {
        Ok(category) if failure.errors.is_empty() => Ok(NewEvent {
            title: candidate.title,
            date: candidate.date,
            time: candidate.time,
            location: candidate.location,
            description: candidate.description,
            category,
        }),
        _ => Err(failure.sorted()),
    }
}

/// Validates a user candidate
///
/// Only presence is checked; there are no length or character-set rules.
pub fn validate_user(candidate: UserCandidate) -> Result<NewUser, ValidationFailure> {
    let failure = check(&candidate);
    if !failure.errors.is_empty() {
        return Err(failure.sorted());
    }

    Ok(NewUser {
        username: candidate.username,
        password: candidate.password,
    })
}
