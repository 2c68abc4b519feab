//! Input validation for complaint submissions.
//!
//! Pure functions, no I/O. Checks run in a fixed order - required fields,
//! then mobile format, then email format - and the first failure
//! short-circuits, so each rejected request reports exactly one rule.

use std::sync::LazyLock;

use intake_store::ComplaintDraft;
use regex::Regex;
use serde::Deserialize;

static MOBILE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10}$").expect("valid mobile regex"));

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// Raw complaint submission as received over the wire.
///
/// Every field is optional at the deserialization boundary; the
/// required-fields rule is a validation concern, not a parse error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ComplaintSubmission {
    /// Complainant name.
    #[serde(default)]
    pub name: Option<String>,
    /// Mobile number.
    #[serde(default)]
    pub mobile: Option<String>,
    /// Email address.
    #[serde(default)]
    pub email: Option<String>,
    /// Postal address.
    #[serde(default)]
    pub address: Option<String>,
    /// Complaint description.
    #[serde(default)]
    pub complaint: Option<String>,
}

/// Why a submission was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationFailure {
    /// One or more required fields are missing or blank.
    MissingFields,
    /// Mobile number is not exactly 10 decimal digits.
    InvalidMobile,
    /// Email address is not of the `local@domain.tld` shape.
    InvalidEmail,
}

impl ValidationFailure {
    /// User-facing message for the failed rule.
    pub const fn message(self) -> &'static str {
        match self {
            ValidationFailure::MissingFields => "All fields are required",
            ValidationFailure::InvalidMobile => "Mobile number must be exactly 10 digits",
            ValidationFailure::InvalidEmail => "Please provide a valid email address",
        }
    }
}

/// Validates a submission, producing a draft ready to persist.
///
/// The format checks run on the values exactly as submitted: stray
/// whitespace in the mobile number or email is rejected, not trimmed away.
/// Normalization applied on success: name and address are trimmed, the
/// email is lower-cased, the complaint text is kept as given.
pub fn validate(submission: &ComplaintSubmission) -> Result<ComplaintDraft, ValidationFailure> {
    let name = required(&submission.name)?;
    let mobile = required(&submission.mobile)?;
    let email = required(&submission.email)?;
    let address = required(&submission.address)?;
    let complaint = required(&submission.complaint)?;

    if !MOBILE_RE.is_match(mobile) {
        return Err(ValidationFailure::InvalidMobile);
    }

    let email = email.to_lowercase();
    if !EMAIL_RE.is_match(&email) {
        return Err(ValidationFailure::InvalidEmail);
    }

    Ok(ComplaintDraft {
        name: name.trim().to_string(),
        mobile: mobile.to_string(),
        email,
        address: address.trim().to_string(),
        complaint: complaint.to_string(),
    })
}

/// Rejects absent or blank values, passing the raw value through untouched.
fn required(field: &Option<String>) -> Result<&str, ValidationFailure> {
    field
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .ok_or(ValidationFailure::MissingFields)
}
