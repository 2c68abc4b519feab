//! The complaint record model.
//!
//! Defines the stored entity ([`Complaint`]), its processing status
//! ([`ComplaintStatus`]), and the validated input carrier
//! ([`ComplaintDraft`]) that the HTTP layer hands to a backend.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Processing status of a complaint.
///
/// A closed set of three states. Transitions are unrestricted - a resolved
/// complaint may be reopened by setting it back to pending. Any string other
/// than the three wire forms is rejected at the validation boundary, never
/// at the storage boundary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComplaintStatus {
    /// Newly submitted, not yet picked up.
    #[default]
    Pending,
    /// An administrator is working on it.
    #[serde(rename = "In Progress")]
    InProgress,
    /// Closed out.
    Resolved,
}

impl ComplaintStatus {
    /// The wire form of the status, as stored and served.
    pub const fn as_str(self) -> &'static str {
        match self {
            ComplaintStatus::Pending => "Pending",
            ComplaintStatus::InProgress => "In Progress",
            ComplaintStatus::Resolved => "Resolved",
        }
    }
}

impl fmt::Display for ComplaintStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unrecognized status string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid status {0:?}, expected one of: Pending, In Progress, Resolved")]
pub struct InvalidStatus(pub String);

impl FromStr for ComplaintStatus {
    type Err = InvalidStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(ComplaintStatus::Pending),
            "In Progress" => Ok(ComplaintStatus::InProgress),
            "Resolved" => Ok(ComplaintStatus::Resolved),
            other => Err(InvalidStatus(other.to_string())),
        }
    }
}

/// Validated complaint input, ready to persist.
///
/// Produced by the HTTP layer's validation pass: text fields are trimmed,
/// the email is lower-cased, and the mobile number is exactly ten digits.
/// A draft carries everything a caller supplies; id, status, and creation
/// time are assigned by the store on insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComplaintDraft {
    /// Complainant name, non-empty.
    pub name: String,
    /// Mobile number, exactly 10 decimal digits.
    pub mobile: String,
    /// Lower-cased, well-formed email address.
    pub email: String,
    /// Postal address, non-empty.
    pub address: String,
    /// Free-text complaint description, non-empty.
    pub complaint: String,
}

/// A stored complaint record.
///
/// The JSON wire form uses camelCase keys (`createdAt`). `id` is an opaque
/// backend-generated identifier: a BSON ObjectId hex string for MongoDB, a
/// UUID for the in-memory backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Complaint {
    /// Opaque unique identifier, immutable.
    pub id: String,
    /// Complainant name.
    pub name: String,
    /// Mobile number.
    pub mobile: String,
    /// Email address.
    pub email: String,
    /// Postal address.
    pub address: String,
    /// Complaint description.
    pub complaint: String,
    /// Processing status. The only mutable field.
    pub status: ComplaintStatus,
    /// Creation timestamp, set once at insert.
    pub created_at: DateTime<Utc>,
}

impl Complaint {
    /// Builds a record from a validated draft.
    ///
    /// Only backends construct records; everything else receives them from
    /// the store.
    pub(crate) fn from_draft(draft: ComplaintDraft, id: String, created_at: DateTime<Utc>) -> Self {
        Complaint {
            id,
            name: draft.name,
            mobile: draft.mobile,
            email: draft.email,
            address: draft.address,
            complaint: draft.complaint,
            status: ComplaintStatus::Pending,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> ComplaintDraft {
        ComplaintDraft {
            name: "Ravi".to_string(),
            mobile: "9876543210".to_string(),
            email: "ravi@test.com".to_string(),
            address: "Patna".to_string(),
            complaint: "Streetlight broken".to_string(),
        }
    }

    #[test]
    fn test_status_wire_strings() {
        assert_eq!(
            serde_json::to_value(ComplaintStatus::Pending).unwrap(),
            "Pending"
        );
        assert_eq!(
            serde_json::to_value(ComplaintStatus::InProgress).unwrap(),
            "In Progress"
        );
        assert_eq!(
            serde_json::to_value(ComplaintStatus::Resolved).unwrap(),
            "Resolved"
        );
    }

    #[test]
    fn test_status_parse_round_trip() {
        for status in [
            ComplaintStatus::Pending,
            ComplaintStatus::InProgress,
            ComplaintStatus::Resolved,
        ] {
            assert_eq!(status.as_str().parse::<ComplaintStatus>(), Ok(status));
        }
    }

    #[test]
    fn test_status_parse_rejects_unknown() {
        assert!("pending".parse::<ComplaintStatus>().is_err());
        assert!("Closed".parse::<ComplaintStatus>().is_err());
        assert!("".parse::<ComplaintStatus>().is_err());
    }

    #[test]
    fn test_status_defaults_to_pending() {
        assert_eq!(ComplaintStatus::default(), ComplaintStatus::Pending);
    }

    #[test]
    fn test_record_from_draft() {
        let now = Utc::now();
        let record = Complaint::from_draft(draft(), "abc123".to_string(), now);

        assert_eq!(record.id, "abc123");
        assert_eq!(record.status, ComplaintStatus::Pending);
        assert_eq!(record.created_at, now);
        assert_eq!(record.name, "Ravi");
    }

    #[test]
    fn test_record_serializes_camel_case() {
        let record = Complaint::from_draft(draft(), "abc123".to_string(), Utc::now());
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["id"], "abc123");
        assert_eq!(json["status"], "Pending");
        assert!(json.get("createdAt").is_some());
        assert!(json.get("created_at").is_none());
    }
}
