use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Housing {
    Dorm,
    Apartment,
    CoOp,
    Greek,
    Family,
    Commuter,
}

impl Housing {
    pub const ALL: [Housing; 6] = [
        Housing::Dorm,
        Housing::Apartment,
        Housing::CoOp,
        Housing::Greek,
        Housing::Family,
        Housing::Commuter,
    ];

    /// `<option>` value, also the stored text.
    pub fn value(&self) -> &'static str {
        match self {
            Housing::Dorm => "dorm",
            Housing::Apartment => "apartment",
            Housing::CoOp => "co-op",
            Housing::Greek => "greek",
            Housing::Family => "family",
            Housing::Commuter => "commuter",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Housing::Dorm => "Residence Hall",
            Housing::Apartment => "Apartment",
            Housing::CoOp => "Co-op",
            Housing::Greek => "Greek Housing",
            Housing::Family => "Family Housing",
            Housing::Commuter => "Commuter",
        }
    }
}

impl FromStr for Housing {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Housing::ALL.into_iter().find(|h| h.value() == s).ok_or(())
    }
}

impl fmt::Display for Housing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SignupStatus {
    #[default]
    Active,
}

/// Raw form input, exactly as typed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub housing: String,
}

/// Validated signup ready to be written. The timestamp is left to the store.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct NewSignup {
    pub name: String,
    pub email: String,
    pub housing: Housing,
    pub status: SignupStatus,
}

/// A signup as read back from a store.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SignupRecord {
    pub name: String,
    pub email: String,
    pub housing: Housing,
    #[serde(default)]
    pub submitted_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub status: SignupStatus,
}

impl SignupRecord {
    pub fn from_new(signup: &NewSignup, submitted_at: DateTime<Utc>) -> Self {
        Self {
            name: signup.name.clone(),
            email: signup.email.clone(),
            housing: signup.housing,
            submitted_at: Some(submitted_at),
            status: signup.status,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Error,
}

impl Severity {
    pub fn class(&self) -> &'static str {
        match self {
            Severity::Info => "notification-info",
            Severity::Success => "notification-success",
            Severity::Error => "notification-error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn housing_parses_option_values_only() {
        assert_eq!("co-op".parse::<Housing>(), Ok(Housing::CoOp));
        assert_eq!("dorm".parse::<Housing>(), Ok(Housing::Dorm));
        assert!("Dorm".parse::<Housing>().is_err());
        assert!("".parse::<Housing>().is_err());
    }

    #[test]
    fn new_signup_serializes_without_timestamp() {
        let signup = NewSignup {
            name: "Jane".into(),
            email: "jane@berkeley.edu".into(),
            housing: Housing::CoOp,
            status: SignupStatus::Active,
        };
        let json = serde_json::to_value(&signup).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Jane",
                "email": "jane@berkeley.edu",
                "housing": "co-op",
                "status": "active"
            })
        );
    }

    #[test]
    fn record_reads_server_timestamp() {
        let record: SignupRecord = serde_json::from_str(
            r#"{"name":"Jane","email":"jane@berkeley.edu","housing":"dorm",
                "submitted_at":"2025-02-01T18:30:00.123456+00:00","status":"active"}"#,
        )
        .unwrap();
        assert_eq!(record.housing, Housing::Dorm);
        assert!(record.submitted_at.is_some());
    }
}
