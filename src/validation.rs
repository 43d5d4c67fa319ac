use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Field, ValidationError};
use crate::types::{Housing, NewSignup, SignupForm, SignupStatus};

static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern"));

/// Acceptance rule for campus addresses.
#[derive(Clone, Debug)]
pub struct EmailRules {
    pub institution: String,
    pub accepted_domains: Vec<String>,
}

impl EmailRules {
    pub fn is_institutional(&self, email: &str) -> bool {
        self.accepted_domains.iter().any(|d| email.contains(d.as_str()))
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL.is_match(email)
}

pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Check the raw form and produce the record to write.
pub fn validate(form: &SignupForm, rules: &EmailRules) -> Result<NewSignup, ValidationError> {
    let name = form.name.trim();
    let email = normalize_email(&form.email);
    let housing = form.housing.trim().parse::<Housing>().ok();

    if name.is_empty() {
        return Err(ValidationError::MissingField(Field::Name));
    }
    if email.is_empty() {
        return Err(ValidationError::MissingField(Field::Email));
    }
    let Some(housing) = housing else {
        return Err(ValidationError::MissingField(Field::Housing));
    };

    if !is_valid_email(&email) {
        return Err(ValidationError::InvalidEmail);
    }
    if !rules.is_institutional(&email) {
        return Err(ValidationError::NotInstitutional {
            institution: rules.institution.clone(),
        });
    }

    Ok(NewSignup {
        name: name.to_string(),
        email,
        housing,
        status: SignupStatus::Active,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn rules() -> EmailRules {
        EmailRules {
            institution: "Berkeley".into(),
            accepted_domains: vec!["berkeley.edu".into(), "cal.berkeley.edu".into()],
        }
    }

    fn form(name: &str, email: &str, housing: &str) -> SignupForm {
        SignupForm { name: name.into(), email: email.into(), housing: housing.into() }
    }

    #[test]
    fn normalizes_and_accepts_campus_email() {
        let signup = validate(&form(" Jane ", "  JANE@BERKELEY.EDU ", "dorm"), &rules()).unwrap();
        assert_eq!(signup.name, "Jane");
        assert_eq!(signup.email, "jane@berkeley.edu");
        assert_eq!(signup.housing, Housing::Dorm);
        assert_eq!(signup.status, SignupStatus::Active);
    }

    #[test]
    fn empty_fields_are_reported_first() {
        assert_eq!(
            validate(&form("", "not-an-email", "dorm"), &rules()),
            Err(ValidationError::MissingField(Field::Name))
        );
        assert_eq!(
            validate(&form("Jane", "   ", "dorm"), &rules()),
            Err(ValidationError::MissingField(Field::Email))
        );
        assert_eq!(
            validate(&form("Jane", "jane@berkeley.edu", ""), &rules()),
            Err(ValidationError::MissingField(Field::Housing))
        );
    }

    #[test]
    fn unknown_housing_counts_as_missing() {
        assert_eq!(
            validate(&form("Jane", "jane@berkeley.edu", "castle"), &rules()),
            Err(ValidationError::MissingField(Field::Housing))
        );
    }

    #[test]
    fn syntactic_check() {
        for bad in [
            "jane",
            "jane@berkeley",
            "@berkeley.edu",
            "jane doe@berkeley.edu",
            "jane@@berkeley.edu",
        ] {
            assert_eq!(
                validate(&form("Jane", bad, "dorm"), &rules()),
                Err(ValidationError::InvalidEmail),
                "{bad}"
            );
        }
        assert!(is_valid_email("oski@cal.berkeley.edu"));
    }

    #[test]
    fn requires_institutional_domain() {
        assert_eq!(
            validate(&form("Jane", "jane@gmail.com", "dorm"), &rules()),
            Err(ValidationError::NotInstitutional { institution: "Berkeley".into() })
        );
        assert!(validate(&form("Oski", "oski@cal.berkeley.edu", "co-op"), &rules()).is_ok());
    }
}
