/// Contact form submission models
use crate::error::RelayError;
use crate::utils::validation::{non_blank, validate_email_address};
use serde::{Deserialize, Serialize};

/// Raw form submission as posted by the website
///
/// Every field is optional here so that absent, `null` and blank values are
/// all reported by [`ContactSubmission::validate`] instead of failing to parse.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub service: Option<String>,
    #[serde(default)]
    pub origin: Option<String>,
    #[serde(default)]
    pub destination: Option<String>,
    #[serde(default)]
    pub cargo_details: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// A submission that passed validation, with blank optional fields dropped
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidSubmission {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub service: String,
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub cargo_details: Option<String>,
    pub message: String,
}

impl ContactSubmission {
    /// Parses a submission from a raw JSON request body
    pub fn from_json(body: &[u8]) -> Result<Self, RelayError> {
        Ok(serde_json::from_slice(body)?)
    }

    /// Checks required fields and the email format
    ///
    /// Missing fields are reported together, in form order. The email format
    /// is only checked once every required field is present.
    pub fn validate(self) -> Result<ValidSubmission, RelayError> {
        let first_name = non_blank(self.first_name);
        let last_name = non_blank(self.last_name);
        // The address is checked as submitted, surrounding whitespace included
        let email = self.email.filter(|email| !email.trim().is_empty());
        let service = non_blank(self.service);
        let message = non_blank(self.message);

        let mut missing = Vec::new();
        if first_name.is_none() {
            missing.push("firstName");
        }
        if last_name.is_none() {
            missing.push("lastName");
        }
        if email.is_none() {
            missing.push("email");
        }
        if service.is_none() {
            missing.push("service");
        }
        if message.is_none() {
            missing.push("message");
        }

        let (Some(first_name), Some(last_name), Some(email), Some(service), Some(message)) =
            (first_name, last_name, email, service, message)
        else {
            return Err(RelayError::MissingFields(missing));
        };

        validate_email_address(&email)?;

        Ok(ValidSubmission {
            first_name,
            last_name,
            email,
            phone: non_blank(self.phone),
            company: non_blank(self.company),
            service,
            origin: non_blank(self.origin),
            destination: non_blank(self.destination),
            cargo_details: non_blank(self.cargo_details),
            message,
        })
    }
}

impl ValidSubmission {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
