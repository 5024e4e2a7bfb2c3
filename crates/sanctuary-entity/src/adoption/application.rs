//! Adoption questionnaire payload.

use serde::{Deserialize, Serialize};
use validator::Validate;

use sanctuary_core::{AppError, AppResult};

/// Current questionnaire schema version.
pub const APPLICATION_SCHEMA_VERSION: u32 = 1;

/// The adoption application questionnaire.
///
/// Stored as a single versioned JSONB document on the adoption request.
/// There is exactly one schema; readers never fall back to legacy shapes.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ApplicationData {
    /// Questionnaire schema version.
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,
    /// Applicant first name.
    #[validate(length(min = 1))]
    pub first_name: String,
    /// Applicant last name.
    #[validate(length(min = 1))]
    pub last_name: String,
    /// Applicant email address.
    #[validate(email)]
    pub email: String,
    /// Applicant phone number.
    #[validate(length(min = 1))]
    pub phone: String,
    /// Preferred contact method.
    #[serde(default)]
    pub contact_method: Option<String>,
    /// Street address.
    #[validate(length(min = 1))]
    pub address: String,
    /// City.
    #[validate(length(min = 1))]
    pub city: String,
    /// State or province.
    #[validate(length(min = 1))]
    pub state: String,
    /// Postal code.
    #[validate(length(min = 1))]
    pub zip: String,
    /// Residence type (house, apartment, ...).
    #[validate(length(min = 1))]
    pub residence_type: String,
    /// Whether the applicant rents or owns.
    #[validate(length(min = 1))]
    pub rent_or_own: String,
    /// Who lives in the household.
    #[validate(length(min = 1))]
    pub household_members: String,
    /// Yard and fencing description.
    #[serde(default)]
    pub yard_description: Option<String>,
    /// Applicant occupation.
    #[serde(default)]
    pub occupation: Option<String>,
    /// Who cares for the dog during the day.
    #[serde(default)]
    pub daytime_care: Option<String>,
    /// Other pets currently in the home.
    #[serde(default)]
    pub other_pets: Option<String>,
    /// Prior experience with dogs.
    #[serde(default)]
    pub pet_experience: Option<String>,
    /// Why the applicant wants to adopt.
    #[serde(default)]
    pub adoption_reason: Option<String>,
    /// Veterinarian name and contact.
    #[serde(default)]
    pub veterinarian: Option<String>,
    /// Consent to spay/neuter requirements.
    pub agree_to_spay_neuter: bool,
    /// Commitment to training and socialization.
    pub training_commitment: bool,
    /// Consent to a pre-adoption home visit.
    pub consent_home_visit: bool,
    /// Acceptance of the adoption terms.
    pub agreed_to_terms: bool,
    /// Applicant signature (typed full name).
    #[validate(length(min = 1))]
    pub signature: String,
}

impl ApplicationData {
    /// Verify that the questionnaire is complete.
    ///
    /// Collects every missing or invalid field and every declined consent
    /// into a single validation error so the applicant can fix them all at
    /// once. Must pass before the request is stored.
    pub fn ensure_complete(&self) -> AppResult<()> {
        let mut invalid: Vec<String> = Vec::new();

        if let Err(errors) = self.validate() {
            for (field, _) in errors.field_errors() {
                invalid.push(field.to_string());
            }
        }

        if !self.agree_to_spay_neuter {
            invalid.push("agree_to_spay_neuter".to_string());
        }
        if !self.training_commitment {
            invalid.push("training_commitment".to_string());
        }
        if !self.consent_home_visit {
            invalid.push("consent_home_visit".to_string());
        }
        if !self.agreed_to_terms {
            invalid.push("agreed_to_terms".to_string());
        }

        if invalid.is_empty() {
            Ok(())
        } else {
            invalid.sort();
            Err(AppError::validation(format!(
                "Application is incomplete. Missing or invalid fields: {}",
                invalid.join(", ")
            )))
        }
    }
}

fn default_schema_version() -> u32 {
    APPLICATION_SCHEMA_VERSION
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_application() -> ApplicationData {
        ApplicationData {
            schema_version: APPLICATION_SCHEMA_VERSION,
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            email: "jane@example.com".to_string(),
            phone: "555-0100".to_string(),
            contact_method: Some("email".to_string()),
            address: "1 Main St".to_string(),
            city: "Springfield".to_string(),
            state: "IL".to_string(),
            zip: "62704".to_string(),
            residence_type: "house".to_string(),
            rent_or_own: "own".to_string(),
            household_members: "Jane, partner, two kids".to_string(),
            yard_description: Some("Fenced backyard".to_string()),
            occupation: Some("Librarian".to_string()),
            daytime_care: Some("Works from home".to_string()),
            other_pets: None,
            pet_experience: Some("Grew up with dogs".to_string()),
            adoption_reason: Some("Family companion".to_string()),
            veterinarian: None,
            agree_to_spay_neuter: true,
            training_commitment: true,
            consent_home_visit: true,
            agreed_to_terms: true,
            signature: "Jane Doe".to_string(),
        }
    }

    #[test]
    fn test_complete_application_passes() {
        assert!(complete_application().ensure_complete().is_ok());
    }

    #[test]
    fn test_missing_fields_are_named() {
        let mut app = complete_application();
        app.first_name = String::new();
        app.phone = String::new();

        let err = app.ensure_complete().unwrap_err();
        assert!(err.message.contains("first_name"));
        assert!(err.message.contains("phone"));
    }

    #[test]
    fn test_declined_consent_is_rejected() {
        let mut app = complete_application();
        app.agreed_to_terms = false;

        let err = app.ensure_complete().unwrap_err();
        assert!(err.message.contains("agreed_to_terms"));
    }
}
