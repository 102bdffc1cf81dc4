// src/types/candidate.rs
//! Candidate records as returned by the hiring JSON endpoint

use serde::{Deserialize, Deserializer, Serialize};

/// One applicant. Every field is kept as the literal string the server sent,
/// so large numeric ids never lose precision.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Candidate {
    #[serde(deserialize_with = "nullable")]
    pub applicant_id: String,
    #[serde(deserialize_with = "nullable")]
    pub archived: String,
    #[serde(deserialize_with = "nullable")]
    pub cover_letter_file_id: String,
    #[serde(deserialize_with = "nullable")]
    pub cover_letter_file_data_id: String,
    #[serde(deserialize_with = "nullable")]
    pub cover_letter_file_name: String,
    #[serde(deserialize_with = "nullable")]
    pub email: String,
    #[serde(deserialize_with = "nullable")]
    pub first_name: String,
    #[serde(deserialize_with = "nullable")]
    pub last_name: String,
    #[serde(deserialize_with = "nullable")]
    pub last_updated_date: String,
    #[serde(deserialize_with = "nullable")]
    pub phone: String,
    #[serde(deserialize_with = "nullable")]
    pub position_applicant_id: String,
    #[serde(deserialize_with = "nullable")]
    pub position_id: String,
    /// Resolved from `data.positions.byIds`, never part of the candidate object.
    #[serde(skip_deserializing)]
    pub position: String,
    #[serde(deserialize_with = "nullable")]
    pub rating: String,
    #[serde(deserialize_with = "nullable")]
    pub resume_file_id: String,
    #[serde(deserialize_with = "nullable")]
    pub resume_file_data_id: String,
    #[serde(deserialize_with = "nullable")]
    pub resume_file_name: String,
    #[serde(deserialize_with = "nullable")]
    pub status_id: String,
    #[serde(deserialize_with = "nullable")]
    pub date_added: String,
    pub linkedin_url: Option<String>,
    pub website_url: Option<String>,
}

impl Candidate {
    pub fn has_resume(&self) -> bool {
        !self.resume_file_id.trim().is_empty()
    }

    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

fn nullable<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_null_and_missing_fields_become_empty() {
        let candidate: Candidate = serde_json::from_value(json!({
            "applicantId": "12",
            "firstName": "Jane",
            "lastName": null,
            "linkedinUrl": "https://linkedin.com/in/jane"
        }))
        .unwrap();

        assert_eq!(candidate.applicant_id, "12");
        assert_eq!(candidate.last_name, "");
        assert_eq!(candidate.resume_file_id, "");
        assert_eq!(candidate.website_url, None);
        assert!(!candidate.has_resume());
        assert_eq!(candidate.display_name(), "Jane");
    }

    #[test]
    fn test_numeric_field_is_rejected() {
        let result: Result<Candidate, _> =
            serde_json::from_value(json!({ "applicantId": 12, "firstName": "Jane" }));
        assert!(result.is_err());
    }
}
