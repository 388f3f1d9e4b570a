//! Application record DTOs.
//!
//! The persisted layout is a bare JSON array of these objects, one per
//! record, in collection order.

use serde::{Deserialize, Serialize};

use jobtrack_core::application::{ApplicationRecord, ApplicationStatus};

/// Persisted form of an application record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationRecordV1 {
    pub id: u64,
    pub company_name: String,
    pub job_title: String,
    pub date_applied: String,
    /// One of the literal strings `Applied`, `Interview`, `Offer`, `Rejected`.
    pub status: ApplicationStatus,
    #[serde(default)]
    pub details: String,
}

impl From<&ApplicationRecord> for ApplicationRecordV1 {
    fn from(record: &ApplicationRecord) -> Self {
        ApplicationRecordV1 {
            id: record.id,
            company_name: record.company_name.clone(),
            job_title: record.job_title.clone(),
            date_applied: record.date_applied.clone(),
            status: record.status,
            details: record.details.clone(),
        }
    }
}

impl From<ApplicationRecordV1> for ApplicationRecord {
    fn from(dto: ApplicationRecordV1) -> Self {
        ApplicationRecord {
            id: dto.id,
            company_name: dto.company_name,
            job_title: dto.job_title,
            date_applied: dto.date_applied,
            status: dto.status,
            details: dto.details,
        }
    }
}

/// Serializes a collection into the persisted JSON array.
pub fn encode_collection(records: &[ApplicationRecord]) -> serde_json::Result<String> {
    let dtos: Vec<ApplicationRecordV1> = records.iter().map(Into::into).collect();
    serde_json::to_string(&dtos)
}

/// Parses the persisted JSON array back into domain records.
pub fn decode_collection(raw: &str) -> serde_json::Result<Vec<ApplicationRecord>> {
    let dtos: Vec<ApplicationRecordV1> = serde_json::from_str(raw)?;
    Ok(dtos.into_iter().map(Into::into).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_field_names() {
        let record = ApplicationRecord {
            id: 42,
            company_name: "Acme".to_string(),
            job_title: "Engineer".to_string(),
            date_applied: "2024-03-01".to_string(),
            status: ApplicationStatus::Interview,
            details: String::new(),
        };

        let json = encode_collection(std::slice::from_ref(&record)).unwrap();
        assert_eq!(
            json,
            r#"[{"id":42,"companyName":"Acme","jobTitle":"Engineer","dateApplied":"2024-03-01","status":"Interview","details":""}]"#
        );
    }

    #[test]
    fn test_decode_tolerates_missing_details() {
        let raw = r#"[{"id":1,"companyName":"A","jobTitle":"B","dateApplied":"2024-01-01","status":"Offer"}]"#;
        let records = decode_collection(raw).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].details, "");
        assert_eq!(records[0].status, ApplicationStatus::Offer);
    }

    #[test]
    fn test_decode_rejects_unknown_status() {
        let raw = r#"[{"id":1,"companyName":"A","jobTitle":"B","dateApplied":"2024-01-01","status":"Ghosted","details":""}]"#;
        assert!(decode_collection(raw).is_err());
    }

    #[test]
    fn test_decode_rejects_non_array() {
        assert!(decode_collection(r#"{"id":1}"#).is_err());
        assert!(decode_collection("not json").is_err());
    }
}
