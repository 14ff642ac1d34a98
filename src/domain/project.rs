use serde::Serialize;

/// Placeholder for card fields whose span is missing from the listing.
pub const FIELD_PLACEHOLDER: &str = "N/A";

/// One scraped project listing: inline card fields plus the two identifiers
/// pulled from the detail popup. Built once per link, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectRecord {
    #[serde(rename = "Code")]
    pub code: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Type")]
    pub project_type: String,
    #[serde(rename = "Phone")]
    pub phone: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "Address")]
    pub address: String,
    #[serde(rename = "Valid Upto")]
    pub valid_upto: String,
    #[serde(rename = "PAN")]
    pub pan: Option<String>,
    #[serde(rename = "GSTIN")]
    pub gstin: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::ProjectRecord;

    #[test]
    fn record_serializes_with_dashboard_field_names() {
        let record = ProjectRecord {
            code: "RERAHPSOP05170092".to_string(),
            name: "Aranya Vihar".to_string(),
            project_type: "Real Estate Project".to_string(),
            phone: "0177-2626464".to_string(),
            email: "contact@aranyavihar.in".to_string(),
            address: "Khalini, Shimla".to_string(),
            valid_upto: "31/12/2026".to_string(),
            pan: Some("AAACA1111A".to_string()),
            gstin: None,
        };

        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(value["Code"], "RERAHPSOP05170092");
        assert_eq!(value["Valid Upto"], "31/12/2026");
        assert_eq!(value["PAN"], "AAACA1111A");
        assert!(value["GSTIN"].is_null());
    }
}
