use std::{fs, path::Path};

use crate::domain::project::ProjectRecord;

pub const OUTPUT_FILE: &str = "projects.json";

/// Writes the scraped records as a pretty-printed UTF-8 JSON array. Non-ASCII
/// text comes through unescaped.
pub fn save_projects(path: &Path, projects: &[ProjectRecord]) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(projects)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::save_projects;
    use crate::domain::project::ProjectRecord;

    fn record(code: &str, name: &str) -> ProjectRecord {
        ProjectRecord {
            code: code.to_string(),
            name: name.to_string(),
            project_type: "Real Estate Project".to_string(),
            phone: "N/A".to_string(),
            email: "N/A".to_string(),
            address: "Solan, Himachal Pradesh".to_string(),
            valid_upto: "31/12/2026".to_string(),
            pan: Some("AAACA1111A".to_string()),
            gstin: None,
        }
    }

    #[test]
    fn written_file_is_a_json_array_preserving_non_ascii() {
        let path = std::env::temp_dir().join("rera_scrape_sink_test.json");
        let projects = vec![
            record("RERAHPSOP05170092", "आश्रय Heights"),
            record("RERAHPSOP05170093", "Pine View"),
        ];

        save_projects(&path, &projects).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("आश्रय Heights"));

        let parsed: serde_json::Value = serde_json::from_str(&written).unwrap();
        let array = parsed.as_array().unwrap();
        assert_eq!(array.len(), 2);
        assert_eq!(array[0]["Code"], "RERAHPSOP05170092");

        std::fs::remove_file(&path).unwrap();
    }
}
