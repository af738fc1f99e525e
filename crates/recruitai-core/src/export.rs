use crate::{
    models::{format_date, Candidate},
    Error, Result,
};
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
    Markdown,
}

impl ExportFormat {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "json" => Some(ExportFormat::Json),
            "csv" => Some(ExportFormat::Csv),
            "md" | "markdown" => Some(ExportFormat::Markdown),
            _ => None,
        }
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }
}

/// Writes candidate lists out for spreadsheets, scripts and reports
pub struct Exporter;

impl Exporter {
    /// Format comes from the extension: .json, .csv or .md
    pub fn export_to_file<P: AsRef<Path>>(candidates: &[Candidate], path: P) -> Result<()> {
        let path = path.as_ref();
        let format = ExportFormat::from_path(path).ok_or_else(|| {
            Error::InvalidInput(
                "Could not determine export format from extension. Use .json, .csv, or .md"
                    .to_string(),
            )
        })?;

        let content = match format {
            ExportFormat::Json => Self::to_json(candidates)?,
            ExportFormat::Csv => Self::to_csv(candidates),
            ExportFormat::Markdown => Self::to_markdown(candidates),
        };

        std::fs::write(path, content)?;
        tracing::info!(
            "Exported {} candidates to {}",
            candidates.len(),
            path.display()
        );
        Ok(())
    }

    pub fn to_json(candidates: &[Candidate]) -> Result<String> {
        Ok(serde_json::to_string_pretty(candidates)?)
    }

    pub fn to_csv(candidates: &[Candidate]) -> String {
        let mut output = String::from("ID,Filename,Email,Uploaded,Skills,Education,Experience\n");

        for candidate in candidates {
            output.push_str(&format!(
                "{},{},{},{},{},{},{}\n",
                Self::escape_csv(&candidate.id),
                Self::escape_csv(&candidate.filename),
                Self::escape_csv(candidate.email().unwrap_or("")),
                format_date(candidate.upload_date),
                Self::escape_csv(&candidate.skills.join("; ")),
                Self::escape_csv(&candidate.education.join("; ")),
                Self::escape_csv(&candidate.experience.join("; ")),
            ));
        }

        output
    }

    pub fn to_markdown(candidates: &[Candidate]) -> String {
        let mut output = String::from("# Candidate Database\n\n");
        output.push_str(&format!("Total candidates: {}\n\n---\n\n", candidates.len()));

        for candidate in candidates {
            output.push_str(&format!("## {}\n\n", candidate.filename));
            output.push_str(&format!(
                "**ID:** `{}` | **Uploaded:** {}\n\n",
                candidate.id,
                format_date(candidate.upload_date)
            ));
            if let Some(email) = candidate.email() {
                output.push_str(&format!("**Email:** {}\n\n", email));
            }
            if !candidate.skills.is_empty() {
                let skills: Vec<String> =
                    candidate.skills.iter().map(|s| format!("`{}`", s)).collect();
                output.push_str(&format!("**Skills:** {}\n\n", skills.join(", ")));
            }
            for (heading, items) in [
                ("Experience", &candidate.experience),
                ("Education", &candidate.education),
            ] {
                if items.is_empty() {
                    continue;
                }
                output.push_str(&format!("### {}\n\n", heading));
                for item in items {
                    output.push_str(&format!("- {}\n", item));
                }
                output.push('\n');
            }
            output.push_str("---\n\n");
        }

        if !candidates.is_empty() {
            output.push_str("## Skill Summary\n\n");
            let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
            for skill in candidates.iter().flat_map(|c| c.skills.iter()) {
                *counts.entry(skill.as_str()).or_insert(0) += 1;
            }
            let mut ranked: Vec<(&str, usize)> = counts.into_iter().collect();
            ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
            for (skill, count) in ranked {
                output.push_str(&format!("- {}: {}\n", skill, count));
            }
        }

        output
    }

    fn escape_csv(s: &str) -> String {
        if s.contains(',') || s.contains('"') || s.contains('\n') {
            format!("\"{}\"", s.replace('"', "\"\""))
        } else {
            s.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CandidateMeta;
    use tempfile::TempDir;

    fn sample() -> Vec<Candidate> {
        let mut meta = CandidateMeta::default();
        meta.entities
            .insert("EMAIL".to_string(), vec!["jane@example.com".to_string()]);
        vec![
            Candidate {
                id: "c1".to_string(),
                filename: "jane, doe.pdf".to_string(),
                upload_date: None,
                text_raw: None,
                skills: vec!["Go".to_string(), "SQL".to_string()],
                education: vec!["BSc Computer Science".to_string()],
                experience: vec!["Acme Corp".to_string()],
                meta,
            },
            Candidate {
                id: "c2".to_string(),
                filename: "r.pdf".to_string(),
                upload_date: None,
                text_raw: None,
                skills: vec!["SQL".to_string()],
                education: Vec::new(),
                experience: Vec::new(),
                meta: CandidateMeta::default(),
            },
        ]
    }

    #[test]
    fn test_export_format_detection() {
        assert_eq!(ExportFormat::from_extension("JSON"), Some(ExportFormat::Json));
        assert_eq!(ExportFormat::from_extension("csv"), Some(ExportFormat::Csv));
        assert_eq!(
            ExportFormat::from_extension("markdown"),
            Some(ExportFormat::Markdown)
        );
        assert_eq!(ExportFormat::from_extension("txt"), None);
    }

    #[test]
    fn test_csv_export() {
        let csv = Exporter::to_csv(&sample());
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "ID,Filename,Email,Uploaded,Skills,Education,Experience");
        assert_eq!(
            lines[1],
            "c1,\"jane, doe.pdf\",jane@example.com,Unknown date,Go; SQL,BSc Computer Science,Acme Corp"
        );
        assert_eq!(lines[2], "c2,r.pdf,,Unknown date,SQL,,");
    }

    #[test]
    fn test_markdown_export() {
        let md = Exporter::to_markdown(&sample());
        assert!(md.starts_with("# Candidate Database"));
        assert!(md.contains("Total candidates: 2"));
        assert!(md.contains("**Skills:** `Go`, `SQL`"));
        assert!(md.contains("### Experience\n\n- Acme Corp"));
        assert!(md.contains("- SQL: 2\n- Go: 1"));
    }

    #[test]
    fn test_export_to_file_by_extension() {
        let temp_dir = TempDir::new().unwrap();

        let json_path = temp_dir.path().join("candidates.json");
        Exporter::export_to_file(&sample(), &json_path).unwrap();
        let parsed: Vec<Candidate> =
            serde_json::from_str(&std::fs::read_to_string(&json_path).unwrap()).unwrap();
        assert_eq!(parsed, sample());

        let bad = temp_dir.path().join("candidates.xlsx");
        assert!(matches!(
            Exporter::export_to_file(&sample(), &bad),
            Err(Error::InvalidInput(_))
        ));
        assert!(!bad.exists());
    }

    #[test]
    fn test_csv_escaping() {
        assert_eq!(Exporter::escape_csv("simple"), "simple");
        assert_eq!(Exporter::escape_csv("with\"quote"), "\"with\"\"quote\"");
    }
}
