//! Plain-text report rendering and export.

use std::path::{Path, PathBuf};

use crate::domain::{Assessment, Language};
use crate::{i18n, MediscanError};

/// Render the downloadable summary for an assessment.
#[must_use]
pub fn render_report(
    assessment: &Assessment,
    lang: Language,
    generated_at: chrono::DateTime<chrono::Utc>,
) -> String {
    let severity_label = i18n::text(lang, i18n::severity_msg(assessment.severity));

    let mut report = String::new();
    report.push_str("MediScan - Screening Report\n");
    report.push_str("===========================\n\n");
    report.push_str(&format!("Disease Type: {}\n", assessment.disease));
    report.push_str(&format!("Risk Score: {}%\n", assessment.risk_score));
    report.push_str(&format!("Severity: {severity_label}\n\n"));
    report.push_str("Summary:\n");
    report.push_str(&format!(
        "- Total Questions: {}\n",
        assessment.total_questions
    ));
    report.push_str(&format!("- Positive Answers: {}\n", assessment.yes_count));
    report.push_str(&format!(
        "- Sometimes Answers: {}\n\n",
        assessment.sometimes_count
    ));
    report.push_str("Recommendations:\n");
    for (i, rec) in assessment.recommendations().iter().enumerate() {
        report.push_str(&format!("{}. {rec}\n", i + 1));
    }
    report.push_str(&format!(
        "\nGenerated on: {}\n",
        generated_at.to_rfc3339_opts(chrono::SecondsFormat::Secs, true)
    ));
    report
}

/// File name for an exported report: disease id plus a millisecond timestamp.
#[must_use]
pub fn report_file_name(
    assessment: &Assessment,
    generated_at: chrono::DateTime<chrono::Utc>,
) -> String {
    format!(
        "mediscan-report-{}-{}.txt",
        assessment.disease,
        generated_at.timestamp_millis()
    )
}

/// Write the report into `dir` and return the full path.
///
/// # Errors
/// Returns error if the file cannot be written.
pub fn export_report(
    dir: &Path,
    assessment: &Assessment,
    lang: Language,
) -> Result<PathBuf, MediscanError> {
    let now = chrono::Utc::now();
    let path = dir.join(report_file_name(assessment, now));
    std::fs::write(&path, render_report(assessment, lang, now))?;
    tracing::info!(path = %path.display(), "report exported");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Answer, Disease};

    fn severe_dengue() -> Assessment {
        let mut answers = vec![Answer::Yes; 8];
        answers.extend([Answer::Sometimes, Answer::Sometimes]);
        Assessment::from_answers(Disease::Dengue, &answers)
    }

    #[test]
    fn test_report_contains_summary_fields() {
        let report = render_report(&severe_dengue(), Language::English, chrono::Utc::now());
        assert!(report.contains("Disease Type: dengue"));
        assert!(report.contains("Risk Score: 90%"));
        assert!(report.contains("Severity: Severe"));
        assert!(report.contains("- Total Questions: 10"));
        assert!(report.contains("- Positive Answers: 8"));
        assert!(report.contains("- Sometimes Answers: 2"));
        assert!(report.contains("1. Seek emergency medical attention immediately"));
        assert!(report.contains("4. Follow hospital admission if recommended"));
        assert!(report.contains("Generated on: "));
    }

    #[test]
    fn test_severity_label_is_localized() {
        let report = render_report(&severe_dengue(), Language::Urdu, chrono::Utc::now());
        assert!(report.contains("شدید"));
    }

    #[test]
    fn test_export_writes_named_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let assessment = severe_dengue();

        let path = export_report(dir.path(), &assessment, Language::English).expect("Should write");
        let name = path.file_name().and_then(|n| n.to_str()).expect("name");
        assert!(name.starts_with("mediscan-report-dengue-"));
        assert!(name.ends_with(".txt"));

        let body = std::fs::read_to_string(&path).expect("Should read back");
        assert!(body.contains("Risk Score: 90%"));
    }
}
