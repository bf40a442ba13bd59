//! Report generation for ledger fraud analysis.
//!
//! Generates both JSON and human-readable text reports.

use std::fs;
use std::path::Path;

use color_eyre::eyre::{Context, Result};

use super::types::AnalysisReport;

/// Generate JSON report
pub fn generate_json_report(report: &AnalysisReport, output_path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(report)
        .context("Failed to serialize report to JSON")?;

    fs::write(output_path, json)
        .with_context(|| format!("Failed to write JSON report to {}", output_path.display()))?;

    log::info!("JSON report written to {}", output_path.display());
    Ok(())
}

/// Generate human-readable text report
pub fn generate_text_report(report: &AnalysisReport, output_path: &Path) -> Result<()> {
    let mut lines: Vec<String> = Vec::new();

    // Header
    lines.push("=".repeat(80));
    lines.push("                       LEDGER FRAUD RING ANALYSIS".to_string());
    lines.push("=".repeat(80));
    lines.push(String::new());

    lines.push(format!(
        "Analysis Date: {}",
        chrono::Utc::now().to_rfc3339()
    ));
    lines.push(format!(
        "Accounts Analyzed: {}",
        report.summary.total_accounts_analyzed
    ));
    lines.push(format!(
        "Accounts Flagged: {}",
        report.summary.suspicious_accounts_flagged
    ));
    lines.push(format!(
        "Fraud Rings: {}",
        report.summary.fraud_rings_detected
    ));
    lines.push(format!(
        "Processing Time: {:.2}s",
        report.summary.processing_time_seconds
    ));
    if report.summary.truncated {
        lines.push("NOTE: cycle search hit the configured cap; results are partial.".to_string());
    }
    lines.push(String::new());

    // Fraud rings
    if !report.fraud_rings.is_empty() {
        lines.push("=".repeat(80));
        lines.push("                             FRAUD RINGS".to_string());
        lines.push("=".repeat(80));
        lines.push(String::new());

        for ring in &report.fraud_rings {
            lines.push(format!(
                "{} (risk {:.1}): {}",
                ring.ring_id,
                ring.risk_score,
                ring.member_accounts.join(" -> ")
            ));
        }
        lines.push(String::new());
    }

    // Suspicious accounts
    if !report.suspicious_accounts.is_empty() {
        lines.push("=".repeat(80));
        lines.push("                         SUSPICIOUS ACCOUNTS".to_string());
        lines.push("=".repeat(80));
        lines.push(String::new());

        for (i, account) in report.suspicious_accounts.iter().take(20).enumerate() {
            lines.push(format!(
                "  {}. {} (score {:.1}, ring {}): {}",
                i + 1,
                account.account_id,
                account.suspicion_score,
                account.ring_id,
                account.detected_patterns.join(", ")
            ));
        }
        if report.suspicious_accounts.len() > 20 {
            lines.push(format!(
                "  ... and {} more (see JSON report)",
                report.suspicious_accounts.len() - 20
            ));
        }
        lines.push(String::new());

        if report.summary.fraud_rings_detected > 0 {
            lines.push(
                "RECOMMENDATION: Ring members show coordinated transfer loops.".to_string(),
            );
            lines.push("Escalate flagged rings for manual transaction review.".to_string());
        } else {
            lines.push(
                "RECOMMENDATION: Hub activity detected without transfer loops.".to_string(),
            );
            lines.push("Review flagged accounts against expected business volume.".to_string());
        }
        lines.push(String::new());
    }

    // Footer
    lines.push("=".repeat(80));

    let content = lines.join("\n");
    fs::write(output_path, content)
        .with_context(|| format!("Failed to write text report to {}", output_path.display()))?;

    log::info!("Text report written to {}", output_path.display());
    Ok(())
}

/// Print a summary to stdout
pub fn print_summary(report: &AnalysisReport) {
    println!("\n=== LEDGER FRAUD ANALYSIS SUMMARY ===\n");
    println!("Accounts analyzed: {}", report.summary.total_accounts_analyzed);
    println!(
        "Accounts flagged: {}",
        report.summary.suspicious_accounts_flagged
    );
    println!("Fraud rings: {}", report.summary.fraud_rings_detected);
    println!(
        "Processing time: {:.2}s",
        report.summary.processing_time_seconds
    );

    if report.summary.truncated {
        println!("Cycle search truncated at the configured cap (partial results).");
    }

    if !report.suspicious_accounts.is_empty() {
        println!("\nTop accounts:");
        for account in report.suspicious_accounts.iter().take(5) {
            println!(
                "  {} (score {:.1}, ring {})",
                account.account_id, account.suspicion_score, account.ring_id
            );
        }
    }

    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::types::{AnalysisSummary, FraudRing, SuspiciousAccount};

    fn sample_report() -> AnalysisReport {
        AnalysisReport {
            suspicious_accounts: vec![SuspiciousAccount {
                account_id: "ACC_9".to_string(),
                suspicion_score: 50.0,
                detected_patterns: vec!["cycle_length_3".to_string()],
                ring_id: "RING_001".to_string(),
            }],
            fraud_rings: vec![FraudRing {
                ring_id: "RING_001".to_string(),
                member_accounts: vec![
                    "ACC_9".to_string(),
                    "ACC_2".to_string(),
                    "ACC_5".to_string(),
                ],
                pattern_type: "cycle".to_string(),
                risk_score: 95.0,
            }],
            summary: AnalysisSummary {
                total_accounts_analyzed: 12,
                suspicious_accounts_flagged: 1,
                fraud_rings_detected: 1,
                processing_time_seconds: 0.03,
                truncated: false,
            },
        }
    }

    #[test]
    fn test_json_report_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fraud_report.json");

        generate_json_report(&sample_report(), &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let parsed: AnalysisReport = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed.fraud_rings[0].ring_id, "RING_001");
        assert_eq!(parsed.summary.total_accounts_analyzed, 12);
    }

    #[test]
    fn test_text_report_contains_sections() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.txt");

        generate_text_report(&sample_report(), &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("LEDGER FRAUD RING ANALYSIS"));
        assert!(content.contains("FRAUD RINGS"));
        assert!(content.contains("RING_001"));
        assert!(content.contains("ACC_9 -> ACC_2 -> ACC_5"));
        assert!(content.contains("SUSPICIOUS ACCOUNTS"));
    }
}
