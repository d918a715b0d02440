use crate::dedup::DedupOutcome;
use crate::import::ImportReport;
use owo_colors::OwoColorize;

pub struct CommandSummary {
    pub prefix: String,
    pub message: String,
}

impl CommandSummary {
    pub fn import(report: &ImportReport) -> Self {
        let prefix = if report.imported > 0 {
            "✓".green().to_string()
        } else {
            "•".yellow().to_string()
        };
        Self {
            prefix,
            message: report.message(),
        }
    }

    pub fn dedup(outcome: &DedupOutcome) -> Self {
        match (outcome.removed, outcome.stale) {
            (r, 0) if r > 0 => Self {
                prefix: "✓".green().to_string(),
                message: format!("Removed {} duplicate entries.", r),
            },
            (r, s) if s > 0 => Self {
                prefix: "!".yellow().to_string(),
                message: format!(
                    "Removed {} duplicate entries; {} changed since the scan and were kept.",
                    r, s
                ),
            },
            _ => Self {
                prefix: "•".yellow().to_string(),
                message: "No duplicate entries removed.".to_string(),
            },
        }
    }

    pub fn print(&self) {
        println!("{} {}", self.prefix, self.message);
    }
}
