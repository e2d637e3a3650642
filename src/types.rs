//! Run options and outcomes shared by the pipeline, config, and CLI

use serde::{Deserialize, Serialize};

/// What to do when the target file already exists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverwritePolicy {
    #[default]
    Overwrite,
    Skip,
}

/// What to do when one image fails to download or save
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Stop at the first failure (remaining images are not attempted)
    #[default]
    Abort,
    /// Record the failure and move on to the next image
    Continue,
}

/// Result of persisting one image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Written,
    SkippedExisting,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedImage {
    pub url: String,
    pub error: String,
}

/// Per-run tally of what happened to the candidates
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DownloadReport {
    pub candidates: usize,
    pub excluded: usize,
    pub written: Vec<String>,
    pub skipped: Vec<String>,
    pub failed: Vec<FailedImage>,
}

impl DownloadReport {
    /// Images that passed the filter
    pub fn kept(&self) -> usize {
        self.candidates - self.excluded
    }

    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn summary(&self) -> String {
        let mut line = format!("Downloaded {} of {} images", self.written.len(), self.kept());
        if !self.skipped.is_empty() {
            line.push_str(&format!(", {} already present", self.skipped.len()));
        }
        if !self.failed.is_empty() {
            line.push_str(&format!(", {} failed", self.failed.len()));
        }
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_summary() {
        let mut report = DownloadReport {
            candidates: 5,
            excluded: 2,
            written: vec!["a.jpg".into(), "b.jpg".into()],
            ..Default::default()
        };
        assert_eq!(report.kept(), 3);
        assert!(report.is_complete());
        assert_eq!(report.summary(), "Downloaded 2 of 3 images");

        report.failed.push(FailedImage {
            url: "https://cdn.shopify.com/s/files/c.jpg".into(),
            error: "boom".into(),
        });
        assert!(!report.is_complete());
        assert_eq!(report.summary(), "Downloaded 2 of 3 images, 1 failed");
    }

    #[test]
    fn test_policies_parse_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            overwrite: OverwritePolicy,
            on_failure: FailurePolicy,
        }
        let w: Wrapper = toml::from_str("overwrite = \"skip\"\non_failure = \"continue\"").unwrap();
        assert_eq!(w.overwrite, OverwritePolicy::Skip);
        assert_eq!(w.on_failure, FailurePolicy::Continue);
    }
}
