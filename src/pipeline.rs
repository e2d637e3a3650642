//! Page -> candidates -> filter -> download -> disk, one image at a time

use std::io::{BufRead, Write};

use url::Url;

use crate::console::Console;
use crate::error::ScrapeError;
use crate::extract::extract_candidate_images;
use crate::fetch::Fetch;
use crate::filter::ImageFilter;
use crate::naming::ProductNames;
use crate::storage::ImageStore;
use crate::types::{DownloadReport, FailedImage, FailurePolicy, SaveOutcome};
use crate::urls::{file_name_from_url, parse_page_url, resolve_image_url};

pub struct ProductScraper<'a, F> {
    fetcher: &'a F,
    store: ImageStore,
    on_failure: FailurePolicy,
    deny_list: Option<Vec<String>>,
}

impl<'a, F: Fetch> ProductScraper<'a, F> {
    pub fn new(fetcher: &'a F, store: ImageStore) -> Self {
        Self {
            fetcher,
            store,
            on_failure: FailurePolicy::default(),
            deny_list: None,
        }
    }

    pub fn on_failure(mut self, policy: FailurePolicy) -> Self {
        self.on_failure = policy;
        self
    }

    /// Exclude decorative images matching `entries` in addition to the product filter
    pub fn exclude_decorative(mut self, entries: Vec<String>) -> Self {
        self.deny_list = Some(entries);
        self
    }

    pub fn store(&self) -> &ImageStore {
        &self.store
    }

    /// Download every product image on the page into the product's folder
    pub fn run<R: BufRead, W: Write>(
        &self,
        page_url: &str,
        console: &mut Console<R, W>,
    ) -> Result<DownloadReport, ScrapeError> {
        let names = ProductNames::from_url(page_url);
        let page = parse_page_url(page_url)?;
        tracing::info!(product = %names.product, folder = %names.folder, "scraping product page");

        let html = self.fetcher.fetch_text(page.as_str())?;
        let candidates = extract_candidate_images(&html)?;

        let mut filter = ImageFilter::new(&names.product);
        if let Some(deny) = &self.deny_list {
            filter = filter.with_deny_list(deny);
        }

        let mut report = DownloadReport {
            candidates: candidates.len(),
            ..Default::default()
        };

        for candidate in &candidates {
            if let Err(reason) = filter.check(candidate) {
                tracing::debug!(url = %candidate, ?reason, "excluded");
                console.progress(&format!("Excluded image URL: {}", candidate));
                report.excluded += 1;
                continue;
            }

            let result = resolve_image_url(candidate, &page).and_then(|image_url| {
                console.progress(&format!("Processing image URL: {}", image_url));
                self.download_image(&image_url, &names.folder)
            });

            match result {
                Ok((file_name, SaveOutcome::Written)) => report.written.push(file_name),
                Ok((file_name, SaveOutcome::SkippedExisting)) => {
                    console.progress(&format!("Already present: {}", file_name));
                    report.skipped.push(file_name);
                }
                Err(err) => match self.on_failure {
                    FailurePolicy::Abort => return Err(err),
                    FailurePolicy::Continue => {
                        tracing::warn!(url = %candidate, error = %err, "image failed, continuing");
                        console.progress(&format!("Failed image URL: {} ({})", candidate, err));
                        report.failed.push(FailedImage {
                            url: candidate.clone(),
                            error: err.to_string(),
                        });
                    }
                },
            }
        }

        tracing::info!(
            written = report.written.len(),
            excluded = report.excluded,
            failed = report.failed.len(),
            "finished"
        );
        Ok(report)
    }

    fn download_image(&self, url: &Url, folder: &str) -> Result<(String, SaveOutcome), ScrapeError> {
        let file_name =
            file_name_from_url(url).ok_or_else(|| ScrapeError::NoFileName(url.to_string()))?;
        let bytes = self.fetcher.fetch_bytes(url.as_str())?;
        let outcome = self.store.save(folder, &file_name, &bytes)?;
        Ok((file_name, outcome))
    }
}
