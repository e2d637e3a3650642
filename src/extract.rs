use scraper::{Html, Selector};

use crate::error::ScrapeError;

pub const CDN_HOST: &str = "cdn.shopify.com";
pub const CDN_FILES_PATH: &str = "/files/";

/// Collect the `src` of every `img` served from the store's CDN file area,
/// in document order. Fails when the page has none.
pub fn extract_candidate_images(html: &str) -> Result<Vec<String>, ScrapeError> {
    let document = Html::parse_document(html);
    let selector = Selector::parse(&format!(
        r#"img[src*="{}"][src*="{}"]"#,
        CDN_HOST, CDN_FILES_PATH
    ))
    .expect("static CDN image selector is valid");

    let candidates: Vec<String> = document
        .select(&selector)
        .filter_map(|img| img.value().attr("src"))
        .map(|src| src.to_string())
        .collect();

    if candidates.is_empty() {
        return Err(ScrapeError::NoImagesFound);
    }

    tracing::debug!(count = candidates.len(), "found CDN image candidates");
    Ok(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_cdn_images_in_document_order() {
        let html = r#"
            <html><body>
              <img src="//cdn.shopify.com/s/files/1/0001/blue-hoodie-front.jpg?v=1">
              <img src="https://example.com/logo.png">
              <div><img src="https://cdn.shopify.com/s/files/1/0001/blue-hoodie-back.jpg"></div>
              <img src="https://cdn.shopify.com/s/assets/badge.png">
              <img alt="no source">
            </body></html>
        "#;

        let images = extract_candidate_images(html).unwrap();
        assert_eq!(
            images,
            vec![
                "//cdn.shopify.com/s/files/1/0001/blue-hoodie-front.jpg?v=1",
                "https://cdn.shopify.com/s/files/1/0001/blue-hoodie-back.jpg",
            ]
        );
    }

    #[test]
    fn test_no_cdn_images_is_an_error() {
        let html = r#"<html><body><img src="https://example.com/files/a.jpg"></body></html>"#;
        let err = extract_candidate_images(html).unwrap_err();
        assert!(matches!(err, ScrapeError::NoImagesFound));
        assert_eq!(err.to_string(), "No images found in the HTML.");
    }

    #[test]
    fn test_empty_page_is_an_error() {
        assert!(matches!(
            extract_candidate_images(""),
            Err(ScrapeError::NoImagesFound)
        ));
    }
}
