use url::Url;

use crate::error::ScrapeError;

pub fn parse_page_url(raw: &str) -> Result<Url, ScrapeError> {
    Url::parse(raw).map_err(|source| ScrapeError::InvalidUrl {
        url: raw.to_string(),
        source,
    })
}

/// Absolute candidates are used as-is, anything else is joined onto the page URL
pub fn resolve_image_url(candidate: &str, page: &Url) -> Result<Url, ScrapeError> {
    match Url::parse(candidate) {
        Ok(url) => Ok(url),
        Err(_) => page
            .join(candidate)
            .map_err(|source| ScrapeError::InvalidUrl {
                url: candidate.to_string(),
                source,
            }),
    }
}

/// Percent-decoded final path segment, e.g. ".../files/blue%20tee.jpg?v=2" -> "blue tee.jpg"
pub fn file_name_from_url(url: &Url) -> Option<String> {
    let last = url.path_segments()?.last()?;
    let decoded = percent_decode(last);
    let name = decoded.rsplit(|c: char| c == '/' || c == '\\').next().unwrap_or_default();
    if name.is_empty() || name == "." || name == ".." {
        None
    } else {
        Some(name.to_string())
    }
}

fn percent_decode(input: &str) -> String {
    let mut out = Vec::with_capacity(input.len());
    let bytes = input.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            if let (Some(high), Some(low)) = (hex_digit(bytes[i + 1]), hex_digit(bytes[i + 2])) {
                out.push(high << 4 | low);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn hex_digit(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}
