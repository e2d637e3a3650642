//! Product and folder names derived from a product page URL

/// Characters that cannot appear in a folder name on common filesystems
const INVALID_FILENAME_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Names derived from the last path segment of a product URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductNames {
    /// Filtering key, e.g. "blue hoodie size m"
    pub product: String,
    /// Directory name, e.g. "Blue Hoodie Size M"
    pub folder: String,
}

impl ProductNames {
    pub fn from_url(url: &str) -> Self {
        let product = product_name_from_url(url);
        let folder = folder_name(&product);
        Self { product, folder }
    }
}

/// Extract the product name from the URL
/// "https://x.com/products/blue-hoodie?variant=1" -> "blue hoodie"
pub fn product_name_from_url(url: &str) -> String {
    // rsplit always yields at least one item; empty when the URL ends in '/'
    let last = url.rsplit('/').next().unwrap_or_default();
    let name = last.replace('-', " ");
    let name = match name.find('?') {
        Some(idx) => &name[..idx],
        None => name.as_str(),
    };
    name.trim().to_string()
}

/// Sanitize a product name into a folder name: invalid characters become '_',
/// digits are dropped, hyphens become spaces and each word is capitalized
pub fn folder_name(product_name: &str) -> String {
    let sanitized: String = product_name
        .chars()
        .map(|c| {
            if INVALID_FILENAME_CHARS.contains(&c) || c.is_ascii_control() {
                '_'
            } else {
                c
            }
        })
        .filter(|c| !c.is_ascii_digit())
        .map(|c| if c == '-' { ' ' } else { c })
        .collect();

    title_case(&sanitized)
}

/// Capitalize the first letter of every run of letters and lowercase the rest.
/// Runs that are already all upper-case (acronyms) are left alone.
fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut word = String::new();

    for c in input.chars() {
        if c.is_alphabetic() || (c == '\'' && !word.is_empty()) {
            word.push(c);
        } else {
            push_word(&mut out, &mut word);
            out.push(c);
        }
    }
    push_word(&mut out, &mut word);

    out
}

fn push_word(out: &mut String, word: &mut String) {
    if word.is_empty() {
        return;
    }

    if word.chars().any(char::is_lowercase) {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            for c in chars {
                out.extend(c.to_lowercase());
            }
        }
    } else {
        out.push_str(word);
    }
    word.clear();
}
