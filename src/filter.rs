//! Decide which candidate image URLs belong to the product

/// Known decorative (non-product) image URLs from storefront headers and footers
pub const DEFAULT_DENY_LIST: &[&str] = &[
    "https://i0.wp.com/sectionstore.cz/wp-content/uploads/2021/01/doublebox.jpg?fit=1000%2C195&amp;ssl=1",
    "https://i0.wp.com/sectionstore.cz/wp-content/uploads/2022/06/doprava.jpg?fit=1000%2C195&amp;ssl=1",
    "https://i0.wp.com/sectionstore.cz/wp-content/uploads/2022/11/limited.jpg?fit=1000%2C195&amp;ssl=1",
    "https://i0.wp.com/sectionstore.cz/wp-content/uploads/2021/01/legit.jpg?fit=1000%2C195&amp;ssl=1",
    "https://sectionstore.cz/wp-content/uploads/2022/11/linktree-facebook.png",
    "https://sectionstore.cz/wp-content/uploads/2022/11/linktree-ig.png",
    "https://sectionstore.cz/wp-content/uploads/2022/11/linktree-tiktok.png",
    "https://sectionstore.cz/wp-content/uploads/2022/11/linktree-google.png",
    "https://i0.wp.com/sectionstore.cz/wp-content/uploads/2022/11/jordan-1-high-menu.png?fit=500%2C300&amp;ssl=1",
    "https://i0.wp.com/sectionstore.cz/wp-content/uploads/2022/11/menu-trika.png?fit=500%2C300&amp;ssl=1",
    "https://i0.wp.com/sectionstore.cz/wp-content/uploads/2020/02/section_logo_web.png?fit=1288%2C575&amp;ssl=1",
];

/// True if `text` contains every word, ignoring case.
/// An empty word list matches everything.
pub fn contains_all_words(text: &str, words: &[&str]) -> bool {
    let lower = text.to_lowercase();
    words
        .iter()
        .all(|word| lower.contains(&word.to_lowercase()))
}

/// Why a candidate was dropped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exclusion {
    MissingProductWords,
    Decorative,
}

/// Product-word filter with an optional decorative deny-list
#[derive(Debug, Clone)]
pub struct ImageFilter {
    words: Vec<String>,
    deny_list: Option<Vec<String>>,
}

impl ImageFilter {
    pub fn new(product_name: &str) -> Self {
        Self {
            words: product_name
                .split_whitespace()
                .map(|w| w.to_lowercase())
                .collect(),
            deny_list: None,
        }
    }

    /// Also exclude URLs containing any of `entries`
    pub fn with_deny_list<I, S>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.deny_list = Some(
            entries
                .into_iter()
                .map(|e| e.as_ref().to_lowercase())
                .collect(),
        );
        self
    }

    pub fn check(&self, url: &str) -> Result<(), Exclusion> {
        let words: Vec<&str> = self.words.iter().map(String::as_str).collect();
        if !contains_all_words(url, &words) {
            return Err(Exclusion::MissingProductWords);
        }
        if let Some(deny) = &self.deny_list {
            if is_denied(url, deny) {
                return Err(Exclusion::Decorative);
            }
        }
        Ok(())
    }
}

/// True if `url` contains any deny-list entry, ignoring case
pub fn is_denied<I, S>(url: &str, deny_list: I) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let lower = url.to_lowercase();
    deny_list
        .into_iter()
        .any(|entry| lower.contains(&entry.as_ref().to_lowercase()))
}
