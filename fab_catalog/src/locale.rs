//! Dataset locales
//!
//! Every locale is published as its own flattened JSON file. Only English is
//! configured: the other translations carry translated keywords, which would
//! break filters downstream until the dataset covers every card.

use std::path::{Path, PathBuf};

/// Placeholder substituted with the branch or tag in URL templates
const BRANCH_PLACEHOLDER: &str = "{branch}";

const ENGLISH_URL: &str = "https://raw.githubusercontent.com/the-fab-cube/flesh-and-blood-cards/{branch}/json/english/card-flattened.json";

/// A dataset source: locale code plus the URL template it is published under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    code: String,
    url_template: String,
}

impl Locale {
    pub fn new(code: impl Into<String>, url_template: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            url_template: url_template.into(),
        }
    }

    /// English dataset on the community card repository
    pub fn english() -> Self {
        Self::new("en", ENGLISH_URL)
    }

    /// Locale code, e.g. "en"
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Source URL for the given branch or tag
    pub fn url(&self, branch: &str) -> String {
        self.url_template.replace(BRANCH_PLACEHOLDER, branch)
    }

    /// Cache file for this locale: `<cache_dir>/<code>.json`
    pub fn cache_file(&self, cache_dir: &Path) -> PathBuf {
        cache_dir.join(format!("{}.json", self.code))
    }
}

/// Locales exported by default
pub fn default_locales() -> Vec<Locale> {
    vec![Locale::english()]
}
