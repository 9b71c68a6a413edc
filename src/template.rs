use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::error::{Error, Result};

static BUNDLED_TEMPLATE: &str = include_str!("post_template.html");

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{ (\w+) \}\}").expect("valid placeholder pattern"));

/// Values substituted into a page template.
///
/// `content`, `tags_html` and `json_ld` are inserted verbatim; the other
/// fields are escaped.
#[derive(Debug, Clone, Default)]
pub struct PageContext<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub author: &'a str,
    pub date: &'a str,
    pub url: &'a str,
    pub image: &'a str,
    pub reading_time: u32,
    pub content: &'a str,
    pub tags_html: &'a str,
    pub json_ld: &'a str,
}

impl PageContext<'_> {
    fn value(&self, name: &str) -> Option<String> {
        let escaped = |text: &str| html_escape::encode_quoted_attribute(text).into_owned();
        let value = match name {
            "title" => escaped(self.title),
            "description" => escaped(self.description),
            "author" => escaped(self.author),
            "date" => escaped(self.date),
            "url" => escaped(self.url),
            "image" => escaped(self.image),
            "readingTime" => self.reading_time.to_string(),
            "content" => self.content.to_string(),
            "tags" => self.tags_html.to_string(),
            "jsonld" => self.json_ld.to_string(),
            _ => return None,
        };
        Some(value)
    }
}

#[derive(Debug, Clone)]
pub struct Template {
    source: String,
}

impl Template {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// The post template compiled into the binary.
    pub fn bundled() -> Self {
        Self::new(BUNDLED_TEMPLATE)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path).map_err(|source| Error::ReadTemplate {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(source))
    }

    /// Load the template at `path`, or the bundled one when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                log::debug!("using template {}", path.display());
                Self::from_path(path)
            }
            None => {
                log::debug!("using bundled template");
                Ok(Self::bundled())
            }
        }
    }

    /// Substitute every known placeholder in a single pass. Unknown
    /// placeholders are kept, and substituted values are never rescanned.
    pub fn render(&self, page: &PageContext) -> String {
        PLACEHOLDER
            .replace_all(&self.source, |caps: &Captures| {
                page.value(&caps[1]).unwrap_or_else(|| caps[0].to_string())
            })
            .into_owned()
    }
}
