mod block;
mod config;
mod error;
pub mod frontmatter;
mod html;
mod inline;
mod parser;
mod reading;
pub mod seo;
mod template;

pub use block::{Block, ListKind};
pub use config::{Config, RenderConfig, SiteConfig};
pub use error::{Error, Result};
pub use frontmatter::Post;
pub use inline::{escape_inline, substitute_images};
pub use reading::{WORDS_PER_MINUTE, reading_time};
pub use template::{PageContext, Template};

use std::fs;
use std::path::Path;

/// Parse markdown text into one block per line.
pub fn parse(markdown: &str) -> Vec<Block<'_>> {
    parser::parse(markdown)
}

/// Convert a markdown post body to an HTML fragment.
pub fn markdown_to_html(markdown: &str) -> String {
    let blocks = parse(markdown);
    html::blocks_to_html(&blocks)
}

/// Everything needed to turn a post into a page, apart from the post itself.
#[derive(Debug, Clone)]
pub struct PublishOptions {
    pub site: SiteConfig,
    pub template: Template,
    /// Publication date, `YYYY-MM-DD`
    pub date: String,
}

/// A rendered page and the values derived while building it.
#[derive(Debug, Clone)]
pub struct Published {
    pub html: String,
    pub title: String,
    pub reading_time: u32,
    pub tag_count: usize,
}

/// Render a post source into a complete page. `output_path` is where the
/// page will be served from relative to the site root and determines the
/// canonical URL.
pub fn publish(source: &str, output_path: &Path, options: &PublishOptions) -> Result<Published> {
    let post = frontmatter::parse(source);
    let site = &options.site;

    let content = markdown_to_html(&post.body);
    let reading_time = reading_time(&post.body);

    let output_path = output_path.to_string_lossy().replace('\\', "/");
    let canonical = seo::canonical_url(&site.base_url, &output_path);
    let image = seo::asset_url(&site.base_url, &site.logo);
    let author = post.author.as_deref().unwrap_or(&site.default_author);
    let keywords = if post.tags.is_empty() {
        site.default_keywords.clone()
    } else {
        post.tags.join(", ")
    };

    let json_ld = seo::json_ld(&seo::ArticleMeta {
        headline: &post.title,
        description: &post.description,
        author,
        publisher: &site.name,
        image: &image,
        date_published: &options.date,
        canonical: &canonical,
        keywords,
    })?;
    let tags_html = seo::tags_html(&post.tags);

    let html = options.template.render(&PageContext {
        title: &post.title,
        description: &post.description,
        author,
        date: &options.date,
        url: &canonical,
        image: &image,
        reading_time,
        content: &content,
        tags_html: &tags_html,
        json_ld: &json_ld,
    });

    log::debug!("published {:?} at {canonical}", post.title);

    Ok(Published {
        html,
        title: post.title,
        reading_time,
        tag_count: post.tags.len(),
    })
}

/// Read a post from `input`, render it, and write the page to `output`.
pub fn publish_file(input: &Path, output: &Path, options: &PublishOptions) -> Result<Published> {
    let source = fs::read_to_string(input).map_err(|source| Error::ReadInput {
        path: input.to_path_buf(),
        source,
    })?;

    let published = publish(&source, output, options)?;

    fs::write(output, &published.html).map_err(|source| Error::WriteOutput {
        path: output.to_path_buf(),
        source,
    })?;

    Ok(published)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(template: &str) -> PublishOptions {
        PublishOptions {
            site: SiteConfig::default(),
            template: Template::new(template),
            date: "2024-05-01".to_string(),
        }
    }

    #[test]
    fn publish_fills_template() {
        let source = "# Hello\nAuthor: Ana\nTags: rust, web\n\nSome *text*.";
        let published = publish(
            source,
            Path::new("../posts/hello.html"),
            &options("{{ title }}|{{ author }}|{{ url }}|{{ readingTime }}|{{ content }}"),
        )
        .unwrap();

        assert_eq!(
            published.html,
            "Hello|Ana|https://iacwave.com.br/posts/hello.html|1|<p>Some <em>text</em>.</p>"
        );
        assert_eq!(published.title, "Hello");
        assert_eq!(published.tag_count, 2);
    }

    #[test]
    fn defaults_for_missing_header() {
        let published = publish(
            "just text",
            Path::new("p.html"),
            &options("{{ title }}|{{ author }}|{{ tags }}"),
        )
        .unwrap();
        assert_eq!(published.html, "Post|IACWave|");
    }

    #[test]
    fn default_keywords_without_tags() {
        let published = publish("# T\n\nbody", Path::new("p.html"), &options("{{ jsonld }}")).unwrap();
        assert!(published.html.contains("\"keywords\": \"DevOps, Cloud, IaC\""));
        assert!(published.html.contains("\"datePublished\": \"2024-05-01\""));
    }

    #[test]
    fn missing_input_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = publish_file(
            &dir.path().join("missing.md"),
            &dir.path().join("out.html"),
            &options(""),
        )
        .unwrap_err();
        assert!(matches!(err, Error::ReadInput { .. }));
    }
}
