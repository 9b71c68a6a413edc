use serde::Serialize;

use crate::error::Result;

/// Canonical URL of a page written to `output_path`.
///
/// Parent-directory segments are dropped so that `../blog/post.html`
/// maps to `{base}/blog/post.html`.
pub fn canonical_url(base_url: &str, output_path: &str) -> String {
    let base = base_url.trim_end_matches('/');
    let path = output_path.replace("../", "");
    format!("{base}/{}", path.trim_start_matches('/'))
}

/// Absolute URL for a site asset such as the logo.
pub fn asset_url(base_url: &str, asset: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        asset.trim_start_matches('/')
    )
}

/// Render tags as a row of `<span class="tag">` elements, or nothing.
pub fn tags_html(tags: &[String]) -> String {
    if tags.is_empty() {
        return String::new();
    }

    let mut out = String::from("<div style=\"margin:16px 0\">");
    for tag in tags {
        out.push_str("<span class=\"tag\">");
        out.push_str(&html_escape::encode_text(tag));
        out.push_str("</span>");
    }
    out.push_str("</div>");
    out
}

/// Inputs for the `Article` structured-data block.
#[derive(Debug, Clone)]
pub struct ArticleMeta<'a> {
    pub headline: &'a str,
    pub description: &'a str,
    pub author: &'a str,
    pub publisher: &'a str,
    pub image: &'a str,
    pub date_published: &'a str,
    pub canonical: &'a str,
    pub keywords: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Article<'a> {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    kind: &'static str,
    headline: &'a str,
    description: &'a str,
    image: &'a str,
    author: Named<'a>,
    publisher: Publisher<'a>,
    date_published: &'a str,
    main_entity_of_page: WebPage<'a>,
    keywords: &'a str,
}

#[derive(Serialize)]
struct Named<'a> {
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'a str,
}

#[derive(Serialize)]
struct Publisher<'a> {
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'a str,
    logo: ImageObject<'a>,
}

#[derive(Serialize)]
struct ImageObject<'a> {
    #[serde(rename = "@type")]
    kind: &'static str,
    url: &'a str,
}

#[derive(Serialize)]
struct WebPage<'a> {
    #[serde(rename = "@type")]
    kind: &'static str,
    #[serde(rename = "@id")]
    id: &'a str,
}

/// Pretty-printed JSON-LD for an article, safe to embed in a
/// `<script type="application/ld+json">` element.
pub fn json_ld(meta: &ArticleMeta) -> Result<String> {
    let article = Article {
        context: "https://schema.org",
        kind: "Article",
        headline: meta.headline,
        description: meta.description,
        image: meta.image,
        author: Named {
            kind: "Person",
            name: meta.author,
        },
        publisher: Publisher {
            kind: "Organization",
            name: meta.publisher,
            logo: ImageObject {
                kind: "ImageObject",
                url: meta.image,
            },
        },
        date_published: meta.date_published,
        main_entity_of_page: WebPage {
            kind: "WebPage",
            id: meta.canonical,
        },
        keywords: &meta.keywords,
    };

    let json = serde_json::to_string_pretty(&article)?;
    Ok(json.replace("</", "<\\/"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn canonical_from_relative_output() {
        assert_eq!(
            canonical_url("https://site.com/", "../posts/hello.html"),
            "https://site.com/posts/hello.html"
        );
        assert_eq!(
            canonical_url("https://site.com", "/posts/hello.html"),
            "https://site.com/posts/hello.html"
        );
        assert_eq!(
            canonical_url("https://site.com", "hello.html"),
            "https://site.com/hello.html"
        );
    }

    #[test]
    fn asset_url_joins_with_single_slash() {
        assert_eq!(
            asset_url("https://site.com/", "/logo.png"),
            "https://site.com/logo.png"
        );
    }

    #[test]
    fn tags() {
        assert_eq!(tags_html(&[]), "");
        assert_eq!(
            tags_html(&["rust".to_string(), "a<b".to_string()]),
            "<div style=\"margin:16px 0\"><span class=\"tag\">rust</span><span class=\"tag\">a&lt;b</span></div>"
        );
    }

    #[test]
    fn article_json_ld() {
        let meta = ArticleMeta {
            headline: "Olá </script>",
            description: "desc",
            author: "Ana",
            publisher: "IACWave",
            image: "https://site.com/logo.png",
            date_published: "2024-05-01",
            canonical: "https://site.com/p.html",
            keywords: "rust, web".to_string(),
        };
        let expected = r#"{
  "@context": "https://schema.org",
  "@type": "Article",
  "headline": "Olá <\/script>",
  "description": "desc",
  "image": "https://site.com/logo.png",
  "author": {
    "@type": "Person",
    "name": "Ana"
  },
  "publisher": {
    "@type": "Organization",
    "name": "IACWave",
    "logo": {
      "@type": "ImageObject",
      "url": "https://site.com/logo.png"
    }
  },
  "datePublished": "2024-05-01",
  "mainEntityOfPage": {
    "@type": "WebPage",
    "@id": "https://site.com/p.html"
  },
  "keywords": "rust, web"
}"#;
        assert_eq!(json_ld(&meta).unwrap(), expected);
    }
}
