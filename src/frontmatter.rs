use crate::parser::split_lines;

/// Title used when the post does not start with a `# ` heading.
pub const DEFAULT_TITLE: &str = "Post";

/// A post split into header metadata and Markdown body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub title: String,
    /// `None` when the header has no `Author:` line
    pub author: Option<String>,
    pub description: String,
    pub tags: Vec<String>,
    pub body: String,
}

enum Field {
    Author,
    Tags,
    Description,
}

impl Field {
    fn match_line(line: &str) -> Option<(Self, &str)> {
        let field = [
            ("author:", Field::Author),
            ("tags:", Field::Tags),
            ("description:", Field::Description),
        ]
        .into_iter()
        .find_map(|(key, field)| {
            line.get(..key.len())
                .is_some_and(|prefix| prefix.eq_ignore_ascii_case(key))
                .then_some(field)
        })?;
        let (_, value) = line.split_once(':')?;
        Some((field, value.trim()))
    }
}

/// Split a post source into its header fields and body.
///
/// The header is an optional `# Title` line followed by case-insensitive
/// `Author:`, `Tags:` (comma separated) and `Description:` lines in any
/// order. The first other line starts the body.
pub fn parse(source: &str) -> Post {
    let lines = split_lines(source);
    let mut post = Post {
        title: DEFAULT_TITLE.to_string(),
        author: None,
        description: String::new(),
        tags: Vec::new(),
        body: String::new(),
    };

    let mut start = 0;
    if let Some(title) = lines.first().and_then(|line| line.strip_prefix("# ")) {
        post.title = title.trim().to_string();
        start = 1;
    }

    while let Some((field, value)) = lines.get(start).and_then(|line| Field::match_line(line)) {
        match field {
            Field::Author => post.author = Some(value.to_string()),
            Field::Tags => {
                post.tags = value
                    .split(',')
                    .map(str::trim)
                    .filter(|tag| !tag.is_empty())
                    .map(String::from)
                    .collect();
            }
            Field::Description => post.description = value.to_string(),
        }
        start += 1;
    }

    post.body = lines[start..].join("\n").trim().to_string();

    log::debug!(
        "frontmatter: title={:?} author={:?} tags={} header_lines={}",
        post.title,
        post.author,
        post.tags.len(),
        start
    );

    post
}
