use std::sync::LazyLock;

use regex::Regex;

static IMAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[(.*?)\]\((.*?)\)").expect("valid image pattern"));

const IMAGE_TAG: &str = "<img src='${2}' alt='${1}' />";

/// Substitutions applied in order. Images run before links because both
/// share the `[...](...)` shape, and bold runs before italic so `**`
/// pairs are consumed before single asterisks are considered.
static MARKUP_RULES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        (r"\[(.*?)\]\((.*?)\)", "<a href='${2}'>${1}</a>"),
        (r"\*\*(.*?)\*\*", "<strong>${1}</strong>"),
        (r"\*(.*?)\*", "<em>${1}</em>"),
        (r"`([^`]+)`", "<code>${1}</code>"),
    ]
    .into_iter()
    .map(|(pattern, replacement)| {
        (
            Regex::new(pattern).expect("valid inline pattern"),
            replacement,
        )
    })
    .collect()
});

const RESTORED_TAGS: [(&str, &str); 7] = [
    ("&lt;strong&gt;", "<strong>"),
    ("&lt;/strong&gt;", "</strong>"),
    ("&lt;em&gt;", "<em>"),
    ("&lt;/em&gt;", "</em>"),
    ("&lt;code&gt;", "<code>"),
    ("&lt;/code&gt;", "</code>"),
    ("&lt;/a&gt;", "</a>"),
];

/// Escaped anchor and image tags. Attribute values must not contain a
/// quote, otherwise the tag stays escaped.
static RESTORED_ATTRIBUTE_TAGS: LazyLock<[(Regex, &'static str); 2]> = LazyLock::new(|| {
    [
        (
            Regex::new(r"&lt;a href='([^']*)'&gt;").expect("valid anchor pattern"),
            "<a href='${1}'>",
        ),
        (
            Regex::new(r"&lt;img src='([^']*)' alt='([^']*)' /&gt;").expect("valid image pattern"),
            "<img src='${1}' alt='${2}' />",
        ),
    ]
});

/// Apply inline markup to a line and escape everything else.
///
/// Angle brackets are escaped after markup is inserted and only the tags
/// produced here are restored, so raw HTML in the text stays inert.
pub fn escape_inline(text: &str) -> String {
    let mut text = substitute_images(text);

    for (pattern, replacement) in MARKUP_RULES.iter() {
        text = pattern.replace_all(&text, *replacement).into_owned();
    }

    let mut text = escape_angle_brackets(&text);

    for (escaped, tag) in RESTORED_TAGS {
        text = text.replace(escaped, tag);
    }
    for (pattern, replacement) in RESTORED_ATTRIBUTE_TAGS.iter() {
        text = pattern.replace_all(&text, *replacement).into_owned();
    }

    text
}

/// Replace `![alt](src)` with image tags, leaving the rest of the line raw.
pub fn substitute_images(line: &str) -> String {
    IMAGE.replace_all(line, IMAGE_TAG).into_owned()
}

fn escape_angle_brackets(text: &str) -> String {
    text.replace('<', "&lt;").replace('>', "&gt;")
}
