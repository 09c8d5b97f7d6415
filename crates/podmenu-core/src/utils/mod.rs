use std::path::{Component, Path};

/// Derive a node identifier from a path relative to the content root.
///
/// Converts the path to an identifier by:
/// - Joining the path components with hyphens (independent of the OS separator)
/// - Lowercasing ASCII letters
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use podmenu_core::derive_identifier;
///
/// assert_eq!(derive_identifier(Path::new("Episodes/Season-1")), "episodes-season-1");
/// assert_eq!(derive_identifier(Path::new("About")), "about");
/// # if cfg!(windows) {
/// #     assert_eq!(derive_identifier(Path::new("Episodes\\Season-1")), "episodes-season-1");
/// # }
/// ```
pub fn derive_identifier(relative: &Path) -> String {
    relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("-")
        .to_ascii_lowercase()
}

/// Derive a display title from a directory basename.
///
/// Rules:
/// - Replace `-` and `_` with spaces
/// - Uppercase the first character of each whitespace-delimited word
/// - Lowercase the rest of each word; the original spacing is kept
///
/// # Examples
///
/// ```
/// use podmenu_core::derive_title;
///
/// assert_eq!(derive_title("season-1"), "Season 1");
/// assert_eq!(derive_title("behind_the-scenes"), "Behind The Scenes");
/// assert_eq!(derive_title("HELLO-world"), "Hello World");
/// ```
pub fn derive_title(basename: &str) -> String {
    let mut title = String::with_capacity(basename.len());
    let mut word_start = true;

    for c in basename.chars() {
        let c = if c == '-' || c == '_' { ' ' } else { c };
        if c.is_whitespace() {
            word_start = true;
            title.push(c);
        } else if word_start {
            word_start = false;
            title.extend(c.to_uppercase());
        } else {
            title.extend(c.to_lowercase());
        }
    }

    title
}
