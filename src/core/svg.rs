//! SVG artwork helpers: reading, minifying and child extraction.

use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use crate::error::Result;
use crate::fingerprint::Entity;
use crate::local_files::FileSystem;

pub const SVG_EXTENSION: &str = "svg";

fn whitespace_between_tags() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r">[\r\n ]+<").expect("valid regex"))
}

fn tag_or_whitespace() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(<.*?>)|\s+").expect("valid regex"))
}

fn element_tag() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"<([A-Za-z][\w:.-]*)(\s(?:"[^"]*"|'[^']*'|[^"'>])*?)?\s*/?>"#)
            .expect("valid regex")
    })
}

fn attribute() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"([^\s=/>"']+)\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'=<>`]+))"#)
            .expect("valid regex")
    })
}

fn comment() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)<!--.*?-->").expect("valid regex"))
}

pub fn svg_path(directory: &Path, name: &str) -> PathBuf {
    directory.join(format!("{}.{}", name, SVG_EXTENSION))
}

/// Read `<directory>/<name>`; `name` may include the extension.
pub fn read_svg(fs: &dyn FileSystem, name: &str, directory: &Path) -> Result<String> {
    let path = if name.ends_with(&format!(".{}", SVG_EXTENSION)) {
        directory.join(name)
    } else {
        svg_path(directory, name)
    };
    fs.read(&path)
}

/// File names in `directory` ending in `extension`, sorted.
pub fn read_svg_directory(
    fs: &dyn FileSystem,
    directory: &Path,
    extension: &str,
) -> Result<Vec<String>> {
    Ok(fs
        .list_with_extension(directory, extension)?
        .iter()
        .filter_map(|path| path.file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .collect())
}

/// Icon names (file stems) for every `.svg` in `directory`.
pub fn list_icon_names(fs: &dyn FileSystem, directory: &Path) -> Result<Vec<String>> {
    Ok(fs
        .list_with_extension(directory, SVG_EXTENSION)?
        .iter()
        .filter_map(|path| path.file_stem())
        .map(|stem| stem.to_string_lossy().into_owned())
        .collect())
}

/// Collapse markup to a single line.
///
/// Whitespace between tags is dropped, whitespace runs in text become one
/// space, tag text is kept as-is.
pub fn minify_svg(svg: &str) -> String {
    if svg.is_empty() {
        return String::new();
    }

    let joined = whitespace_between_tags().replace_all(svg, "><");
    let collapsed = tag_or_whitespace().replace_all(&joined, |caps: &regex::Captures| {
        caps.get(1)
            .map(|tag| tag.as_str().to_string())
            .unwrap_or_else(|| " ".to_string())
    });

    collapsed.trim().to_string()
}

/// Element nodes below the root `<svg>`, flattened in document order.
///
/// Closing tags, comments and the root element itself are skipped. Markup
/// without an `<svg>` root yields every element found.
pub fn parse_children(svg: &str) -> Vec<Entity> {
    let without_comments = comment().replace_all(svg, "");
    let mut children = Vec::new();
    let mut root_seen = false;

    for caps in element_tag().captures_iter(&without_comments) {
        let name = &caps[1];
        if !root_seen && name == "svg" {
            root_seen = true;
            continue;
        }

        let attrs = caps.get(2).map_or("", |m| m.as_str());
        let mut entity = Entity::new(name);
        for attr in attribute().captures_iter(attrs) {
            let value = attr
                .get(2)
                .or_else(|| attr.get(3))
                .or_else(|| attr.get(4))
                .map_or("", |m| m.as_str());
            entity.attributes.insert(attr[1].to_string(), value.to_string());
        }
        children.push(entity);
    }

    children
}
