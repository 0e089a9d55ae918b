//! Per-icon metadata (`<icon>.json`).
//!
//! Metadata is kept as an open JSON object. Only `aliases` and `attributes`
//! are interpreted; every other key round-trips untouched and in order.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::local_files::FileSystem;
use crate::utils::sequence::merge_arrays;

pub const METADATA_EXTENSION: &str = "json";

const ALIASES_KEY: &str = "aliases";
const ATTRIBUTES_KEY: &str = "attributes";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IconMetadata(Map<String, Value>);

impl IconMetadata {
    /// Parse metadata text, checking the shape of the known keys.
    ///
    /// `path` is only used for error reporting.
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        let value: Value = serde_json::from_str(content)
            .map_err(|e| Error::metadata_invalid_json(path.display().to_string(), e.to_string()))?;

        let Value::Object(map) = value else {
            return Err(Error::metadata_invalid_json(
                path.display().to_string(),
                "top-level value is not an object",
            ));
        };

        let metadata = Self(map);
        metadata.validate(path)?;
        Ok(metadata)
    }

    fn validate(&self, path: &Path) -> Result<()> {
        if let Some(aliases) = self.0.get(ALIASES_KEY) {
            let valid = aliases
                .as_array()
                .is_some_and(|items| items.iter().all(Value::is_string));
            if !valid {
                return Err(Error::metadata_invalid_value(
                    path.display().to_string(),
                    ALIASES_KEY,
                    "expected an array of strings",
                ));
            }
        }

        if let Some(attributes) = self.0.get(ATTRIBUTES_KEY) {
            let valid = attributes
                .as_object()
                .is_some_and(|map| map.values().all(Value::is_string));
            if !valid {
                return Err(Error::metadata_invalid_value(
                    path.display().to_string(),
                    ATTRIBUTES_KEY,
                    "expected an object of string values",
                ));
            }
        }

        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    /// Copy holding only `keys`, in the file's own order.
    pub fn select(&self, keys: &[String]) -> Self {
        Self(
            self.0
                .iter()
                .filter(|(key, _)| keys.contains(key))
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect(),
        )
    }

    /// `None` when the field is absent.
    pub fn aliases(&self) -> Option<Vec<String>> {
        self.0.get(ALIASES_KEY).and_then(Value::as_array).map(|items| {
            items
                .iter()
                .filter_map(|item| item.as_str().map(str::to_string))
                .collect()
        })
    }

    /// Replace the alias list. An empty list removes the field entirely.
    pub fn set_aliases(&mut self, aliases: Vec<String>) {
        if aliases.is_empty() {
            // retain keeps the relative order of the remaining keys
            self.0.retain(|key, _| key != ALIASES_KEY);
            return;
        }

        let values = aliases.into_iter().map(Value::String).collect();
        self.0.insert(ALIASES_KEY.to_string(), Value::Array(values));
    }

    pub fn attributes(&self) -> Option<BTreeMap<String, String>> {
        self.0.get(ATTRIBUTES_KEY).and_then(Value::as_object).map(|map| {
            map.iter()
                .filter_map(|(k, v)| v.as_str().map(|s| (k.clone(), s.to_string())))
                .collect()
        })
    }

    /// Keep `old_name` resolvable after the icon becomes `new_name`.
    ///
    /// The new name is never kept as its own alias and the list never holds
    /// duplicates.
    pub fn migrate_aliases(&mut self, old_name: &str, new_name: &str) {
        let appended: Vec<String> = if old_name == new_name {
            Vec::new()
        } else {
            vec![old_name.to_string()]
        };

        let Some(existing) = self.aliases() else {
            self.set_aliases(appended);
            return;
        };

        let kept: Vec<String> = existing
            .into_iter()
            .filter(|alias| alias != new_name && alias != old_name)
            .collect();

        self.set_aliases(merge_arrays(&kept, &appended));
    }

    /// Two-space indented JSON with a trailing newline.
    pub fn to_pretty_string(&self) -> Result<String> {
        let mut out = serde_json::to_string_pretty(&self.0).map_err(|e| {
            Error::internal_json(e.to_string(), Some("serialize metadata".to_string()))
        })?;
        out.push('\n');
        Ok(out)
    }
}

impl From<Map<String, Value>> for IconMetadata {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

pub fn metadata_path(directory: &Path, name: &str) -> PathBuf {
    directory.join(format!("{}.{}", name, METADATA_EXTENSION))
}

pub fn read_metadata_file(fs: &dyn FileSystem, path: &Path) -> Result<IconMetadata> {
    let content = fs.read(path)?;
    IconMetadata::parse(&content, path)
}

/// Read `<directory>/<name>.json`.
pub fn read_metadata(fs: &dyn FileSystem, name: &str, directory: &Path) -> Result<IconMetadata> {
    read_metadata_file(fs, &metadata_path(directory, name))
}

pub fn write_metadata(fs: &dyn FileSystem, path: &Path, metadata: &IconMetadata) -> Result<()> {
    fs.write(path, &metadata.to_pretty_string()?)
}

/// Every `*.json` in `directory`, keyed by file stem.
pub fn read_all_metadata(
    fs: &dyn FileSystem,
    directory: &Path,
) -> Result<BTreeMap<String, IconMetadata>> {
    let mut all = BTreeMap::new();

    for path in fs.list_with_extension(directory, METADATA_EXTENSION)? {
        let Some(stem) = path.file_stem().map(|s| s.to_string_lossy().into_owned()) else {
            continue;
        };
        all.insert(stem, read_metadata_file(fs, &path)?);
    }

    Ok(all)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::local_files::local;
    use serde_json::json;
    use tempfile::tempdir;

    fn meta(value: Value) -> IconMetadata {
        IconMetadata::parse(&value.to_string(), Path::new("test.json")).unwrap()
    }

    #[test]
    fn parse_rejects_invalid_json() {
        let err = IconMetadata::parse("{ nope", Path::new("icons/a.json")).unwrap_err();
        assert_eq!(err.code.as_str(), "metadata.invalid_json");
        assert_eq!(err.details["path"], "icons/a.json");
    }

    #[test]
    fn parse_rejects_non_object() {
        let err = IconMetadata::parse("[1, 2]", Path::new("a.json")).unwrap_err();
        assert_eq!(err.code.as_str(), "metadata.invalid_json");
    }

    #[test]
    fn parse_rejects_non_string_aliases() {
        let err = IconMetadata::parse(r#"{"aliases": [1]}"#, Path::new("a.json")).unwrap_err();
        assert_eq!(err.code.as_str(), "metadata.invalid_value");
        assert_eq!(err.details["key"], "aliases");
    }

    #[test]
    fn parse_rejects_non_string_attributes() {
        let err = IconMetadata::parse(r#"{"attributes": {"x": 1}}"#, Path::new("a.json"))
            .unwrap_err();
        assert_eq!(err.details["key"], "attributes");
    }

    #[test]
    fn select_keeps_requested_keys_in_file_order() {
        let m = meta(json!({ "tags": ["a"], "aliases": ["b"], "category": "ui" }));
        let picked = m.select(&["category".to_string(), "tags".to_string()]);
        let keys: Vec<&String> = picked.keys().collect();
        assert_eq!(keys, vec!["tags", "category"]);
    }

    #[test]
    fn migrate_creates_alias_list_when_absent() {
        let mut m = meta(json!({ "tags": ["house"] }));
        m.migrate_aliases("home", "house");
        assert_eq!(m.aliases(), Some(vec!["home".to_string()]));
    }

    #[test]
    fn migrate_drops_new_name_and_appends_old() {
        let mut m = meta(json!({ "aliases": ["home", "building"] }));
        m.migrate_aliases("house", "home");
        assert_eq!(
            m.aliases(),
            Some(vec!["building".to_string(), "house".to_string()])
        );
    }

    #[test]
    fn migrate_back_and_forth_does_not_accumulate() {
        let mut m = meta(json!({}));
        m.migrate_aliases("foo", "bar");
        m.migrate_aliases("bar", "foo");
        assert_eq!(m.aliases(), Some(vec!["bar".to_string()]));
        m.migrate_aliases("foo", "bar");
        assert_eq!(m.aliases(), Some(vec!["foo".to_string()]));
    }

    #[test]
    fn migrate_never_duplicates_old_name() {
        let mut m = meta(json!({ "aliases": ["old", "x", "old"] }));
        m.migrate_aliases("old", "new");
        assert_eq!(m.aliases(), Some(vec!["x".to_string(), "old".to_string()]));
    }

    #[test]
    fn migrate_to_empty_list_removes_field() {
        let mut m = meta(json!({ "aliases": ["home"], "tags": [] }));
        m.migrate_aliases("home", "home");
        assert!(m.get("aliases").is_none());
        assert!(!m.to_pretty_string().unwrap().contains("aliases"));
    }

    #[test]
    fn set_aliases_empty_removes_field() {
        let mut m = meta(json!({ "aliases": ["a"] }));
        m.set_aliases(Vec::new());
        assert_eq!(m.aliases(), None);
    }

    #[test]
    fn unknown_keys_keep_their_order() {
        let raw = r#"{"zeta": 1, "alpha": {"nested": true}, "aliases": ["x"], "mid": "m"}"#;
        let mut m = IconMetadata::parse(raw, Path::new("a.json")).unwrap();
        m.migrate_aliases("y", "z");

        let keys: Vec<_> = m.keys().cloned().collect();
        assert_eq!(keys, vec!["zeta", "alpha", "aliases", "mid"]);
        assert_eq!(m.get("alpha"), Some(&json!({ "nested": true })));
    }

    #[test]
    fn pretty_string_is_two_space_indented() {
        let m = meta(json!({ "aliases": ["a"] }));
        assert_eq!(
            m.to_pretty_string().unwrap(),
            "{\n  \"aliases\": [\n    \"a\"\n  ]\n}\n"
        );
    }

    #[test]
    fn attributes_are_exposed_as_sorted_map() {
        let m = meta(json!({ "attributes": { "stroke": "red", "fill": "none" } }));
        let attrs = m.attributes().unwrap();
        assert_eq!(attrs.keys().collect::<Vec<_>>(), vec!["fill", "stroke"]);
    }

    #[test]
    fn read_all_metadata_keys_by_stem() {
        let dir = tempdir().unwrap();
        let fs = local();
        fs.write(&dir.path().join("home.json"), r#"{"aliases":["house"]}"#)
            .unwrap();
        fs.write(&dir.path().join("star.json"), "{}").unwrap();
        fs.write(&dir.path().join("star.svg"), "<svg/>").unwrap();

        let all = read_all_metadata(&fs, dir.path()).unwrap();

        assert_eq!(all.keys().collect::<Vec<_>>(), vec!["home", "star"]);
        assert_eq!(all["home"].aliases(), Some(vec!["house".to_string()]));
    }

    #[test]
    fn read_all_metadata_reports_bad_file() {
        let dir = tempdir().unwrap();
        let fs = local();
        fs.write(&dir.path().join("bad.json"), "not json").unwrap();

        let err = read_all_metadata(&fs, dir.path()).unwrap_err();
        assert!(err.details["path"].as_str().unwrap().ends_with("bad.json"));
    }

    #[test]
    fn write_then_read_metadata() {
        let dir = tempdir().unwrap();
        let fs = local();
        let path = metadata_path(dir.path(), "home");
        let m = meta(json!({ "tags": ["a"], "aliases": ["b"] }));

        write_metadata(&fs, &path, &m).unwrap();

        assert_eq!(read_metadata(&fs, "home", dir.path()).unwrap(), m);
    }
}
