//! Short content fingerprints for SVG child nodes.
//!
//! The hash is a djb2 variant rendered in base 36 and cut to six characters.
//! It is not collision free: a repeated fingerprint inside one icon is
//! reported as a duplicated child, which in practice means an accidentally
//! pasted twice `<path>` or `<circle>`.

use serde::Serialize;
use std::collections::{BTreeMap, HashMap, HashSet};

pub const DEFAULT_SEED: u32 = 5381;

const FINGERPRINT_LEN: usize = 6;
const BASE36_DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// A named, attributed node such as `<path d="...">`.
///
/// Attributes live in a `BTreeMap` so serialization order is canonical.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entity {
    pub name: String,
    pub attributes: BTreeMap<String, String>,
}

impl Entity {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: BTreeMap::new(),
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }
}

/// Hash `input` into at most six `[0-9a-z]` characters.
///
/// Walks UTF-16 code units from the end: `value = (value * 33) ^ unit`,
/// wrapping at 32 bits.
pub fn hash(input: &str, seed: u32) -> String {
    let units: Vec<u16> = input.encode_utf16().collect();
    let value = units
        .iter()
        .rev()
        .fold(seed, |acc, &unit| acc.wrapping_mul(33) ^ u32::from(unit));

    let mut rendered = to_base36(value);
    rendered.truncate(FINGERPRINT_LEN);
    rendered
}

pub fn hash_default(input: &str) -> String {
    hash(input, DEFAULT_SEED)
}

fn to_base36(mut value: u32) -> String {
    if value == 0 {
        return "0".to_string();
    }

    let mut digits = Vec::with_capacity(7);
    while value > 0 {
        digits.push(BASE36_DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    digits.reverse();
    String::from_utf8_lossy(&digits).into_owned()
}

/// Fingerprint of the compact JSON `[name, attributes]`.
pub fn generate_hashed_key(entity: &Entity) -> String {
    let serialized = serde_json::to_string(&(&entity.name, &entity.attributes))
        .unwrap_or_else(|_| entity.name.clone());
    hash_default(&serialized)
}

/// True when any two children share a fingerprint.
pub fn has_duplicated_children(children: &[Entity]) -> bool {
    let mut seen = HashSet::with_capacity(children.len());
    children
        .iter()
        .map(generate_hashed_key)
        .any(|key| !seen.insert(key))
}

/// Children sharing one fingerprint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DuplicateGroup {
    pub fingerprint: String,
    pub indices: Vec<usize>,
}

/// Every fingerprint seen more than once, in order of first occurrence.
pub fn duplicate_groups(children: &[Entity]) -> Vec<DuplicateGroup> {
    let mut order: Vec<String> = Vec::new();
    let mut by_key: HashMap<String, Vec<usize>> = HashMap::new();

    for (index, child) in children.iter().enumerate() {
        let key = generate_hashed_key(child);
        let indices = by_key.entry(key.clone()).or_default();
        if indices.is_empty() {
            order.push(key);
        }
        indices.push(index);
    }

    order
        .into_iter()
        .filter_map(|fingerprint| {
            let indices = by_key.remove(&fingerprint)?;
            (indices.len() > 1).then_some(DuplicateGroup {
                fingerprint,
                indices,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(d: &str) -> Entity {
        Entity::new("path").with_attribute("d", d)
    }

    fn circle(cx: &str, cy: &str, r: &str) -> Entity {
        Entity::new("circle")
            .with_attribute("cx", cx)
            .with_attribute("cy", cy)
            .with_attribute("r", r)
    }

    fn is_fingerprint_shaped(s: &str) -> bool {
        !s.is_empty()
            && s.len() <= 6
            && s.chars()
                .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase())
    }

    #[test]
    fn hash_matches_reference_values() {
        assert_eq!(hash("", DEFAULT_SEED), "45h");
        assert_eq!(hash("a", DEFAULT_SEED), "3t1g");
        assert_eq!(hash("hello", DEFAULT_SEED), "2zzlpj");
    }

    #[test]
    fn hash_respects_seed() {
        assert_eq!(hash("", 0), "0");
        assert_eq!(hash("a", 0), "2p");
        assert_eq!(hash("hello", 0), "25i1ky");
        assert_ne!(hash("hello", 0), hash_default("hello"));
    }

    #[test]
    fn hash_is_deterministic_and_shaped() {
        let long = "long input ".repeat(500);
        let inputs = [
            "",
            "x",
            "[\"path\",{\"d\":\"M12 2v20\"}]",
            "ünïcødé ✓ 𝄞",
            long.as_str(),
        ];
        for seed in [0, 1, DEFAULT_SEED, u32::MAX] {
            for input in inputs {
                let first = hash(input, seed);
                assert_eq!(first, hash(input, seed));
                assert!(is_fingerprint_shaped(&first), "bad shape: {first}");
            }
        }
    }

    #[test]
    fn hashed_key_uses_compact_name_attribute_pair() {
        assert_eq!(generate_hashed_key(&path("M12 2v20")), "t6zp3m");
        assert_eq!(generate_hashed_key(&circle("12", "12", "10")), "1mglay");
    }

    #[test]
    fn hashed_key_ignores_attribute_insertion_order() {
        let a = Entity::new("rect")
            .with_attribute("x", "2")
            .with_attribute("y", "4");
        let b = Entity::new("rect")
            .with_attribute("y", "4")
            .with_attribute("x", "2");
        assert_eq!(generate_hashed_key(&a), generate_hashed_key(&b));
    }

    #[test]
    fn distinct_children_are_not_duplicates() {
        let children = vec![path("M12 2v20"), path("M2 12h20"), circle("12", "12", "10")];
        assert!(!has_duplicated_children(&children));
        assert!(duplicate_groups(&children).is_empty());
    }

    #[test]
    fn identical_children_are_duplicates() {
        let children = vec![
            path("M12 2v20"),
            circle("12", "12", "10"),
            path("M2 12h20"),
            path("M12 2v20"),
        ];
        assert!(has_duplicated_children(&children));
    }

    #[test]
    fn same_attributes_different_name_are_distinct() {
        let children = vec![
            Entity::new("path").with_attribute("d", "M0 0"),
            Entity::new("polyline").with_attribute("d", "M0 0"),
        ];
        assert!(!has_duplicated_children(&children));
    }

    #[test]
    fn empty_collection_has_no_duplicates() {
        assert!(!has_duplicated_children(&[]));
    }

    #[test]
    fn duplicate_groups_localize_offenders() {
        let children = vec![
            circle("12", "12", "10"),
            path("M12 2v20"),
            circle("12", "12", "10"),
            path("M12 2v20"),
            path("M12 2v20"),
        ];

        let groups = duplicate_groups(&children);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].indices, vec![0, 2]);
        assert_eq!(groups[0].fingerprint, "1mglay");
        assert_eq!(groups[1].indices, vec![1, 3, 4]);
        assert_eq!(groups[1].fingerprint, "t6zp3m");
    }

    #[test]
    fn duplicate_groups_agree_with_boolean_check() {
        let sets = [
            vec![],
            vec![path("a")],
            vec![path("a"), path("b")],
            vec![path("a"), path("a")],
        ];
        for children in sets {
            assert_eq!(
                has_duplicated_children(&children),
                !duplicate_groups(&children).is_empty()
            );
        }
    }
}
