//! The glyph catalog: every word the symbol language can draw.
//!
//! The table is plain data. Each entry pairs a word key with the ordered
//! primitives that make up its glyph; later primitives draw on top of earlier
//! ones. Keys match exactly and case-sensitively. Anything not listed here
//! draws as [`FALLBACK`].

use serde::Serialize;
use std::collections::HashMap;
use std::sync::LazyLock;

use crate::primitive::{render, Primitive};

/// Boxed X drawn for words with no hand-made glyph.
pub const FALLBACK: &[Primitive] = &[
    Primitive::rect(10, 10, 80, 80),
    Primitive::path("M 30 30 L 70 70 M 70 30 L 30 70"),
];

const BODY: Primitive = Primitive::line(50, 35, 50, 90);
const HEAD: Primitive = Primitive::dot(50, 20, 8);

/// Shared by `is` and `equal`.
const EQUALS_SIGN: &[Primitive] = &[
    Primitive::line(20, 40, 80, 40),
    Primitive::line(20, 60, 80, 60),
];

/// All hand-made glyphs as `(key, primitives)` pairs.
pub static GLYPHS: &[(&str, &[Primitive])] = &[
    // Pronouns and entities
    ("person", &[BODY, HEAD]),
    ("me", &[BODY, HEAD, Primitive::path("M 30 50 L 20 40 M 30 50 L 20 60")]),
    ("you", &[BODY, HEAD, Primitive::path("M 70 50 L 60 40 M 70 50 L 60 60")]),
    ("he", &[BODY, HEAD, Primitive::path("M 80 20 L 70 10 M 80 20 L 90 10")]),
    (
        "god",
        &[
            Primitive::circle(50, 30, 20),
            Primitive::dot(50, 30, 5),
            Primitive::path("M 20 80 L 50 45 L 80 80"),
        ],
    ),
    ("unit", &[Primitive::thick_line(50, 15, 50, 85, 4)]),
    // Verbs
    (
        "say",
        &[
            Primitive::path("M 30 50 Q 50 30 70 50 Q 50 70 30 50"),
            Primitive::line(40, 50, 60, 50),
        ],
    ),
    ("is", EQUALS_SIGN),
    ("equal", EQUALS_SIGN),
    (
        "belong",
        &[
            Primitive::line(20, 50, 70, 50),
            Primitive::path("M 70 50 L 55 35 M 70 50 L 55 65"),
        ],
    ),
    ("have", &[Primitive::path("M 25 40 L 25 70 Q 50 90 75 70 L 75 40")]),
    (
        "pray",
        &[
            Primitive::line(50, 50, 50, 90),
            Primitive::path("M 50 50 L 20 20 M 50 50 L 80 20"),
        ],
    ),
    ("obey", &[Primitive::path("M 30 30 L 30 80 L 80 80")]),
    (
        "block",
        &[
            Primitive::rect(15, 15, 70, 70),
            Primitive::line(15, 15, 85, 85),
            Primitive::line(85, 15, 15, 85),
        ],
    ),
    ("change", &[Primitive::path("M 50 20 L 80 80 L 20 80 Z")]),
    ("hello", &[BODY, HEAD, Primitive::path("M 75 25 Q 90 25 90 45")]),
    // Logic and values
    ("not", &[Primitive::thick_line(80, 20, 20, 80, 4)]),
    ("or", &[Primitive::path("M 20 20 L 50 80 L 80 20")]),
    ("and", &[Primitive::path("M 20 80 L 50 20 L 80 80 M 35 50 L 65 50")]),
    ("gt", &[Primitive::path("M 25 25 L 75 50 L 25 75")]),
    ("lt", &[Primitive::path("M 75 25 L 25 50 L 75 75")]),
    ("one", &[Primitive::dot(50, 50, 10)]),
    ("few", &[Primitive::dot(30, 50, 8), Primitive::dot(70, 50, 8)]),
    (
        "many",
        &[
            Primitive::dot(50, 25, 8),
            Primitive::dot(25, 75, 8),
            Primitive::dot(75, 75, 8),
        ],
    ),
    ("value", &[Primitive::rect(25, 25, 50, 50)]),
    ("power", &[Primitive::path("M 55 10 L 35 50 L 65 50 L 45 90")]),
    (
        "want",
        &[
            Primitive::path("M 20 30 L 20 70 Q 50 95 80 70 L 80 30"),
            Primitive::path("M 30 50 L 70 50"),
        ],
    ),
    (
        "qmark",
        &[
            Primitive::path("M 35 30 C 35 10, 65 10, 65 40 C 65 60, 50 60, 50 75"),
            Primitive::dot(50, 88, 5),
        ],
    ),
    // Magnifying glass
    (
        "what",
        &[
            Primitive::circle(40, 40, 25),
            Primitive::thick_line(60, 60, 85, 85, 6),
        ],
    ),
    // Ideologies and concepts
    (
        "capital",
        &[
            Primitive::path("M 20 80 L 80 80 L 50 35 Z"),
            Primitive::dot(50, 20, 6),
        ],
    ),
    (
        "communism",
        &[
            Primitive::filled_rect(25, 25, 20, 20),
            Primitive::filled_rect(55, 25, 20, 20),
            Primitive::filled_rect(25, 55, 20, 20),
            Primitive::filled_rect(55, 55, 20, 20),
        ],
    ),
    (
        "democracy",
        &[
            Primitive::path("M 10 70 Q 50 10 90 70"),
            Primitive::dot(20, 80, 5),
            Primitive::dot(40, 80, 5),
            Primitive::dot(60, 80, 5),
            Primitive::dot(80, 80, 5),
        ],
    ),
    (
        "oligarchy",
        &[
            Primitive::circle(50, 35, 15),
            Primitive::circle(35, 65, 15),
            Primitive::circle(65, 65, 15),
        ],
    ),
    (
        "dictatorship",
        &[
            Primitive::filled_path("M 20 20 L 80 20 L 50 70 Z"),
            Primitive::thick_line(20, 85, 80, 85, 5),
        ],
    ),
    (
        "tradition",
        &[
            Primitive::rect(15, 15, 70, 70),
            Primitive::filled_rect(35, 35, 30, 30),
        ],
    ),
    (
        "progress",
        &[
            Primitive::path("M 20 80 L 50 50 L 50 80 M 50 50 L 80 20 L 80 50"),
            Primitive::path("M 80 20 L 80 20 M 80 20 L 80 20"),
        ],
    ),
    ("local", &[Primitive::circle(50, 50, 35), Primitive::dot(50, 50, 10)]),
    (
        "global",
        &[
            Primitive::circle(50, 50, 35),
            Primitive::path("M 50 15 L 50 85 M 15 50 L 85 50"),
            Primitive::circle(50, 50, 45),
        ],
    ),
    (
        "freedom",
        &[
            Primitive::path("M 30 30 L 10 10"),
            Primitive::path("M 70 30 L 90 10"),
            Primitive::path("M 30 70 L 10 90"),
            Primitive::path("M 70 70 L 90 90"),
            Primitive::circle(50, 50, 15),
        ],
    ),
    (
        "limit",
        &[
            Primitive::thick_line(30, 20, 30, 80, 5),
            Primitive::thick_line(70, 20, 70, 80, 5),
            Primitive::dot(50, 50, 8),
        ],
    ),
    (
        "equality",
        &[
            Primitive::line(50, 80, 50, 30),
            Primitive::line(20, 30, 80, 30),
            Primitive::dot(20, 40, 5),
            Primitive::dot(80, 40, 5),
        ],
    ),
    (
        "class",
        &[Primitive::path("M 20 80 L 40 80 L 40 60 L 60 60 L 60 40 L 80 40 L 80 20")],
    ),
    (
        "material",
        &[
            Primitive::path("M 50 20 L 80 35 L 80 75 L 50 90 L 20 75 L 20 35 Z"),
            Primitive::path("M 50 50 L 50 90 M 50 50 L 20 35 M 50 50 L 80 35"),
        ],
    ),
    (
        "deity",
        &[
            Primitive::dot(50, 50, 10),
            Primitive::line(50, 30, 50, 10),
            Primitive::line(50, 70, 50, 90),
            Primitive::line(30, 50, 10, 50),
            Primitive::line(70, 50, 90, 50),
            Primitive::line(35, 35, 20, 20),
            Primitive::line(65, 65, 80, 80),
            Primitive::line(35, 65, 20, 80),
            Primitive::line(65, 35, 80, 20),
        ],
    ),
];

static INDEX: LazyLock<HashMap<&'static str, &'static [Primitive]>> =
    LazyLock::new(|| GLYPHS.iter().copied().collect());

/// Primitives for `key`, or [`FALLBACK`] when the catalog has no entry.
pub fn recipe(key: &str) -> &'static [Primitive] {
    INDEX.get(key).copied().unwrap_or(FALLBACK)
}

/// Rendered glyph markup for `key`. Never empty.
pub fn glyph(key: &str) -> String {
    render(recipe(key))
}

pub fn fallback() -> String {
    render(FALLBACK)
}

pub fn is_known(key: &str) -> bool {
    INDEX.contains_key(key)
}

/// Known keys in table order.
pub fn keys() -> impl Iterator<Item = &'static str> {
    GLYPHS.iter().map(|(key, _)| *key)
}

/// Serializable view of one catalog entry.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogEntry {
    pub key: &'static str,
    pub primitives: &'static [Primitive],
}

/// The whole catalog as data, fallback included.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogDump {
    pub glyphs: Vec<CatalogEntry>,
    pub fallback: &'static [Primitive],
}

pub fn entries() -> CatalogDump {
    CatalogDump {
        glyphs: GLYPHS
            .iter()
            .map(|&(key, primitives)| CatalogEntry { key, primitives })
            .collect(),
        fallback: FALLBACK,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn keys_are_unique() {
        let mut seen = HashSet::new();
        for key in keys() {
            assert!(seen.insert(key), "duplicate catalog key {key}");
        }
        assert_eq!(INDEX.len(), GLYPHS.len());
    }

    #[test]
    fn every_recipe_draws_something() {
        for (key, primitives) in GLYPHS {
            assert!(!primitives.is_empty(), "{key} has no primitives");
        }
        assert!(!FALLBACK.is_empty());
    }

    #[test]
    fn aliases_share_one_recipe() {
        assert_eq!(glyph("is"), glyph("equal"));
        assert_eq!(recipe("is"), recipe("equal"));
        assert_ne!(glyph("is"), glyph("equality"));
    }

    #[test]
    fn lookup_is_exact() {
        assert!(is_known("me"));
        assert!(!is_known("Me"));
        assert!(!is_known(" me"));
        assert!(!is_known("m"));
        assert_eq!(recipe("ME"), FALLBACK);
    }
}
