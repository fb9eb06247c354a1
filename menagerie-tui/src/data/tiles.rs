//! Tile construction: records in, display entities out.
//!
//! A tile carries a copy of everything the gallery and the detail
//! overlay need, so opening a tile never goes back to the network.

use menagerie_types::AnimalRecord;

/// One selectable gallery entry, built from a single record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    pub name: String,
    pub kind: String,
    pub color: String,
    pub description: String,
    pub life_span: String,
    /// Fully-joined image URL (origin + relative path).
    pub image_url: String,
}

impl Tile {
    /// Copy a record's fields into a tile, resolving the image URL
    /// against the given origin.
    pub fn from_record(record: &AnimalRecord, origin: &str) -> Self {
        Self {
            name: record.name.clone(),
            kind: record.kind.clone(),
            color: record.color.clone(),
            description: record.description.clone(),
            life_span: record.life_span.clone(),
            image_url: record.image_url(origin),
        }
    }
}

/// Build the tile list for the current query.
///
/// Filters records by case-insensitive substring match on the name,
/// then copies each survivor into a [`Tile`]. The whole list is rebuilt
/// on every call; tiles are never patched in place.
pub fn build_tiles(records: &[AnimalRecord], query: &str, origin: &str) -> Vec<Tile> {
    records
        .iter()
        .filter(|r| r.matches(query))
        .map(|r| Tile::from_record(r, origin))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORIGIN: &str = "http://localhost:3000";

    fn record(name: &str, description: &str) -> AnimalRecord {
        AnimalRecord {
            name: name.to_string(),
            kind: "Mammal".to_string(),
            color: "Red".to_string(),
            description: description.to_string(),
            life_span: "2-5 years".to_string(),
            image_path: format!("/images/{}.png", name.to_lowercase()),
        }
    }

    #[test]
    fn test_build_tiles_one_per_record() {
        let records = vec![record("Fox", ""), record("Owl", ""), record("Bear", "")];
        let tiles = build_tiles(&records, "", ORIGIN);
        assert_eq!(tiles.len(), records.len());
    }

    #[test]
    fn test_tile_copies_record_fields() {
        let fox = record("Fox", "A small canid.");
        let tiles = build_tiles(std::slice::from_ref(&fox), "", ORIGIN);

        let tile = &tiles[0];
        assert_eq!(tile.name, fox.name);
        assert_eq!(tile.kind, fox.kind);
        assert_eq!(tile.color, fox.color);
        assert_eq!(tile.description, fox.description);
        assert_eq!(tile.life_span, fox.life_span);
        assert_eq!(tile.image_url, "http://localhost:3000/images/fox.png");
    }

    #[test]
    fn test_build_tiles_filters_by_name_substring() {
        let records = vec![record("Fox", ""), record("OXEN", ""), record("Bear", "")];
        let tiles = build_tiles(&records, "ox", ORIGIN);

        let names: Vec<&str> = tiles.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Fox", "OXEN"]);
    }

    #[test]
    fn test_build_tiles_ignores_description_matches() {
        let records = vec![record("Bear", "lives near the ox pasture")];
        let tiles = build_tiles(&records, "ox", ORIGIN);
        assert!(tiles.is_empty());
    }

    #[test]
    fn test_build_tiles_empty_input() {
        let tiles = build_tiles(&[], "anything", ORIGIN);
        assert!(tiles.is_empty());
    }
}
