//! The animal record schema.
//!
//! These types match the JSON produced by the catalog server's
//! `/api/images` endpoint. They are the common data format between the
//! server and every consumer in this workspace.

/// One catalog entry describing a single animal.
///
/// The wire format is camelCase. The life-span field is canonically
/// `lifeSpan`, but `lifespan` is accepted as an alias because both
/// spellings exist in the wild (see DESIGN.md).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct AnimalRecord {
    /// Display name. Also the only field searched by the gallery.
    pub name: String,

    /// Animal category (e.g. "Mammal", "Bird"). Named `type` on the wire.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: String,

    /// Dominant color, free-form text.
    pub color: String,

    /// Longer description shown in the detail overlay.
    pub description: String,

    /// Typical life span, free-form text (e.g. "2-5 years").
    #[cfg_attr(feature = "serde", serde(alias = "lifespan"))]
    pub life_span: String,

    /// Image location relative to the server origin (e.g. "/images/fox.png").
    pub image_path: String,
}

impl AnimalRecord {
    /// Join the record's relative image path with a server origin,
    /// normalizing the slash at the boundary.
    pub fn image_url(&self, origin: &str) -> String {
        format!(
            "{}/{}",
            origin.trim_end_matches('/'),
            self.image_path.trim_start_matches('/')
        )
    }

    /// Case-insensitive substring match on the record name.
    ///
    /// An empty query matches every record. Only the name participates;
    /// descriptions and other fields never match.
    pub fn matches(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&query.to_lowercase())
    }
}
