use folio_core::DescriptionPair;

use serde::Serialize;

/// Flat generator output; provenance travels in a header
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DescriptionPairDto {
    pub short_description: String,
    pub description: String,
}

impl From<DescriptionPair> for DescriptionPairDto {
    fn from(pair: DescriptionPair) -> Self {
        Self {
            short_description: pair.short_description,
            description: pair.description,
        }
    }
}
