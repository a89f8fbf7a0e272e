//! URL template addressing schemes.

use crate::tile::TileIdentifier;

/// Token replaced with a tile's quadkey code in quadkey templates.
pub const QUADKEY_TOKEN: &str = "{quadkey}";

/// How a service's URL template addresses an individual tile.
///
/// The scheme is detected from the template's tokens rather than declared,
/// so a service constructed from configuration picks up the right
/// substitution automatically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlScheme {
    /// The template carries a `{quadkey}` token replaced by the tile's
    /// base-4 code.
    QuadKey,
    /// The template carries `{z}`, `{x}` and `{y}` tokens replaced by the
    /// tile's zoom level, column and row.
    Xyz,
    /// The template carries no recognized address tokens and passes
    /// through untouched; standards-based request assembly resolves the
    /// final URL instead.
    Opaque,
}

impl UrlScheme {
    /// Detects the addressing scheme a template uses.
    pub fn detect(template: &str) -> UrlScheme {
        if template.contains(QUADKEY_TOKEN) {
            UrlScheme::QuadKey
        } else if template.contains("{z}") && template.contains("{x}") && template.contains("{y}") {
            UrlScheme::Xyz
        } else {
            UrlScheme::Opaque
        }
    }

    /// Substitutes a tile's address into the template.
    pub fn substitute(&self, template: &str, identifier: &TileIdentifier) -> String {
        match self {
            UrlScheme::QuadKey => template.replace(QUADKEY_TOKEN, &identifier.code()),
            UrlScheme::Xyz => template
                .replace("{z}", &identifier.zoom().to_string())
                .replace("{x}", &identifier.x().to_string())
                .replace("{y}", &identifier.y().to_string()),
            UrlScheme::Opaque => template.to_string(),
        }
    }
}
