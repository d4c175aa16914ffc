//! Font selection: an ordered family preference list plus a pixel size.

use cosmic_text::Family;

/// Generic family names that always resolve through the font database's
/// generic-family mapping.
const GENERIC_FAMILIES: [&str; 5] = ["serif", "sans-serif", "cursive", "fantasy", "monospace"];

/// The font text is measured and outlined with.
#[derive(Debug, Clone, PartialEq)]
pub struct FontFace {
    /// Font families in order of preference.
    pub families: Vec<String>,
    /// Font size in pixels.
    pub size_px: f32,
}

impl Default for FontFace {
    fn default() -> Self {
        Self {
            families: vec!["sans-serif".to_string()],
            size_px: 10.0,
        }
    }
}

impl FontFace {
    /// Create a face for the given families at the default size.
    pub fn new<S: AsRef<str>>(families: &[S]) -> Self {
        Self {
            families: families.iter().map(|f| f.as_ref().to_string()).collect(),
            ..Self::default()
        }
    }
}

/// Whether `name` is one of the CSS generic family keywords.
pub fn is_generic_family(name: &str) -> bool {
    GENERIC_FAMILIES
        .iter()
        .any(|generic| generic.eq_ignore_ascii_case(name.trim()))
}

/// Map a family name to a cosmic-text family, turning generic keywords into
/// their generic variants.
pub(crate) fn to_cosmic_family(name: &str) -> Family<'_> {
    let name = name.trim();
    match name.to_ascii_lowercase().as_str() {
        "serif" => Family::Serif,
        "sans-serif" => Family::SansSerif,
        "cursive" => Family::Cursive,
        "fantasy" => Family::Fantasy,
        "monospace" => Family::Monospace,
        _ => Family::Name(name),
    }
}

/// Pick the first family of `families` available in `db`.
///
/// Generic keywords always count as available.
pub(crate) fn resolve_family<'a>(db: &fontdb::Database, families: &'a [String]) -> Option<&'a str> {
    families
        .iter()
        .map(String::as_str)
        .find(|family| is_generic_family(family) || family_installed(db, family))
}

/// Whether a face with the given family name is registered in `db`.
pub fn family_installed(db: &fontdb::Database, family: &str) -> bool {
    let family = family.trim();
    db.faces().any(|face| {
        face.families
            .iter()
            .any(|(name, _lang)| name.eq_ignore_ascii_case(family))
    })
}
