use crate::error::{CanvasError, CanvasResult};
use std::collections::HashSet;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Font setup for a canvas.
///
/// Describes where fonts come from and how generic family keywords map onto
/// installed families. It is turned into a font database with
/// [`font_config_to_fontdb`], or once up front with [`FontConfig::resolve`]
/// when several canvases should share the same fonts.
#[derive(Clone, Debug)]
pub struct FontConfig {
    /// Raw font data to register.
    pub custom_fonts: Vec<CustomFont>,
    /// Individual font files to register.
    pub font_files: Vec<PathBuf>,
    /// Additional directories to scan for font files.
    pub font_dirs: Vec<PathBuf>,
    /// Mappings from generic CSS family names to concrete font family names.
    pub generic_families: GenericFamilyMap,
    /// Whether to load system fonts (default: true).
    pub load_system_fonts: bool,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            custom_fonts: Vec::new(),
            font_files: Vec::new(),
            font_dirs: Vec::new(),
            generic_families: GenericFamilyMap::defaults(),
            load_system_fonts: true,
        }
    }
}

/// Raw font file data (TTF/OTF). Arc-wrapped for cheap cloning.
#[derive(Clone, Debug)]
pub struct CustomFont {
    pub data: Arc<Vec<u8>>,
}

/// Mappings from generic CSS family names to concrete font family names, in priority order.
#[derive(Clone, Debug, Default)]
pub struct GenericFamilyMap {
    pub serif: Vec<String>,
    pub sans_serif: Vec<String>,
    pub monospace: Vec<String>,
    pub cursive: Vec<String>,
    pub fantasy: Vec<String>,
}

impl GenericFamilyMap {
    /// Browser-like preference lists, with script faces first for `cursive`
    /// since glow text is usually set in one.
    pub fn defaults() -> Self {
        Self {
            sans_serif: vec![
                "Arial".into(),
                "Helvetica".into(),
                "Liberation Sans".into(),
                "DejaVu Sans".into(),
            ],
            monospace: vec![
                "Courier New".into(),
                "Courier".into(),
                "Liberation Mono".into(),
                "DejaVu Sans Mono".into(),
            ],
            serif: vec![
                "Times New Roman".into(),
                "Times".into(),
                "Liberation Serif".into(),
                "DejaVu Serif".into(),
            ],
            cursive: vec![
                "Zapfino".into(),
                "Apple Chancery".into(),
                "URW Chancery L".into(),
                "Z003".into(),
                "Comic Sans MS".into(),
            ],
            fantasy: vec!["Impact".into(), "Papyrus".into()],
        }
    }
}

impl FontConfig {
    /// Resolve this configuration into a concrete font database.
    ///
    /// System font scanning happens here, once. The result can be handed to
    /// any number of canvases.
    pub fn resolve(&self) -> CanvasResult<ResolvedFontConfig> {
        ResolvedFontConfig::new(self)
    }
}

/// A [`FontConfig`] that has been resolved into a concrete font database.
///
/// Cloning clones the in-memory database without touching the filesystem.
#[derive(Clone)]
pub struct ResolvedFontConfig {
    pub(crate) fontdb: fontdb::Database,
}

impl ResolvedFontConfig {
    pub fn new(config: &FontConfig) -> CanvasResult<Self> {
        Ok(Self {
            fontdb: font_config_to_fontdb(config)?,
        })
    }

    /// Number of font faces available.
    pub fn face_count(&self) -> usize {
        self.fontdb.len()
    }

    /// Whether a face of the given family is registered.
    pub fn has_family(&self, family: &str) -> bool {
        crate::font_face::family_installed(&self.fontdb, family)
    }
}

/// Convert a [`FontConfig`] into a [`fontdb::Database`].
///
/// Font directories and files that cannot be read fail with
/// [`CanvasError::Io`] naming the path. Readable files that hold no valid
/// font are skipped.
pub fn font_config_to_fontdb(config: &FontConfig) -> CanvasResult<fontdb::Database> {
    let mut db = fontdb::Database::new();

    if config.load_system_fonts {
        db.load_system_fonts();
    }

    for dir in &config.font_dirs {
        log::debug!("Loading fonts from directory {}", dir.display());
        // fontdb skips unreadable directories without reporting them
        std::fs::read_dir(dir).map_err(|err| with_path(err, dir))?;
        db.load_fonts_dir(dir);
    }

    for file in &config.font_files {
        log::debug!("Loading font file {}", file.display());
        db.load_font_file(file).map_err(|err| with_path(err, file))?;
    }

    for font in &config.custom_fonts {
        db.load_font_data(Vec::from(font.data.as_slice()));
    }

    apply_generic_families(&mut db, &config.generic_families);

    log::debug!("Font database holds {} faces", db.len());
    Ok(db)
}

fn with_path(err: io::Error, path: &Path) -> CanvasError {
    CanvasError::Io(io::Error::new(
        err.kind(),
        format!("{}: {}", path.display(), err),
    ))
}

/// Apply generic family mappings to a fontdb database, choosing the first available
/// family from each priority list.
fn apply_generic_families(db: &mut fontdb::Database, families: &GenericFamilyMap) {
    let available: HashSet<String> = db
        .faces()
        .flat_map(|face| face.families.iter().map(|(fam, _lang)| fam.clone()))
        .collect();

    let first_available =
        |list: &[String]| list.iter().find(|family| available.contains(*family)).cloned();

    if let Some(family) = first_available(&families.sans_serif) {
        db.set_sans_serif_family(family);
    }
    if let Some(family) = first_available(&families.monospace) {
        db.set_monospace_family(family);
    }
    if let Some(family) = first_available(&families.serif) {
        db.set_serif_family(family);
    }
    if let Some(family) = first_available(&families.cursive) {
        db.set_cursive_family(family);
    }
    if let Some(family) = first_available(&families.fantasy) {
        db.set_fantasy_family(family);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_font_config() {
        let config = FontConfig::default();
        assert!(config.custom_fonts.is_empty());
        assert!(config.font_files.is_empty());
        assert!(config.font_dirs.is_empty());
        assert!(config.load_system_fonts);
        assert_eq!(config.generic_families.cursive[0], "Zapfino");
    }

    #[test]
    fn test_font_config_to_fontdb_no_system_fonts() {
        let config = FontConfig {
            load_system_fonts: false,
            ..FontConfig::default()
        };
        let db = font_config_to_fontdb(&config).unwrap();
        assert_eq!(db.faces().count(), 0);
    }

    #[test]
    fn test_missing_font_file_is_an_error() {
        let config = FontConfig {
            load_system_fonts: false,
            font_files: vec![PathBuf::from("/nonexistent/font/file.ttf")],
            ..FontConfig::default()
        };
        match config.resolve() {
            Err(CanvasError::Io(err)) => {
                assert_eq!(err.kind(), io::ErrorKind::NotFound);
                assert!(err.to_string().contains("/nonexistent/font/file.ttf"));
            }
            other => panic!("expected an I/O error, got {:?}", other.map(|r| r.face_count())),
        }
    }

    #[test]
    fn test_missing_font_dir_is_an_error() {
        let config = FontConfig {
            load_system_fonts: false,
            font_dirs: vec![PathBuf::from("/nonexistent/font/dir")],
            ..FontConfig::default()
        };
        assert!(matches!(config.resolve(), Err(CanvasError::Io(_))));
    }

    #[test]
    fn test_empty_font_dir_resolves() {
        let dir = tempfile::tempdir().unwrap();
        let config = FontConfig {
            load_system_fonts: false,
            font_dirs: vec![dir.path().to_path_buf()],
            ..FontConfig::default()
        };
        let resolved = config.resolve().unwrap();
        assert_eq!(resolved.face_count(), 0);
        assert!(!resolved.has_family("Zapfino"));
    }

    #[test]
    fn test_invalid_custom_font_data_is_ignored() {
        let config = FontConfig {
            load_system_fonts: false,
            custom_fonts: vec![CustomFont {
                data: Arc::new(vec![0u8; 64]),
            }],
            ..FontConfig::default()
        };
        assert_eq!(config.resolve().unwrap().face_count(), 0);
    }
}
