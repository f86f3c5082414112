use std::path::{Path, PathBuf};

pub const DEFAULT_WORDS_FILE: &str = "words.json";
pub const DEFAULT_DICTIONARY_FILE: &str = "dictionary.json";
pub const DEFAULT_PREVIEW_FILE: &str = "preview.html";

/// File locations for one generator run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Word list read by the dictionary stage.
    pub words_path: PathBuf,
    /// Dictionary written by the dictionary stage and read by the later ones.
    pub dictionary_path: PathBuf,
    /// Preview page written by the preview stage.
    pub preview_path: PathBuf,
    /// Directory for standalone per-word SVG files. Export is skipped when unset.
    pub svg_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            words_path: PathBuf::from(DEFAULT_WORDS_FILE),
            dictionary_path: PathBuf::from(DEFAULT_DICTIONARY_FILE),
            preview_path: PathBuf::from(DEFAULT_PREVIEW_FILE),
            svg_dir: None,
        }
    }
}

impl Config {
    /// Default file names rooted at `dir` instead of the working directory.
    pub fn in_dir<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref();
        Self {
            words_path: dir.join(DEFAULT_WORDS_FILE),
            dictionary_path: dir.join(DEFAULT_DICTIONARY_FILE),
            preview_path: dir.join(DEFAULT_PREVIEW_FILE),
            svg_dir: None,
        }
    }

    pub fn with_svg_dir<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.svg_dir = Some(dir.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_working_directory_relative() {
        let config = Config::default();
        assert_eq!(config.words_path, Path::new("words.json"));
        assert_eq!(config.dictionary_path, Path::new("dictionary.json"));
        assert_eq!(config.preview_path, Path::new("preview.html"));
        assert!(config.svg_dir.is_none());
    }

    #[test]
    fn in_dir_roots_every_path() {
        let config = Config::in_dir("/tmp/glyphs").with_svg_dir("/tmp/glyphs/svg");
        assert_eq!(config.words_path, Path::new("/tmp/glyphs/words.json"));
        assert_eq!(config.dictionary_path, Path::new("/tmp/glyphs/dictionary.json"));
        assert_eq!(config.preview_path, Path::new("/tmp/glyphs/preview.html"));
        assert_eq!(config.svg_dir.as_deref(), Some(Path::new("/tmp/glyphs/svg")));
    }
}
