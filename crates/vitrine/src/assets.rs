//! Deferred asset resolution.
//!
//! The scene group renders only once these assets exist; until then the
//! application shows the loading placeholder. There is no retry: a font
//! that fails to load aborts startup with the underlying error.

use vitrine_config::Config;
use vitrine_content::{ContentError, WordmarkFont};

/// Assets the scene defers on.
#[derive(Debug, Clone)]
pub struct Assets {
    /// Glyphs for the hero wordmark.
    pub wordmark: WordmarkFont,
}

impl Assets {
    /// Resolve all assets, honoring a configured font override.
    pub fn load(config: &Config) -> Result<Self, ContentError> {
        let wordmark = match &config.font_path {
            Some(path) => WordmarkFont::from_file(path)?,
            None => WordmarkFont::embedded(),
        };
        Ok(Self { wordmark })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_font_resolves_without_config() {
        let assets = Assets::load(&Config::default()).unwrap();
        assert!(!assets.wordmark.render("V")[0].is_empty());
    }

    #[test]
    fn missing_font_file_is_an_error() {
        let config = Config {
            font_path: Some("/nonexistent/glyphs.txt".into()),
            ..Config::default()
        };
        assert!(matches!(Assets::load(&config), Err(ContentError::Io(_))));
    }
}
