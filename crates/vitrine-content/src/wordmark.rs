//! ASCII-art wordmark glyphs for the hero title.
//!
//! The glyphs for the brand letters ship embedded; an external glyph file
//! can replace them. Loading that file is the one deferrable asset the
//! application waits on before the scene renders.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use thiserror::Error;

/// The brand name rendered by the wordmark.
pub const BRAND: &str = "VITRINE";

/// Rows every glyph must have.
const GLYPH_ROWS: usize = 7;

/// Letter V (7 lines tall, 6 chars wide)
const LETTER_V: [&str; 7] = [
    "██  ██",
    "██  ██",
    "██  ██",
    "██  ██",
    "██  ██",
    " ████ ",
    "  ██  ",
];

/// Letter I
const LETTER_I: [&str; 7] = [
    " ████ ",
    "  ██  ",
    "  ██  ",
    "  ██  ",
    "  ██  ",
    "  ██  ",
    " ████ ",
];

/// Letter T
const LETTER_T: [&str; 7] = [
    "██████",
    "  ██  ",
    "  ██  ",
    "  ██  ",
    "  ██  ",
    "  ██  ",
    "  ██  ",
];

/// Letter R
const LETTER_R: [&str; 7] = [
    "█████ ",
    "██  ██",
    "██  ██",
    "█████ ",
    "██ ██ ",
    "██  ██",
    "██  ██",
];

/// Letter N
const LETTER_N: [&str; 7] = [
    "██  ██",
    "███ ██",
    "██████",
    "██ ███",
    "██  ██",
    "██  ██",
    "██  ██",
];

/// Letter E
const LETTER_E: [&str; 7] = [
    "██████",
    "██    ",
    "██    ",
    "█████ ",
    "██    ",
    "██    ",
    "██████",
];

/// Errors raised while loading an external glyph file.
#[derive(Debug, Error)]
pub enum ContentError {
    /// The glyph file could not be read.
    #[error("failed to read glyph file: {0}")]
    Io(#[from] std::io::Error),
    /// A block did not start with a `char X` header.
    #[error("expected `char X` header at line {line}")]
    BadHeader {
        /// One-based line number of the offending line.
        line: usize,
    },
    /// A glyph block ended before all of its rows were given.
    #[error("glyph '{glyph}' has fewer than 7 rows")]
    MissingRows {
        /// The glyph the truncated block declared.
        glyph: char,
    },
    /// The file parsed cleanly but defined no glyphs.
    #[error("glyph file defines no glyphs")]
    Empty,
}

/// A fixed-height ASCII-art font keyed by character.
#[derive(Debug, Clone)]
pub struct WordmarkFont {
    glyphs: HashMap<char, [String; GLYPH_ROWS]>,
}

impl WordmarkFont {
    /// The embedded default glyph set covering the brand letters.
    pub fn embedded() -> Self {
        let mut glyphs = HashMap::new();
        for (ch, rows) in [
            ('V', LETTER_V),
            ('I', LETTER_I),
            ('T', LETTER_T),
            ('R', LETTER_R),
            ('N', LETTER_N),
            ('E', LETTER_E),
        ] {
            glyphs.insert(ch, rows.map(String::from));
        }
        Self { glyphs }
    }

    /// Load a glyph set from a file.
    ///
    /// The format is a sequence of blocks: a `char X` header line followed
    /// by exactly seven glyph rows. Blank lines between blocks are
    /// ignored.
    pub fn from_file(path: &Path) -> Result<Self, ContentError> {
        Self::parse(&fs::read_to_string(path)?)
    }

    fn parse(text: &str) -> Result<Self, ContentError> {
        let mut glyphs = HashMap::new();
        let mut lines = text.lines().enumerate();

        while let Some((idx, line)) = lines.next() {
            if line.trim().is_empty() {
                continue;
            }
            let glyph = line
                .strip_prefix("char ")
                .and_then(|rest| {
                    let mut chars = rest.trim().chars();
                    match (chars.next(), chars.next()) {
                        (Some(c), None) => Some(c),
                        _ => None,
                    }
                })
                .ok_or(ContentError::BadHeader { line: idx + 1 })?;

            let mut rows: Vec<String> = Vec::with_capacity(GLYPH_ROWS);
            for _ in 0..GLYPH_ROWS {
                match lines.next() {
                    Some((_, row)) => rows.push(row.to_string()),
                    None => return Err(ContentError::MissingRows { glyph }),
                }
            }
            let rows: [String; GLYPH_ROWS] = rows
                .try_into()
                .map_err(|_| ContentError::MissingRows { glyph })?;
            glyphs.insert(glyph.to_ascii_uppercase(), rows);
        }

        if glyphs.is_empty() {
            return Err(ContentError::Empty);
        }
        Ok(Self { glyphs })
    }

    /// Render `text` as seven lines of ASCII art.
    ///
    /// Characters without a glyph render as a blank block; a space
    /// renders as a narrow gap.
    pub fn render(&self, text: &str) -> Vec<String> {
        let mut lines = vec![String::new(); GLYPH_ROWS];
        for ch in text.chars() {
            let glyph = self.glyphs.get(&ch.to_ascii_uppercase());
            for (row, line) in lines.iter_mut().enumerate() {
                if !line.is_empty() {
                    line.push(' ');
                }
                match glyph {
                    Some(rows) => line.push_str(&rows[row]),
                    None if ch == ' ' => line.push_str("  "),
                    None => line.push_str("      "),
                }
            }
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn embedded_font_renders_the_brand() {
        let font = WordmarkFont::embedded();
        let lines = font.render(BRAND);
        assert_eq!(lines.len(), GLYPH_ROWS);
        let width = lines[0].chars().count();
        assert!(width > BRAND.len());
        for line in &lines {
            assert_eq!(line.chars().count(), width, "rows must align");
        }
    }

    #[test]
    fn unknown_characters_render_blank() {
        let font = WordmarkFont::embedded();
        let lines = font.render("Q");
        assert!(lines.iter().all(|l| l.trim().is_empty()));
    }

    #[test]
    fn loads_a_glyph_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "char X").unwrap();
        for _ in 0..GLYPH_ROWS {
            writeln!(file, "xxxxxx").unwrap();
        }
        let font = WordmarkFont::from_file(file.path()).unwrap();
        assert_eq!(font.render("x")[0], "xxxxxx");
    }

    #[test]
    fn truncated_glyph_block_fails() {
        let err = WordmarkFont::parse("char X\nrow1\nrow2").unwrap_err();
        assert!(matches!(err, ContentError::MissingRows { glyph: 'X' }));
    }

    #[test]
    fn missing_header_fails_with_line_number() {
        let err = WordmarkFont::parse("not a header").unwrap_err();
        assert!(matches!(err, ContentError::BadHeader { line: 1 }));
    }

    #[test]
    fn empty_file_fails() {
        assert!(matches!(
            WordmarkFont::parse("\n\n"),
            Err(ContentError::Empty)
        ));
    }
}
