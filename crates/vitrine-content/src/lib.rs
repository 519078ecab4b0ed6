//! Static marketing content for the vitrine showcase.
//!
//! Everything here is literal data: the overlay section copy with its 3D
//! anchor points, the code snippets orbiting the backdrop, and the
//! ASCII-art wordmark glyphs used for the hero title. The wordmark can
//! also be loaded from an external glyph file, which is the one asset the
//! application defers rendering on.

mod sections;
mod snippets;
mod wordmark;

pub use sections::{Card, Section, SectionBody, Stat, section, sections};
pub use snippets::CODE_SNIPPETS;
pub use wordmark::{BRAND, ContentError, WordmarkFont};
