//! Identifiers for the marketing overlay sections.

/// The four overlay sections of the showcase page.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum SectionId {
    /// Headline, subtitle and call-to-action buttons.
    #[default]
    Hero,
    /// The service card grid.
    Services,
    /// Company background and stats.
    About,
    /// Contact form and contact details.
    Contact,
}

impl SectionId {
    /// All sections in page order.
    pub const ALL: [Self; 4] = [Self::Hero, Self::Services, Self::About, Self::Contact];

    /// Cycle to the next section in page order.
    pub fn next(self) -> Self {
        match self {
            Self::Hero => Self::Services,
            Self::Services => Self::About,
            Self::About => Self::Contact,
            Self::Contact => Self::Hero,
        }
    }

    /// Title shown in the navigation bar.
    pub fn title(self) -> &'static str {
        match self {
            Self::Hero => "Home",
            Self::Services => "Services",
            Self::About => "About",
            Self::Contact => "Contact",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycles_through_all_sections() {
        let mut id = SectionId::Hero;
        for expected in SectionId::ALL {
            assert_eq!(id, expected);
            id = id.next();
        }
        assert_eq!(id, SectionId::Hero);
    }
}
