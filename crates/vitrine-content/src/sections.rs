//! The four overlay sections and their copy.
//!
//! Sections are placed at fixed 3D anchor points but rendered as flat
//! panels. The buttons and the contact form are inert by design; nothing
//! here carries behavior.

use vitrine_core::{SectionId, Vec3};

/// A service offering card.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Card {
    /// Short icon glyph shown above the card title.
    pub icon: &'static str,
    /// Card title.
    pub title: &'static str,
    /// One-line description.
    pub blurb: &'static str,
}

/// A headline statistic in the about section.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Stat {
    /// The large number, e.g. "50+".
    pub number: &'static str,
    /// What the number counts.
    pub label: &'static str,
}

/// Typed body content, one shape per section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionBody {
    /// Headline, subtitle and two inert call-to-action buttons.
    Hero {
        subtitle: &'static str,
        buttons: [&'static str; 2],
    },
    /// The service card grid.
    Cards(&'static [Card]),
    /// Paragraphs followed by headline stats.
    Prose {
        paragraphs: &'static [&'static str],
        stats: &'static [Stat],
    },
    /// Inert form field placeholders plus contact details.
    Form {
        fields: &'static [&'static str],
        submit: &'static str,
        info: &'static [&'static str],
    },
}

/// One overlay section: title, 3D anchor and body copy.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    /// Which section this is.
    pub id: SectionId,
    /// Section heading.
    pub title: &'static str,
    /// World-space anchor the panel is positioned at.
    pub anchor: Vec3,
    /// The literal content.
    pub body: SectionBody,
}

const SERVICE_CARDS: [Card; 3] = [
    Card {
        icon: "🌐",
        title: "Web Development",
        blurb: "Modern, responsive websites with cutting-edge technologies",
    },
    Card {
        icon: "⚙",
        title: "Management Systems",
        blurb: "Large-scale enterprise solutions for complex business needs",
    },
    Card {
        icon: "📱",
        title: "Full-Stack Solutions",
        blurb: "End-to-end development from concept to deployment",
    },
];

const ABOUT_PARAGRAPHS: [&str; 2] = [
    "We are a forward-thinking programming company specializing in \
     innovative web development and comprehensive management systems.",
    "Our team combines technical expertise with creative vision to \
     deliver solutions that not only meet but exceed expectations.",
];

const ABOUT_STATS: [Stat; 2] = [
    Stat {
        number: "50+",
        label: "Projects Completed",
    },
    Stat {
        number: "10+",
        label: "Years Experience",
    },
];

const CONTACT_FIELDS: [&str; 3] = ["Your Name", "Your Email", "Your Message"];

const CONTACT_INFO: [&str; 3] = [
    "✉ info@vitrine.dev",
    "☎ +00 XXX XXX XXXX",
    "⌂ Remote, worldwide",
];

/// All four sections with their anchors, in page order.
pub fn sections() -> [Section; 4] {
    [
        Section {
            id: SectionId::Hero,
            title: "Advanced Programming Solutions",
            anchor: Vec3::new(0.0, 8.0, 0.0),
            body: SectionBody::Hero {
                subtitle: "We create cutting-edge web applications and \
                           large-scale management systems",
                buttons: ["Our Services", "Contact Us"],
            },
        },
        Section {
            id: SectionId::Services,
            title: "Our Expertise",
            anchor: Vec3::new(0.0, -8.0, 0.0),
            body: SectionBody::Cards(&SERVICE_CARDS),
        },
        Section {
            id: SectionId::About,
            title: "About Our Company",
            anchor: Vec3::new(15.0, 0.0, 0.0),
            body: SectionBody::Prose {
                paragraphs: &ABOUT_PARAGRAPHS,
                stats: &ABOUT_STATS,
            },
        },
        Section {
            id: SectionId::Contact,
            title: "Get In Touch",
            anchor: Vec3::new(-15.0, 0.0, 0.0),
            body: SectionBody::Form {
                fields: &CONTACT_FIELDS,
                submit: "Send Message",
                info: &CONTACT_INFO,
            },
        },
    ]
}

/// Look up a single section by id.
pub fn section(id: SectionId) -> Section {
    sections()
        .into_iter()
        .find(|s| s.id == id)
        .unwrap_or_else(|| sections()[0].clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors_match_the_page_layout() {
        let all = sections();
        assert_eq!(all[0].anchor, Vec3::new(0.0, 8.0, 0.0));
        assert_eq!(all[1].anchor, Vec3::new(0.0, -8.0, 0.0));
        assert_eq!(all[2].anchor, Vec3::new(15.0, 0.0, 0.0));
        assert_eq!(all[3].anchor, Vec3::new(-15.0, 0.0, 0.0));
    }

    #[test]
    fn every_section_id_resolves() {
        for id in SectionId::ALL {
            assert_eq!(section(id).id, id);
        }
    }

    #[test]
    fn services_has_three_cards() {
        let SectionBody::Cards(cards) = section(SectionId::Services).body else {
            panic!("services body must be cards");
        };
        assert_eq!(cards.len(), 3);
    }
}
