//! Page layout model shared by every host.

use crate::config::RevealConfig;
use crate::reveal::Reveal;
use crate::scroll::SectionId;

/// A button in the floating nav bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub section: SectionId,
    pub label: &'static str,
}

pub fn nav_items() -> [NavItem; 4] {
    SectionId::ALL.map(|section| NavItem {
        section,
        label: section.as_str(),
    })
}

/// Reveal settings for each animated block of the page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageReveals {
    pub hero: Reveal,
    pub about_text: Reveal,
    pub portrait: Reveal,
    pub experience_heading: Reveal,
    pub experience_selector: Reveal,
    pub projects_heading: Reveal,
    pub footer: Reveal,
    card_stagger_ms: u32,
}

impl PageReveals {
    pub fn new(config: &RevealConfig) -> Self {
        let heading = Reveal::up().delay_ms(config.heading_delay_ms);
        Self {
            hero: Reveal::up(),
            about_text: Reveal::up(),
            portrait: heading,
            experience_heading: heading,
            experience_selector: Reveal::left(),
            projects_heading: heading,
            footer: Reveal::up(),
            card_stagger_ms: config.card_stagger_ms,
        }
    }

    /// Project cards cascade in list order.
    pub fn project_card(&self, index: usize) -> Reveal {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        Reveal::up().delay_ms(self.card_stagger_ms.saturating_mul(index))
    }
}

pub fn footer_text(name: &str, year: i32) -> String {
    format!("© {year} {name} // all rights reserved")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    #[test]
    fn nav_lists_sections_in_order() {
        let labels: Vec<_> = nav_items().iter().map(|item| item.label).collect();
        assert_eq!(labels, vec!["home", "about", "experience", "projects"]);
    }

    #[test]
    fn cards_are_staggered() {
        let reveals = PageReveals::new(&RevealConfig::default());
        assert_eq!(reveals.project_card(0).delay, Duration::ZERO);
        assert_eq!(reveals.project_card(2).delay, Duration::from_millis(200));
        assert_eq!(reveals.portrait.delay, Duration::from_millis(200));
        assert_eq!(reveals.hero.delay, Duration::ZERO);
    }

    #[test]
    fn footer_names_year_and_owner() {
        assert_eq!(
            footer_text("kate liu", 2026),
            "© 2026 kate liu // all rights reserved"
        );
    }
}
