//! Selected experience.
//!
//! Indices can only be obtained by enumerating the list through
//! [`ExperienceSelector::options`], so a selection is always in bounds.

use std::rc::Rc;

use crate::content::Experience;
use crate::error::{Error, Result};
use crate::signal::Signal;

/// Position of an entry in the experience list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ExperienceIndex(usize);

impl ExperienceIndex {
    pub fn get(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone)]
pub struct ExperienceSelector {
    experiences: Rc<[Experience]>,
    selected: Signal<ExperienceIndex>,
}

impl ExperienceSelector {
    /// Starts on the first entry, so the list must not be empty.
    pub fn new(experiences: Rc<[Experience]>) -> Result<Self> {
        if experiences.is_empty() {
            return Err(Error::NoExperiences);
        }
        Ok(Self {
            experiences,
            selected: Signal::new(ExperienceIndex(0)),
        })
    }

    /// Every entry with its index, in list order.
    pub fn options(&self) -> impl Iterator<Item = (ExperienceIndex, &Experience)> + '_ {
        self.experiences
            .iter()
            .enumerate()
            .map(|(i, experience)| (ExperienceIndex(i), experience))
    }

    /// Makes `index` current. Indices past the end are ignored.
    pub fn select(&self, index: ExperienceIndex) {
        debug_assert!(index.0 < self.experiences.len());
        if index.0 >= self.experiences.len() {
            return;
        }
        if self.selected.set(index) {
            tracing::debug!(index = index.0, "experience selected");
        }
    }

    pub fn selected_index(&self) -> ExperienceIndex {
        self.selected.get()
    }

    /// The record the detail panel shows.
    pub fn selected(&self) -> &Experience {
        &self.experiences[self.selected.get().0]
    }

    pub fn is_selected(&self, index: ExperienceIndex) -> bool {
        self.selected.get() == index
    }

    /// Number of selectable entries.
    pub fn len(&self) -> usize {
        self.experiences.len()
    }

    /// Never true: construction rejects empty lists.
    pub fn is_empty(&self) -> bool {
        self.experiences.is_empty()
    }

    /// Notifies on selection changes.
    pub fn selection(&self) -> Signal<ExperienceIndex> {
        self.selected.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Content;
    use pretty_assertions::assert_eq;
    use std::cell::Cell;

    fn selector() -> ExperienceSelector {
        let content = Content::embedded().unwrap();
        ExperienceSelector::new(content.experiences).unwrap()
    }

    #[test]
    fn starts_on_first_entry() {
        let selector = selector();
        assert_eq!(selector.selected_index().get(), 0);
        assert_eq!(selector.selected().company, "Slack");
        assert_eq!(selector.selected().period, "August 2024 - Present");
    }

    #[test]
    fn selecting_returns_that_record() {
        let content = Content::embedded().unwrap();
        let selector = ExperienceSelector::new(content.experiences.clone()).unwrap();
        let options: Vec<_> = selector.options().map(|(index, _)| index).collect();

        for (i, index) in options.into_iter().enumerate() {
            selector.select(index);
            assert_eq!(selector.selected(), &content.experiences[i]);
            assert!(selector.is_selected(index));
        }
    }

    #[test]
    fn selection_signal_fires_on_change_only() {
        let selector = selector();
        let changes = Rc::new(Cell::new(0));
        let _sub = {
            let changes = changes.clone();
            selector
                .selection()
                .subscribe(move |_| changes.set(changes.get() + 1))
        };

        let second = selector.options().nth(1).map(|(index, _)| index).unwrap();
        selector.select(second);
        selector.select(second);
        assert_eq!(changes.get(), 1);
    }

    #[test]
    fn empty_list_is_rejected() {
        let empty: Rc<[Experience]> = Rc::from(Vec::new());
        assert!(matches!(
            ExperienceSelector::new(empty),
            Err(Error::NoExperiences)
        ));
    }
}
