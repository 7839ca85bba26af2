use std::time::Instant;

use rat_focus::{FocusBuilder, FocusFlag, HasFocus};
use ratatui::layout::Rect;

use super::data::SUMMARY;
use crate::loading::CountingNumber;

/// Pages of the portfolio view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PortfolioPage {
    Overview,
    Performance,
    Obligations,
}

impl PortfolioPage {
    pub const ALL: [PortfolioPage; 3] = [Self::Overview, Self::Performance, Self::Obligations];

    pub fn title(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Performance => "Performance & Risk",
            Self::Obligations => "Liabilities & Activity",
        }
    }
}

#[derive(Debug, Clone)]
pub struct PortfolioState {
    page: PortfolioPage,
    pub wealth: CountingNumber,
    pub container_focus: FocusFlag,
    pub pages_focus: FocusFlag,
    pub last_area: Rect,
    pub page_areas: Vec<Rect>,
}

impl Default for PortfolioState {
    fn default() -> Self {
        Self::new(Instant::now())
    }
}

impl PortfolioState {
    pub fn new(now: Instant) -> Self {
        Self {
            page: PortfolioPage::Overview,
            wealth: CountingNumber::new(SUMMARY.total_value, now),
            container_focus: FocusFlag::named("portfolio"),
            pages_focus: FocusFlag::named("portfolio.pages"),
            last_area: Rect::default(),
            page_areas: Vec::new(),
        }
    }

    /// Restarts the wealth counter when the view mounts.
    pub fn enter(&mut self, now: Instant) {
        self.wealth = CountingNumber::new(SUMMARY.total_value, now);
    }

    pub fn page(&self) -> PortfolioPage {
        self.page
    }

    pub fn page_index(&self) -> usize {
        PortfolioPage::ALL.iter().position(|page| *page == self.page).unwrap_or_default()
    }

    pub fn set_page(&mut self, index: usize) {
        if let Some(page) = PortfolioPage::ALL.get(index) {
            self.page = *page;
        }
    }

    pub fn cycle_page(&mut self, forward: bool) {
        let len = PortfolioPage::ALL.len();
        let index = self.page_index();
        self.set_page(if forward { (index + 1) % len } else { (index + len - 1) % len });
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        !self.wealth.is_finished(now)
    }
}

impl HasFocus for PortfolioState {
    fn build(&self, builder: &mut FocusBuilder) {
        let tag = builder.start(self);
        builder.leaf_widget(&self.pages_focus);
        builder.end(tag);
    }

    fn focus(&self) -> FocusFlag {
        self.container_focus.clone()
    }

    fn area(&self) -> Rect {
        self.last_area
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn pages_cycle_in_both_directions() {
        let mut state = PortfolioState::default();
        state.cycle_page(false);
        assert_eq!(state.page(), PortfolioPage::Obligations);
        state.cycle_page(true);
        assert_eq!(state.page(), PortfolioPage::Overview);
        state.set_page(9);
        assert_eq!(state.page(), PortfolioPage::Overview);
    }

    #[test]
    fn entering_restarts_the_counter() {
        let start = Instant::now();
        let mut state = PortfolioState::new(start);
        let later = start + Duration::from_secs(5);
        assert!(!state.is_animating(later));
        state.enter(later);
        assert!(state.is_animating(later));
        assert_eq!(state.wealth.value_at(later), 0.0);
    }
}
