//! # View state: which page, menu and dialogs are showing
//!
//! [`ViewState`] replaces the CSS class toggles of a hand-written page with
//! plain data that the UI renders from. It knows nothing about the renderer:
//! scrolling and other viewport effects are requested through
//! [`crate::Host`] by the navigation helper in [`crate::pipeline::navigation`].
//!
//! Each form pipeline owns a [`Phase`]. A pipeline only starts from
//! [`Phase::Idle`], which is what keeps a second click on a submit button
//! from starting a parallel submission.

use crate::dashboard::DashboardMetrics;
use crate::directory::SearchResults;

/// A top-level page section.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Register,
    Support,
    Resources,
    Dashboard,
}

impl Page {
    pub const ALL: [Page; 5] = [
        Page::Home,
        Page::Register,
        Page::Support,
        Page::Resources,
        Page::Dashboard,
    ];

    /// Element id of the page section.
    pub fn id(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Register => "register",
            Page::Support => "support",
            Page::Resources => "resources",
            Page::Dashboard => "dashboard",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Register => "Get Started",
            Page::Support => "Find Support",
            Page::Resources => "Resources",
            Page::Dashboard => "Dashboard",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.id() == id)
    }
}

/// Progress of a form submission.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
    Success,
    Navigating,
}

impl Phase {
    pub fn is_idle(self) -> bool {
        self == Phase::Idle
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ViewState {
    active_page: Option<Page>,
    highlighted_link: Option<Page>,
    mobile_menu_open: bool,
    pub checkin_modal_open: bool,
    /// Why the last check-in was rejected. Cleared when the modal closes.
    pub checkin_error: Option<String>,
    pub crisis_modal_open: bool,
    pub registration: Phase,
    pub search: Phase,
    /// Last computed dashboard snapshot; `None` until a user registers.
    pub dashboard: Option<DashboardMetrics>,
    pub support_results: Option<SearchResults>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            active_page: Some(Page::Home),
            highlighted_link: Some(Page::Home),
            mobile_menu_open: false,
            checkin_modal_open: false,
            checkin_error: None,
            crisis_modal_open: false,
            registration: Phase::Idle,
            search: Phase::Idle,
            dashboard: None,
            support_results: None,
        }
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deactivate every page, then activate `page_id` if it names one.
    ///
    /// An unknown id leaves no page active and no link highlighted. The
    /// mobile menu is closed either way.
    pub fn show_page(&mut self, page_id: &str) -> Option<Page> {
        let page = Page::from_id(page_id);
        if page.is_none() {
            tracing::debug!(page_id, "no page section with this id");
        }
        self.active_page = page;
        self.highlighted_link = page;
        self.close_mobile_menu();
        page
    }

    pub fn active_page(&self) -> Option<Page> {
        self.active_page
    }

    pub fn is_active(&self, page: Page) -> bool {
        self.active_page == Some(page)
    }

    pub fn is_link_highlighted(&self, page: Page) -> bool {
        self.highlighted_link == Some(page)
    }

    pub fn mobile_menu_open(&self) -> bool {
        self.mobile_menu_open
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    pub fn close_mobile_menu(&mut self) {
        self.mobile_menu_open = false;
    }

    pub fn open_checkin_modal(&mut self) {
        self.checkin_modal_open = true;
    }

    pub fn close_checkin_modal(&mut self) {
        self.checkin_modal_open = false;
        self.checkin_error = None;
    }

    pub fn open_crisis_modal(&mut self) {
        self.crisis_modal_open = true;
    }

    pub fn close_crisis_modal(&mut self) {
        self.crisis_modal_open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_page_activates_exactly_one() {
        let mut view = ViewState::new();
        assert_eq!(view.show_page("support"), Some(Page::Support));
        for page in Page::ALL {
            assert_eq!(view.is_active(page), page == Page::Support);
            assert_eq!(view.is_link_highlighted(page), page == Page::Support);
        }
    }

    #[test]
    fn test_show_unknown_page_leaves_nothing_active() {
        let mut view = ViewState::new();
        view.toggle_mobile_menu();
        assert_eq!(view.show_page("missing"), None);
        assert_eq!(view.active_page(), None);
        assert!(Page::ALL.iter().all(|p| !view.is_link_highlighted(*p)));
        assert!(!view.mobile_menu_open());
    }

    #[test]
    fn test_mobile_menu_toggle_and_close() {
        let mut view = ViewState::new();
        view.toggle_mobile_menu();
        assert!(view.mobile_menu_open());
        view.toggle_mobile_menu();
        assert!(!view.mobile_menu_open());
        view.toggle_mobile_menu();
        view.show_page("resources");
        assert!(!view.mobile_menu_open());
    }

    #[test]
    fn test_closing_modals_is_idempotent() {
        let mut view = ViewState::new();
        view.close_checkin_modal();
        assert!(!view.checkin_modal_open);
        view.open_checkin_modal();
        view.close_checkin_modal();
        view.close_checkin_modal();
        assert!(!view.checkin_modal_open);

        view.open_crisis_modal();
        view.close_crisis_modal();
        view.close_crisis_modal();
        assert!(!view.crisis_modal_open);
    }
}
