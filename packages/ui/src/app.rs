use dioxus::prelude::*;
use session::Page;

use crate::alerts::AlertStack;
use crate::context::AppProvider;
use crate::navbar::Navbar;
use crate::views::{
    CheckinModal, CrisisModal, DashboardPage, HomePage, PageSection, RegisterPage, ResourcesPage,
    SupportPage,
};

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

/// The whole single-page application. Every page section stays mounted;
/// the view state decides which one is visible.
#[component]
pub fn Shell() -> Element {
    rsx! {
        document::Stylesheet { href: MAIN_CSS }

        AppProvider {
            Navbar {}
            main {
                class: "main-content",
                PageSection { page: Page::Home, HomePage {} }
                PageSection { page: Page::Register, RegisterPage {} }
                PageSection { page: Page::Support, SupportPage {} }
                PageSection { page: Page::Resources, ResourcesPage {} }
                PageSection { page: Page::Dashboard, DashboardPage {} }
            }
            footer {
                class: "footer",
                "MindConnect supports SDG 3: Good Health and Well-being. "
                "This site does not replace professional care."
            }
            CheckinModal {}
            CrisisModal {}
            AlertStack {}
        }
    }
}
