use dioxus::prelude::*;
use session::Page;

use crate::context::use_view;

/// A page section that is always mounted and only shown while active, so
/// tasks started from inside it survive navigation.
#[component]
pub fn PageSection(page: Page, children: Element) -> Element {
    let view = use_view();
    let active = view.read().is_active(page);

    rsx! {
        section {
            id: page.id(),
            class: if active { "page active" } else { "page" },
            {children}
        }
    }
}
