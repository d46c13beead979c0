use crate::dashboard::update_dashboard;
use crate::host::Host;
use crate::view::{Page, ViewState};

/// Switch the visible page section and scroll back to the top.
///
/// Arriving at the dashboard recomputes its numbers, so activity recorded on
/// other pages shows up there.
pub fn show_page<H: Host>(host: &mut H, page_id: &str) -> Option<Page> {
    let page = host.update_view(|v| v.show_page(page_id));
    if page == Some(Page::Dashboard) {
        update_dashboard(host);
    }
    host.scroll_to_top();
    page
}

pub fn toggle_mobile_menu<H: Host>(host: &mut H) {
    host.update_view(ViewState::toggle_mobile_menu);
}

pub fn close_mobile_menu<H: Host>(host: &mut H) {
    host.update_view(ViewState::close_mobile_menu);
}
