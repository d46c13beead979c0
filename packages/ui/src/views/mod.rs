mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod page_section;
pub use page_section::PageSection;

mod home;
pub use home::HomePage;

mod register;
pub use register::RegisterPage;

mod support;
pub use support::SupportPage;

mod resources;
pub use resources::ResourcesPage;

mod dashboard;
pub use dashboard::DashboardPage;

mod checkin_modal;
pub use checkin_modal::CheckinModal;

mod crisis_modal;
pub use crisis_modal::CrisisModal;
