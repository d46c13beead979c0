use dioxus::prelude::*;

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

/// Same page as the web build; the config file under the user's config
/// directory is picked up by `ui::load_config` on mount.
#[component]
fn App() -> Element {
    rsx! {
        ui::Shell {}
    }
}
