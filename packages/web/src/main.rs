use dioxus::prelude::*;

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "MindConnect - Mental Health Support" }
        ui::Shell {}
    }
}
