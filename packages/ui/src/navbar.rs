use dioxus::prelude::*;
use session::pipeline::{crisis, navigation};
use session::Page;

use crate::context::{use_host, use_view};

#[component]
pub fn Navbar() -> Element {
    let mut host = use_host();
    let view = use_view();
    let menu_open = view.read().mobile_menu_open();

    rsx! {
        nav {
            class: "navbar",
            div {
                class: "nav-container",
                button {
                    class: "nav-logo",
                    onclick: move |_| { navigation::show_page(&mut host, Page::Home.id()); },
                    "MindConnect"
                }
                ul {
                    id: "navMenu",
                    class: if menu_open { "nav-menu active" } else { "nav-menu" },
                    for page in Page::ALL {
                        li {
                            key: "{page.id()}",
                            a {
                                class: if view.read().is_link_highlighted(page) {
                                    "nav-link active"
                                } else {
                                    "nav-link"
                                },
                                href: "#",
                                onclick: move |evt: Event<MouseData>| {
                                    evt.prevent_default();
                                    navigation::show_page(&mut host, page.id());
                                },
                                "{page.title()}"
                            }
                        }
                    }
                    li {
                        button {
                            class: "btn btn-danger nav-crisis",
                            onclick: move |_| crisis::open_modal(&mut host),
                            "Crisis Help"
                        }
                    }
                }
                button {
                    class: "nav-toggle",
                    title: "Menu",
                    onclick: move |_| navigation::toggle_mobile_menu(&mut host),
                    "\u{2630}"
                }
            }
        }
    }
}
