use dioxus::prelude::*;

const BOARD_CSS: Asset = asset!("/assets/board.css");

/// Top navigation bar. Platform crates pass their own router links as children.
#[component]
pub fn Navbar(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: BOARD_CSS }

        nav { id: "navbar",
            span { class: "brand", "ShiftMatch" }
            div { class: "nav-links", {children} }
        }
    }
}
