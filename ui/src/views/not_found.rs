use dioxus::prelude::*;

/// Not-found boundary shown for unmatched paths and unsupported locale prefixes.
#[component]
pub fn NotFound() -> Element {
    rsx! {
        section { class: "page page-not-found",
            h1 { {crate::t!("not-found-title")} }
            p { {crate::t!("not-found-body")} }
        }
    }
}
