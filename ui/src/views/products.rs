use dioxus::prelude::*;

use crate::components::locale_gate::use_active_locale;

#[component]
pub fn Products() -> Element {
    let _lang_marker = use_active_locale();

    rsx! {
        section { class: "page page-products",
            h1 { {crate::t!("products-title")} }
            p { {crate::t!("products-intro")} }

            ul { class: "page-products__list",
                li { class: "page-products__item",
                    h2 { {crate::t!("product-soft-play-title")} }
                    p { {crate::t!("product-soft-play-body")} }
                }
                li { class: "page-products__item",
                    h2 { {crate::t!("product-trampoline-title")} }
                    p { {crate::t!("product-trampoline-body")} }
                }
                li { class: "page-products__item",
                    h2 { {crate::t!("product-ninja-title")} }
                    p { {crate::t!("product-ninja-body")} }
                }
            }
        }
    }
}
