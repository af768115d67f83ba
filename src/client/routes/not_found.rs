use dioxus::prelude::*;

use crate::client::router::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx!(div {
        class: "flex flex-col items-center justify-center gap-3 py-24",
        h1 { class: "text-4xl font-bold", "404" }
        p { class: "opacity-70", "Nothing lives at /{path}" }
        Link { class: "btn btn-outline", to: Route::Login {}, "Go back" }
    })
}
