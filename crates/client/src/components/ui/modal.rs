use dioxus::prelude::*;

/// Centered dialog over a dimmed backdrop. Clicking the backdrop or the
/// close button calls `on_close`.
#[component]
pub fn Modal(title: String, on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div {
            class: "fixed inset-0 bg-black/50 flex items-center justify-center z-40",
            onclick: move |_| on_close.call(()),
            div {
                class: "bg-white rounded-lg shadow-2xl w-full max-w-md mx-4",
                onclick: move |e| e.stop_propagation(),
                div { class: "px-6 py-4 border-b border-gray-200 flex items-center justify-between",
                    h3 { class: "text-lg font-bold text-gray-900", "{title}" }
                    button {
                        class: "text-gray-400 hover:text-gray-700 text-xl leading-none",
                        r#type: "button",
                        onclick: move |_| on_close.call(()),
                        "×"
                    }
                }
                div { class: "p-6", {children} }
            }
        }
    }
}
