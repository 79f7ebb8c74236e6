use dashboard_ui::components::{ChatBox, ChatNode};
use dioxus::prelude::*;

mod transcript;
use transcript::{numbered_message, sample_transcript};

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::initialize_default();
    tracing::info!(platform = client_platform(), "starting dashboard");
    dioxus::launch(App);
}

/// Detect the client platform from compile-time feature flags.
pub fn client_platform() -> &'static str {
    if cfg!(feature = "web") {
        "web"
    } else if cfg!(feature = "desktop") {
        "desktop"
    } else {
        "unknown"
    }
}

#[component]
fn App() -> Element {
    let mut nodes = use_signal(Vec::<ChatNode>::new);

    rsx! {
        document::Stylesheet { href: MAIN_CSS }
        main { class: "dashboard",
            h1 { class: "dashboard-title", "Chat" }
            ChatBox { id: "transcript", nodes: nodes() }
            div { class: "dashboard-actions",
                button {
                    onclick: move |_| {
                        let sample = sample_transcript();
                        tracing::info!(count = sample.len(), "loading sample transcript");
                        nodes.set(sample);
                    },
                    "Load sample"
                }
                button {
                    onclick: move |_| {
                        let next = numbered_message(nodes.read().len());
                        nodes.write().push(next);
                        tracing::debug!(count = nodes.read().len(), "message added");
                    },
                    "Add message"
                }
                button {
                    disabled: nodes.read().is_empty(),
                    onclick: move |_| {
                        tracing::info!(cleared = nodes.read().len(), "clearing transcript");
                        nodes.write().clear();
                    },
                    "Clear"
                }
            }
        }
    }
}
