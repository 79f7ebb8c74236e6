use dioxus::prelude::*;

use crate::components::Skeleton;

/// Empty-state placeholder shown by [`ChatBox`](crate::components::ChatBox)
/// while there is nothing to display.
#[component]
pub fn ChatSkeleton() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "chat-skeleton",
            role: "status",
            aria_label: "Loading conversation",
            Skeleton { class: "chat-skeleton-avatar" }
            div { class: "chat-skeleton-lines",
                Skeleton { class: "chat-skeleton-line" }
                Skeleton { class: "chat-skeleton-line chat-skeleton-line-short" }
            }
        }
    }
}
