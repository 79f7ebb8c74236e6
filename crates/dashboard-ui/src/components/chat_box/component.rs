use dioxus::prelude::*;

use crate::components::ChatSkeleton;

/// Classes on the outer chat container.
///
/// `chat-box` is defined in this component's stylesheet; the utility classes
/// are kept for hosts that ship a Tailwind build.
pub const CHAT_BOX_CLASS: &str =
    "chat-box min-h-28 w-full rounded-lg bg-white p-4 py-2 ring-1 ring-purple-700 ring-opacity-25";

/// Classes on the inner row that lays out the children.
pub const CHAT_ROW_CLASS: &str = "chat-box-row flex space-x-4 text-gray-700";

/// A single piece of content placed inside a [`ChatBox`].
#[derive(Debug, Clone, PartialEq)]
pub enum ChatNode {
    /// Plain text, rendered as a text node.
    Text(String),
    /// Arbitrary markup.
    Element(Element),
}

impl ChatNode {
    /// Markup for this node. Text is escaped by the renderer.
    pub fn render(&self) -> Element {
        match self {
            ChatNode::Text(text) => rsx! { "{text}" },
            ChatNode::Element(element) => element.clone(),
        }
    }
}

impl From<&str> for ChatNode {
    fn from(text: &str) -> Self {
        ChatNode::Text(text.to_string())
    }
}

impl From<String> for ChatNode {
    fn from(text: String) -> Self {
        ChatNode::Text(text)
    }
}

impl From<Element> for ChatNode {
    fn from(element: Element) -> Self {
        ChatNode::Element(element)
    }
}

/// Chat transcript container.
///
/// With no nodes this renders [`ChatSkeleton`] and nothing else; extra
/// attributes are ignored in that case. Otherwise the nodes are laid out in
/// order inside a ringed, rounded panel.
#[component]
pub fn ChatBox(
    nodes: Vec<ChatNode>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    if nodes.is_empty() {
        tracing::trace!("chat box empty, rendering skeleton");
        return rsx! { ChatSkeleton {} };
    }

    tracing::trace!(count = nodes.len(), "rendering chat box");
    let base = vec![Attribute::new("class", CHAT_BOX_CLASS, None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
            div { class: CHAT_ROW_CLASS,
                {nodes.iter().map(ChatNode::render)}
            }
        }
    }
}
