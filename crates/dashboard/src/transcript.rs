use dashboard_ui::components::ChatNode;
use dioxus::prelude::*;

/// Canned exchange used by the "Load sample" control.
pub fn sample_transcript() -> Vec<ChatNode> {
    vec![
        rsx! { strong { "you" } }.into(),
        "What does embedbase store?".into(),
        rsx! { strong { "assistant" } }.into(),
        "Documents, their embeddings and the dataset they belong to.".into(),
    ]
}

/// Next message for the "Add message" control, numbered from 1.
pub fn numbered_message(existing: usize) -> ChatNode {
    ChatNode::Text(format!("Message #{}", existing + 1))
}
