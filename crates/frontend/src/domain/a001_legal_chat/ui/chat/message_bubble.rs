use crate::shared::markdown::render_markdown;
use contracts::domain::a001_legal_chat::ChatMessage;
use leptos::prelude::*;

/// One history entry, content rendered as markdown
#[component]
pub fn MessageBubble(message: ChatMessage) -> impl IntoView {
    let class = format!("chatbot-message {}", message.role.as_str());
    let html = render_markdown(message.text());

    view! {
        <div class=class>
            <div class="chatbot-message__content" inner_html=html></div>
        </div>
    }
}

/// Three bouncing dots shown while a query is pending
#[component]
pub fn TypingIndicator() -> impl IntoView {
    view! {
        <div class="chatbot-message assistant">
            <div class="typing-indicator">
                <span></span>
                <span></span>
                <span></span>
            </div>
        </div>
    }
}
