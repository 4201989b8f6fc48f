use crate::domain::a001_legal_chat::ui::chat::LegalChat;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <LegalChat />
    }
}
