//! Legal Chat - View Component

use super::file_preview::FilePreviewCard;
use super::message_bubble::{MessageBubble, TypingIndicator};
use super::state::is_submit_key;
use super::view_model::LegalChatVm;
use crate::shared::config::config;
use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn LegalChat() -> impl IntoView {
    let vm = LegalChatVm::new();
    let messages_container_ref = NodeRef::<leptos::html::Div>::new();
    let busy = Signal::derive(move || vm.is_busy());

    // Keep the newest message in view
    Effect::new(move |_| {
        let count = vm.state.with(|s| s.messages.len());
        let loading = vm.is_loading();
        if let Some(container) = messages_container_ref.get() {
            request_animation_frame(move || {
                container.set_scroll_top(container.scroll_height());
            });
        }
        (count, loading)
    });

    let handle_send = Callback::new(move |_: ()| vm.send());

    view! {
        <div class="chatbot-container">
            <h1 class="chatbot-title">{config().ui.title.clone()}</h1>

            // Error display
            {move || {
                vm.state
                    .with(|s| s.error().map(str::to_string))
                    .map(|e| view! { <div class="error-message">{e}</div> })
            }}

            // Messages area
            <div node_ref=messages_container_ref class="chatbot-messages">
                <For
                    each=move || vm.state.with(|s| s.messages.clone())
                    key=|msg| msg.id
                    let:msg
                >
                    <MessageBubble message=msg />
                </For>

                <Show when=move || vm.is_loading()>
                    <TypingIndicator />
                </Show>
            </div>

            // Input area
            <div class="chatbot-input-container">
                <input
                    type="text"
                    class="chatbot-input"
                    placeholder="Type a message..."
                    prop:value=move || vm.state.with(|s| s.input.clone())
                    disabled=move || busy.get()
                    on:input=move |ev| vm.set_input(event_target_value(&ev))
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        if is_submit_key(&ev.key(), ev.shift_key()) {
                            ev.prevent_default();
                            handle_send.run(());
                        }
                    }
                />
                <Button
                    appearance=ButtonAppearance::Primary
                    class="chatbot-send-button"
                    disabled=busy
                    on_click=move |_| handle_send.run(())
                >
                    {icon("send")}
                    {move || if vm.is_loading() { " Sending..." } else { " Send" }}
                </Button>
                <Show when=move || vm.is_loading()>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| vm.cancel_query()
                    >
                        {icon("stop")}
                        " Stop"
                    </Button>
                </Show>
            </div>

            // Attachment
            <div class="file-upload-container">
                <label class="file-upload-label">
                    {move || {
                        if vm.is_processing_file() {
                            view! { <Spinner /> " Processing..." }.into_any()
                        } else {
                            view! { {icon("attach")} " Upload PDF/Image" }.into_any()
                        }
                    }}
                    <input
                        type="file"
                        accept=".pdf,image/*"
                        class="file-upload-input"
                        disabled=move || busy.get()
                        on:change=move |ev| {
                            use wasm_bindgen::JsCast;
                            let Some(input) = ev
                                .target()
                                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
                            else {
                                return;
                            };
                            if let Some(file) = input.files().and_then(|files| files.get(0)) {
                                vm.upload(file);
                            }
                            // Allow picking the same file again
                            input.set_value("");
                        }
                    />
                </label>

                <Show when=move || vm.is_processing_file()>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| vm.cancel_upload()
                    >
                        " Cancel"
                    </Button>
                </Show>

                {move || {
                    vm.state
                        .with(|s| s.preview.clone())
                        .map(|preview| {
                            view! {
                                <FilePreviewCard
                                    preview=preview
                                    on_clear=Callback::new(move |_| vm.clear_file())
                                />
                            }
                        })
                }}
            </div>
        </div>
    }
}
