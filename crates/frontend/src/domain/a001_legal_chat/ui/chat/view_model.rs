//! Legal Chat - View Model

use super::controller;
use super::model::HttpChatApi;
use super::state::ChatState;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct LegalChatVm {
    pub state: RwSignal<ChatState>,
}

impl LegalChatVm {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(ChatState::new()),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.state.with(|s| s.is_loading())
    }

    pub fn is_processing_file(&self) -> bool {
        self.state.with(|s| s.is_processing_file())
    }

    pub fn is_busy(&self) -> bool {
        self.state.with(|s| s.is_busy())
    }

    pub fn set_input(&self, value: String) {
        self.state.update(|s| s.input = value);
    }

    pub fn send(&self) {
        let state = self.state;
        wasm_bindgen_futures::spawn_local(async move {
            controller::send_message(&HttpChatApi, &state).await;
        });
    }

    pub fn upload(&self, file: web_sys::File) {
        let state = self.state;
        let file_name = file.name();
        wasm_bindgen_futures::spawn_local(async move {
            controller::upload_file(&HttpChatApi, &state, &file, file_name).await;
        });
    }

    pub fn clear_file(&self) {
        self.state.update(|s| s.clear_file());
    }

    pub fn cancel_query(&self) {
        self.state.update(|s| {
            s.cancel_query();
        });
    }

    pub fn cancel_upload(&self) {
        self.state.update(|s| {
            s.cancel_upload();
        });
    }
}

impl Default for LegalChatVm {
    fn default() -> Self {
        Self::new()
    }
}
