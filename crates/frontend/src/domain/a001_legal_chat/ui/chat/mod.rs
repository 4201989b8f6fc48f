//! Legal Chat UI Module (MVVM Standard)
//!
//! Structure:
//! - model.rs: API client and `ApiError`
//! - state.rs: ChatState with per-request phases and tokens
//! - controller.rs: async upload/send flows over `ChatApi` + `ChatStore`
//! - view_model.rs: LegalChatVm wrapping the state signal
//! - view.rs: Main component LegalChat
//! - message_bubble.rs, file_preview.rs: pieces of the view

pub mod controller;
mod file_preview;
mod message_bubble;
pub mod model;
pub mod state;
mod view;
mod view_model;

pub use view::LegalChat;
pub use view_model::LegalChatVm;
