//! Shared contracts between the chat frontend and the legal-assistant service.

pub mod domain;
