pub mod a001_legal_chat;
