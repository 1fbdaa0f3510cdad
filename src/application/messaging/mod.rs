//! Message handling - command registration and dispatch

pub mod conversation;
pub mod dispatcher;
pub mod parser;

pub use conversation::Conversation;
pub use dispatcher::Controller;
pub use parser::MessageParser;
