//! Domain entities - Core business objects

pub mod message;
pub mod command;

pub use message::{Message, RoomType};
pub use command::{Command, CommandHandler};
