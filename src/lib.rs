mod board;
mod color;
mod common;
mod config;
mod game;
#[cfg(feature = "gui")]
pub mod gui;
pub mod layout;
mod logging;
pub mod player;
pub mod prelude;
mod session;
mod tile;

pub use board::*;
pub use color::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use logging::{init_logging, parse_level};
pub use player::*;
pub use session::*;
pub use tile::*;
