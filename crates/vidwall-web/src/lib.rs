//! Browser bindings for the vidwall board
//!
//! Wires the pure engine from `vidwall-board` to the page:
//! - [`BoardController`]: wasm-bindgen API returning JSON snapshots
//! - [`LocalStorage`]: snapshot persistence in `localStorage`
//! - [`YouTubeBackend`]: players attached through the YouTube IFrame API
//! - console logging for the `log` facade, plus the panic hook

mod console;
mod controller;
mod player;
mod storage;

pub use controller::BoardController;
pub use player::{player_element_id, YouTubeBackend, YouTubePlayer};
pub use storage::LocalStorage;
