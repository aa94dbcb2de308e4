//! Session state: the deck, the inventory, and the heart counter.

pub mod builder;
pub mod state;

pub use builder::build_scene;
pub use state::{Inventory, Scene};
