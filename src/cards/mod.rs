//! Card system: identities, bounded text, definitions, and the catalog.
//!
//! ## Key Types
//!
//! - `CardType`: Card identity (weapons, healing, items, enemies)
//! - `CardImage`: Illustration, doubling as a tileset frame index
//! - `CardText`: One line of card text, capped at 16 characters
//! - `Card`: Immutable display/gameplay attributes
//! - `CardCatalog`: `CardType` → `Card` lookup

pub mod card_type;
pub mod catalog;
pub mod definition;
pub mod image;
pub mod text;

pub use card_type::{CardCategory, CardType};
pub use catalog::{CardCatalog, CatalogError};
pub use definition::{Card, TEXT_LINES};
pub use image::CardImage;
pub use text::{CardText, TextTooLong};
