//! Input seen by the game core: per-frame action snapshots and the touch
//! model.

pub mod action;
pub mod touch;

pub use action::{Action, InputSnapshot};
pub use touch::{TouchModel, TouchObject, TouchObjectKind};
