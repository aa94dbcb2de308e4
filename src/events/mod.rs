//! Domain events and the queue that carries them from the rules engine to
//! the session owner.

pub mod event;
pub mod queue;

pub use event::GameEvent;
pub use queue::EventQueue;
