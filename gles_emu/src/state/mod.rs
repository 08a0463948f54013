/// State module - context-scoped GL state

pub mod active_objects;
pub mod error_state;

pub use active_objects::ActiveObjectsState;
pub use error_state::ErrorState;

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;
