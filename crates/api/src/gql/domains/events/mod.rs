pub mod resolvers;
pub mod service;
pub mod types;

pub use resolvers::{EventMutation, EventQuery};
pub use types::{Event, EventInput};
