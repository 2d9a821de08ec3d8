//! Infrastructure ports

mod events;

pub use events::{CollectionEventStream, EventBusProvider, SharedEventBus};
