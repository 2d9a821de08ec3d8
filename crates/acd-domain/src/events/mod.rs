//! Collection lifecycle events

mod collection_events;

pub use collection_events::CollectionEvent;
