//! Capacity entities
//!
//! Validated, immutable capacity records at the four array levels, plus the
//! snapshot aggregate and the observer-facing collection status.

mod capacity;
mod status;

pub use capacity::{
    CapacitySnapshot, CollectionLevel, GroupCapacity, LevelFailure, PoolCapacity, SystemCapacity,
    VolumeCapacity,
};
pub use status::CollectionStatus;
