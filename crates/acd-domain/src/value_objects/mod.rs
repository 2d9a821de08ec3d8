//! Value objects
//!
//! Raw, pre-derivation capacity records as returned by the metrics client
//! adapter. Entity constructors in [`crate::entities`] turn these into the
//! validated, derived-metric-carrying capacity entities.

mod raw;

pub use raw::{RawGroupRecord, RawPoolCounters, RawSystemCounters, RawVolumeRecord, VolumePage};
