pub mod normalize;

pub use normalize::{NormalizedEntry, OvernightPolicy, normalize_entry};
