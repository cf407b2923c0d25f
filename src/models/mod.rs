/// Decoded segment variants
pub mod chunk;
/// Accumulated decode output
pub mod decoded;
/// Mode indicators and size classes
pub mod mode;

pub use chunk::{CORRUPTED_ECI, Chunk};
pub use decoded::DecodedResult;
pub use mode::{Mode, SizeClass};
