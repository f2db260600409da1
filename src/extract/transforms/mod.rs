//! Content cleaning and turn normalization.

mod cleanup;
mod normalize;

pub use cleanup::ContentCleaner;
pub use normalize::TurnNormalizer;
pub(crate) use normalize::text_len;
