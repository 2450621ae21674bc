pub mod address;
pub mod score_store;
pub mod tier;

pub use crate::address::require_address;
pub use crate::tier::{can_perform, Tier, FULL_THRESHOLD, LIMITED_THRESHOLD, MAX_SCORE};
