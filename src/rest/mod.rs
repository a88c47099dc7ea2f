pub mod categories;
pub mod error;
pub mod listing_requests;
pub mod map;
pub mod postal_codes;
pub mod spots;
