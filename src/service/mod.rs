pub mod filesystem;
pub mod listing;
pub mod map_image;
pub mod postal;
pub mod session;
pub mod spot_source;
