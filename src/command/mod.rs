pub mod render_map;
pub mod server;
pub mod set_persist_spots;
pub mod spots;
