pub use error::Error;
pub mod category;
pub mod command;
pub mod db;
pub mod error;
pub mod form;
pub mod log;
pub mod map;
pub mod rest;
pub mod service;
pub mod spot;

pub type Result<T, E = Error> = std::result::Result<T, E>;
