pub mod config;
pub mod domain;
pub mod driver;
pub mod notify;
pub mod storage;
pub mod utils;
