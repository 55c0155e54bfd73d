pub mod entity;
pub mod timer;
