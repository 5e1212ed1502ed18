pub mod codec;
pub mod color;
pub mod compute;
pub mod config;
pub mod entities;
pub mod error;
pub mod sample;
pub mod validate;
