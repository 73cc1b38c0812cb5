//! HTTP request handlers

mod health;
mod upload;
mod youtube;

pub use health::health;
pub use upload::process_file;
pub use youtube::process_youtube;
