//! tunenotes-core: ingestion and transcription pipeline for tunenotes

pub mod config;
pub mod downloader;
pub mod error;
pub mod pipeline;
pub mod staging;

pub use config::Config;
pub use error::{Result, TuneNotesError};
pub use pipeline::Pipeline;
