//! tunenotes-server: HTTP API for audio-to-notes transcription

pub mod error;
pub mod handlers;
pub mod routes;
pub mod server;
pub mod service;
pub mod state;
