pub mod config;
pub mod logging;

pub mod downloader;
pub mod film;
mod http;
pub mod metadata;
pub mod pipeline;
pub mod sanitize;
pub mod storage;
pub mod url_model;
