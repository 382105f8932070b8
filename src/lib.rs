pub mod config;
pub mod content;
pub mod encoding;
pub mod gemini;
pub mod i18n;
pub mod lab;
pub mod server;
