pub mod config;
pub mod error;
pub mod http;
pub mod logger;
pub mod repository;
pub mod response;
pub mod state;
