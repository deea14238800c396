pub mod app;

pub mod core;
pub mod features;
pub mod middleware;
pub mod routes;
pub mod utility;
