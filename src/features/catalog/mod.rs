pub mod controller;
pub mod dto;
pub mod model;
pub mod repository;
pub mod routes;
pub mod service;
pub mod utility;
