pub mod extlink_repository;
pub mod vn_repository;
