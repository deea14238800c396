pub mod home_service;
pub mod vn_detail_service;
