pub mod extlink;
pub mod vn;
