pub mod vn_card;
pub mod vn_detail;
