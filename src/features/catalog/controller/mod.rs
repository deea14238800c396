pub mod vn_controller;
