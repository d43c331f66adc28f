pub mod click_report;
pub mod frame_info;
