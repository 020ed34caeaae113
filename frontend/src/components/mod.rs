pub mod insights_panel;
pub mod navbar;
pub mod payslip_view;
pub mod period_picker;
pub mod reports_page;
pub mod stat_card;
pub mod summary_view;
