pub mod use_available_periods;
pub mod use_insights;
pub mod use_period_selection;
pub mod use_report_data;
