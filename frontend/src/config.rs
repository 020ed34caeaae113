use shared::MAX_SELECTED_PERIODS;

/// Backend used when `PAYSLIP_API_BASE_URL` is not set at build time
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Delay between writing the print document and opening the print dialog,
/// so the new window can finish layout first
pub const PRINT_DELAY_MS: u32 = 500;

/// Build-time configuration of the reports frontend
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub print_delay_ms: u32,
    pub max_selected_periods: usize,
}

impl AppConfig {
    /// Reads `PAYSLIP_API_BASE_URL` from the build environment (trunk passes
    /// it through to `rustc`), falling back to the local backend.
    pub fn from_env() -> Self {
        Self::with_base_url(option_env!("PAYSLIP_API_BASE_URL"))
    }

    fn with_base_url(base_url: Option<&str>) -> Self {
        let api_base_url = base_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_string();

        Self {
            api_base_url,
            print_delay_ms: PRINT_DELAY_MS,
            max_selected_periods: MAX_SELECTED_PERIODS,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
