pub mod api;
pub mod logging;
pub mod print;
pub mod session;
