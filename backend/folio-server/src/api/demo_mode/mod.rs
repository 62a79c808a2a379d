#[allow(clippy::module_inception)]
pub mod demo_mode;
pub mod demo_mode_response;
pub mod toggle_demo_mode_request;
pub mod toggle_demo_mode_response;
