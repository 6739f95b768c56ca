pub mod error;
pub mod home;

pub use error::error_page;
pub use home::{home_page, results_fragment, HomeVm};
