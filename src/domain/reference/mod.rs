//! Reference data for the reporting period.
//!
//! Task categories and the monthly registration series are read-only inputs
//! to analytics; they are not edited through the member API.

mod monthly_registration;
mod task_category;

pub use monthly_registration::MonthlyRegistration;
pub use task_category::TaskCategory;
