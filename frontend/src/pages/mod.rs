pub mod admin_dashboard;
pub mod admin_signup;
pub mod home;

pub use admin_dashboard::*;
pub use admin_signup::*;
pub use home::*;
