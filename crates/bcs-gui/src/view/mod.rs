//! View functions (pure: state in, widgets out).

mod home;

pub use home::view_home;
