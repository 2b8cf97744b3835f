pub mod attitude_window;
pub mod filters_window;
pub mod gui;
pub mod window;
