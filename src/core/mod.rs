pub mod clock;
pub mod controller;
pub mod duration;
pub mod entries;
pub mod log;
pub mod timer;

pub use controller::Controller;
