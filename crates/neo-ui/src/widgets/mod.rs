pub mod button;
pub mod frame;
pub mod progress;
