pub mod color;
pub mod light;
pub mod observers;

pub use color::{TrafficColor, GREEN, RED, YELLOW};
pub use light::{ColorChanged, TrafficLight};
