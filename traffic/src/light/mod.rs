mod traffic_light;

pub use traffic_light::TrafficLight;

/// Event sent to every observer when a light is assigned a color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorChanged {
    pub color: String,
}

impl ColorChanged {
    pub fn new(color: impl Into<String>) -> Self {
        ColorChanged {
            color: color.into(),
        }
    }
}
