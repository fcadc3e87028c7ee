use std::str::FromStr;

use strum::{AsRefStr, Display, EnumIter, EnumString};

pub const RED: &str = "red";
pub const GREEN: &str = "green";
pub const YELLOW: &str = "yellow";

/// The colors a traffic light is expected to show.
///
/// Lights themselves store plain strings, so this is only used to classify
/// what observers receive.
#[derive(Copy, Clone, Debug, PartialEq, Eq, AsRefStr, Display, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum TrafficColor {
    Red,
    Green,
    Yellow,
}

impl TrafficColor {
    /// Returns `None` for anything outside the known colors.
    pub fn classify(color: &str) -> Option<Self> {
        TrafficColor::from_str(color).ok()
    }
}
