mod metrics_gateway;

pub use metrics_gateway::{ColorTally, MetricsGateway};

use const_format::concatcp;
use traffic::{GREEN, RED, YELLOW};

const PREFIX: &str = "traffic_light";

pub const CHANGES: &str = concatcp!(PREFIX, ".changes");
pub const RED_COUNT: &str = concatcp!(PREFIX, ".", RED);
pub const GREEN_COUNT: &str = concatcp!(PREFIX, ".", GREEN);
pub const YELLOW_COUNT: &str = concatcp!(PREFIX, ".", YELLOW);
pub const OTHER_COUNT: &str = concatcp!(PREFIX, ".other");
