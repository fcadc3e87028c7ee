use std::cell::Cell;

use common::subject_observer::{Observer, ObserverId};
use dipstick::{Counter, Input, InputScope, Log};
use log::trace;
use traffic::{ColorChanged, TrafficColor, TrafficLight};

use super::{CHANGES, GREEN_COUNT, OTHER_COUNT, RED_COUNT, YELLOW_COUNT};

/// Running totals of the colors seen by a [`MetricsGateway`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ColorTally {
    pub red: u64,
    pub green: u64,
    pub yellow: u64,
    pub other: u64,
}

impl ColorTally {
    pub fn total(&self) -> u64 {
        self.red + self.green + self.yellow + self.other
    }
}

/// Observer counting color changes and reporting them as `dipstick` counters.
pub struct MetricsGateway {
    id: ObserverId,
    tally: Cell<ColorTally>,
    changes: Counter,
    red: Counter,
    green: Counter,
    yellow: Counter,
    other: Counter,
}

impl MetricsGateway {
    /// Reports to the `log` facade at trace level.
    pub fn new(id: ObserverId) -> Self {
        Self::with_scope(id, &Log::to_log().level(log::Level::Trace).metrics())
    }

    pub fn with_scope<S: InputScope>(id: ObserverId, scope: &S) -> Self {
        MetricsGateway {
            id,
            tally: Cell::new(ColorTally::default()),
            changes: scope.counter(CHANGES),
            red: scope.counter(RED_COUNT),
            green: scope.counter(GREEN_COUNT),
            yellow: scope.counter(YELLOW_COUNT),
            other: scope.counter(OTHER_COUNT),
        }
    }

    pub fn tally(&self) -> ColorTally {
        self.tally.get()
    }

    fn record(&self, color: &str) {
        let mut tally = self.tally.get();
        let counter = match TrafficColor::classify(color) {
            Some(TrafficColor::Red) => {
                tally.red += 1;
                &self.red
            }
            Some(TrafficColor::Green) => {
                tally.green += 1;
                &self.green
            }
            Some(TrafficColor::Yellow) => {
                tally.yellow += 1;
                &self.yellow
            }
            None => {
                tally.other += 1;
                &self.other
            }
        };
        self.tally.set(tally);

        trace!("Recording color change to {color:?}, tally is now {tally:?}");
        counter.count(1);
        self.changes.count(1);
    }
}

impl Observer<TrafficLight, ColorChanged> for MetricsGateway {
    fn id(&self) -> ObserverId {
        self.id
    }

    fn update(&self, _: &TrafficLight, event: ColorChanged) {
        self.record(&event.color);
    }
}
