use std::rc::Rc;

use common::subject_observer::{Observer, ObserverId};

use crate::{
    color::TrafficColor,
    light::{ColorChanged, TrafficLight},
};

use super::{Announcer, ConsoleAnnouncer};

pub const STOP: &str = "Traveller: stop vehicle";
pub const START: &str = "Traveller: start vehicle";
pub const SLOW_DOWN: &str = "Traveller: slow down vehicle";

/// Stops on red, starts on green and slows down on anything else.
pub struct VehicleObserver {
    id: ObserverId,
    announcer: Rc<dyn Announcer>,
}

impl VehicleObserver {
    pub fn new(id: ObserverId) -> Self {
        Self::with_announcer(id, Rc::new(ConsoleAnnouncer))
    }

    pub fn with_announcer(id: ObserverId, announcer: Rc<dyn Announcer>) -> Self {
        VehicleObserver { id, announcer }
    }

    pub fn reaction(&self, color: &str) -> &'static str {
        match TrafficColor::classify(color) {
            Some(TrafficColor::Red) => STOP,
            Some(TrafficColor::Green) => START,
            _ => SLOW_DOWN,
        }
    }
}

impl Observer<TrafficLight, ColorChanged> for VehicleObserver {
    fn id(&self) -> ObserverId {
        self.id
    }

    fn update(&self, _: &TrafficLight, event: ColorChanged) {
        self.announcer.announce(self.reaction(&event.color));
    }
}
