use std::rc::Rc;

use common::subject_observer::{Observer, ObserverId};

use crate::{
    color::TrafficColor,
    light::{ColorChanged, TrafficLight},
};

use super::{Announcer, ConsoleAnnouncer};

pub const START_SELLING: &str = "Vendor: start selling products";
pub const MOVE_ASIDE: &str = "Vendor: move aside and wait for red signal";
pub const DO_NOTHING: &str = "Vendor: do nothing";

/// Street vendor selling to stopped traffic.
pub struct VendorObserver {
    id: ObserverId,
    announcer: Rc<dyn Announcer>,
}

impl VendorObserver {
    pub fn new(id: ObserverId) -> Self {
        Self::with_announcer(id, Rc::new(ConsoleAnnouncer))
    }

    pub fn with_announcer(id: ObserverId, announcer: Rc<dyn Announcer>) -> Self {
        VendorObserver { id, announcer }
    }

    pub fn reaction(&self, color: &str) -> &'static str {
        match TrafficColor::classify(color) {
            Some(TrafficColor::Red) => START_SELLING,
            Some(TrafficColor::Green) => MOVE_ASIDE,
            _ => DO_NOTHING,
        }
    }
}

impl Observer<TrafficLight, ColorChanged> for VendorObserver {
    fn id(&self) -> ObserverId {
        self.id
    }

    fn update(&self, _: &TrafficLight, event: ColorChanged) {
        self.announcer.announce(self.reaction(&event.color));
    }
}
