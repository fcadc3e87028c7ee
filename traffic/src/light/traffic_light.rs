use std::rc::Rc;

use common::subject_observer::{
    insert_unique, remove_by_id, Observer, ObserverId, SharedObservers, Subject,
};
use log::{debug, trace};

use super::ColorChanged;

/// Holds the current color and notifies registered observers whenever a
/// color is assigned, repeated assignments included.
#[derive(Default)]
pub struct TrafficLight {
    observers: SharedObservers<Self, ColorChanged>,
    color: String,
}

impl Subject<ColorChanged> for TrafficLight {
    fn register_observer(&mut self, observer: Rc<dyn Observer<Self, ColorChanged>>) {
        let id = observer.id();
        if insert_unique(&mut self.observers, observer) {
            debug!("Registered observer {id}");
        } else {
            debug!("Observer {id} is already registered, skipping");
        }
    }

    fn unregister_observer(&mut self, observer: Rc<dyn Observer<Self, ColorChanged>>) {
        self.unregister_observer_by_id(observer.id());
    }

    fn notify_observers(&self, event: ColorChanged) {
        for obs in &self.observers {
            trace!("Notifying observer {} of {:?}", obs.id(), event);
            obs.update(self, event.clone());
        }
    }
}

impl TrafficLight {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn set_color(&mut self, color: impl Into<String>) {
        self.color = color.into();
        debug!("Traffic light switched to {:?}", self.color);
        self.notify_observers(ColorChanged::new(self.color.clone()));
    }

    pub fn unregister_observer_by_id(&mut self, id: ObserverId) {
        if remove_by_id(&mut self.observers, id) == 0 {
            debug!("Observer {id} is not registered, nothing to remove");
        } else {
            debug!("Unregistered observer {id}");
        }
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    pub fn observer_ids(&self) -> Vec<ObserverId> {
        self.observers.iter().map(|obs| obs.id()).collect()
    }
}

impl Drop for TrafficLight {
    fn drop(&mut self) {
        self.observers.clear();
    }
}
