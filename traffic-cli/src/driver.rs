use std::rc::Rc;

use common::subject_observer::Subject;
use log::{debug, info};
use traffic::{
    observers::{Announcer, VehicleObserver, VendorObserver},
    TrafficLight, GREEN, RED,
};
use traffic_ext::gateways::{ColorTally, MetricsGateway};

use crate::config::app::AppConfig;

/// Plays the demonstration: both observers see red, then the vendor leaves
/// and only the vehicle sees green.
///
/// Returns the color tally when the metrics observer is enabled.
pub fn run(config: &AppConfig, announcer: Rc<dyn Announcer>) -> Option<ColorTally> {
    let mut light = TrafficLight::new();
    let vehicle = Rc::new(VehicleObserver::with_announcer(
        config.vehicle_id,
        announcer.clone(),
    ));
    let vendor = Rc::new(VendorObserver::with_announcer(config.vendor_id, announcer));
    let gateway = config
        .metrics_enabled
        .then(|| Rc::new(MetricsGateway::new(config.metrics_id)));

    light.register_observer(vehicle);
    light.register_observer(vendor.clone());
    if let Some(gateway) = &gateway {
        light.register_observer(gateway.clone());
    }
    debug!("Observers registered: {:?}", light.observer_ids());

    light.set_color(RED);

    light.unregister_observer(vendor);

    light.set_color(GREEN);

    gateway.map(|gateway| {
        let tally = gateway.tally();
        info!("Traffic light changed color {} times", tally.total());
        tally
    })
}
