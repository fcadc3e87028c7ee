mod announcer;
mod vehicle_observer;
mod vendor_observer;

pub use announcer::{Announcer, ConsoleAnnouncer, RecordingAnnouncer};
pub use vehicle_observer::VehicleObserver;
pub use vendor_observer::VendorObserver;
