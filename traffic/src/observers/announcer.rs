use std::{cell::RefCell, rc::Rc};

use log::debug;

/// Output sink for observer reactions.
pub trait Announcer {
    fn announce(&self, message: &str);
}

/// Prints each message on its own line on stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleAnnouncer;

impl Announcer for ConsoleAnnouncer {
    fn announce(&self, message: &str) {
        debug!("Announcing {message:?}");
        println!("{message}");
    }
}

/// Keeps every message in announcement order. Clones share the same record.
#[derive(Debug, Default, Clone)]
pub struct RecordingAnnouncer {
    messages: Rc<RefCell<Vec<String>>>,
}

impl RecordingAnnouncer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }

    pub fn clear(&self) {
        self.messages.borrow_mut().clear();
    }
}

impl Announcer for RecordingAnnouncer {
    fn announce(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_owned());
    }
}
