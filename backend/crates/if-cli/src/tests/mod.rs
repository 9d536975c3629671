
use if_auth::{
    MemoryStore, Navigator, Notification, Notifier, SessionManager, SessionOptions, UserDirectory,
};

use std::cell::RefCell;

#[derive(Default)]
pub(crate) struct RecordingNotifier {
    pub(crate) notifications: RefCell<Vec<Notification>>,
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.notifications.borrow_mut().push(notification);
    }
}

#[derive(Default)]
pub(crate) struct RecordingNavigator {
    pub(crate) redirects: RefCell<Vec<String>>,
}

impl Navigator for RecordingNavigator {
    fn redirect(&self, path: &str) {
        self.redirects.borrow_mut().push(path.to_string());
    }
}

pub(crate) fn signed_out_session() -> SessionManager<MemoryStore> {
    SessionManager::restore(
        UserDirectory::sample(),
        MemoryStore::new(),
        SessionOptions::immediate(),
    )
    .unwrap()
}
