
use crate::store::StoreResult;
use crate::{KeyValueStore, Navigator, Notification, Notifier, StoreError};

use std::cell::RefCell;
use std::path::PathBuf;

/// Notifier that keeps everything it was asked to show.
#[derive(Default)]
pub(crate) struct RecordingNotifier {
    pub(crate) notifications: RefCell<Vec<Notification>>,
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.notifications.borrow_mut().push(notification);
    }
}

/// Navigator that keeps every redirect target.
#[derive(Default)]
pub(crate) struct RecordingNavigator {
    pub(crate) redirects: RefCell<Vec<String>>,
}

impl Navigator for RecordingNavigator {
    fn redirect(&self, path: &str) {
        self.redirects.borrow_mut().push(path.to_string());
    }
}

/// Store whose reads succeed from a fixed value and whose mutations fail.
#[derive(Default)]
pub(crate) struct ReadOnlyStore {
    pub(crate) value: Option<String>,
}

impl KeyValueStore for ReadOnlyStore {
    fn read(&self, _key: &str) -> StoreResult<Option<String>> {
        Ok(self.value.clone())
    }

    fn write(&mut self, _key: &str, _value: &str) -> StoreResult<()> {
        Err(StoreError::file_write(
            PathBuf::from("/readonly"),
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
        ))
    }

    fn remove(&mut self, _key: &str) -> StoreResult<()> {
        Err(StoreError::file_remove(
            PathBuf::from("/readonly"),
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
        ))
    }
}
