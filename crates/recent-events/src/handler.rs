//! Notification handler seam

use crate::event::Notification;

pub trait NotificationHandler: Send + Sync {
    fn notify(&self, notification: &Notification);
}

impl<F> NotificationHandler for F
where
    F: Fn(&Notification) + Send + Sync,
{
    fn notify(&self, notification: &Notification) {
        self(notification)
    }
}
