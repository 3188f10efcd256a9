//! Clean Recent Events
//!
//! Native-side events the webview reacts to. Instead of a global listener
//! with a blocking alert, reactions are injected as [`NotificationHandler`]s
//! and registered on an [`EventDispatcher`].

mod dispatcher;
mod event;
mod handler;

pub use dispatcher::{EventDispatcher, SubscriptionId};
pub use event::{Event, EventKind, Notification, Theme};
pub use handler::NotificationHandler;
