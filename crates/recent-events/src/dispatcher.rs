//! Event dispatcher
//!
//! Handlers are called in subscription order, outside the registry lock,
//! so a handler may subscribe or unsubscribe while it runs.

use parking_lot::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::event::{Event, EventKind, Notification};
use crate::handler::NotificationHandler;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

struct Subscription {
    id: SubscriptionId,
    kind: EventKind,
    once: bool,
    handler: Arc<dyn NotificationHandler>,
}

pub struct EventDispatcher {
    subscriptions: Arc<RwLock<Vec<Subscription>>>,
    next_id: Arc<AtomicU64>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self {
            subscriptions: Arc::new(RwLock::new(Vec::new())),
            next_id: Arc::new(AtomicU64::new(1)),
        }
    }

    /// Register a handler for every event of `kind`
    pub fn subscribe<H>(&self, kind: EventKind, handler: H) -> SubscriptionId
    where
        H: NotificationHandler + 'static,
    {
        self.register(kind, false, Arc::new(handler))
    }

    /// Register a handler that is dropped after its first delivery
    pub fn once<H>(&self, kind: EventKind, handler: H) -> SubscriptionId
    where
        H: NotificationHandler + 'static,
    {
        self.register(kind, true, Arc::new(handler))
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscriptions = self.subscriptions.write();
        let before = subscriptions.len();
        subscriptions.retain(|s| s.id != id);
        before != subscriptions.len()
    }

    pub fn subscriber_count(&self, kind: EventKind) -> usize {
        self.subscriptions
            .read()
            .iter()
            .filter(|s| s.kind == kind)
            .count()
    }

    /// Deliver `event` to its subscribers, returning how many were notified
    pub fn dispatch(&self, event: Event) -> usize {
        let kind = event.kind();

        // Collect under the lock, call without it
        let handlers: Vec<Arc<dyn NotificationHandler>> = {
            let mut subscriptions = self.subscriptions.write();
            let handlers = subscriptions
                .iter()
                .filter(|s| s.kind == kind)
                .map(|s| Arc::clone(&s.handler))
                .collect();
            subscriptions.retain(|s| !(s.once && s.kind == kind));
            handlers
        };

        if handlers.is_empty() {
            tracing::debug!(event = kind.name(), "No subscribers for event");
            return 0;
        }

        let notification = Notification::new(event);
        for handler in &handlers {
            handler.notify(&notification);
        }

        tracing::debug!(event = kind.name(), delivered = handlers.len(), "Dispatched event");

        handlers.len()
    }

    fn register(
        &self,
        kind: EventKind,
        once: bool,
        handler: Arc<dyn NotificationHandler>,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.subscriptions.write().push(Subscription {
            id,
            kind,
            once,
            handler,
        });
        id
    }
}

impl Default for EventDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for EventDispatcher {
    fn clone(&self) -> Self {
        Self {
            subscriptions: Arc::clone(&self.subscriptions),
            next_id: Arc::clone(&self.next_id),
        }
    }
}
