use std::rc::{Rc, Weak};

use tracing::debug;

use crate::core::models::GameEvent;

/// Receives engine events synchronously, in registration order.
///
/// Observers only see the event kind. Any state they keep must live behind
/// interior mutability since the callback takes `&self`.
pub trait GameObserver {
    fn on_notify(&self, event: GameEvent);
}

/// Registered observers. Holds non-owning handles: dropping an observer
/// unregisters it implicitly.
#[derive(Default)]
pub struct ObserverList {
    handles: Vec<Weak<dyn GameObserver>>,
}

impl ObserverList {
    pub fn new() -> ObserverList {
        ObserverList::default()
    }

    /// Duplicates are kept and notified once per registration.
    pub fn add(&mut self, observer: &Rc<dyn GameObserver>) {
        self.prune();
        self.handles.push(Rc::downgrade(observer));
    }

    /// Removes the first registration of `observer`. Unknown observers are ignored.
    pub fn remove(&mut self, observer: &Rc<dyn GameObserver>) {
        let target = Rc::downgrade(observer);
        if let Some(index) = self.handles.iter().position(|h| h.ptr_eq(&target)) {
            self.handles.remove(index);
        }
        self.prune();
    }

    pub fn notify(&self, event: GameEvent) {
        for handle in &self.handles {
            match handle.upgrade() {
                Some(observer) => observer.on_notify(event),
                None => debug!(?event, "skipping dropped observer"),
            }
        }
    }

    /// Number of registrations whose observer is still alive.
    pub fn len(&self) -> usize {
        self.handles.iter().filter(|h| h.strong_count() > 0).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn prune(&mut self) {
        self.handles.retain(|h| h.strong_count() > 0);
    }
}

impl std::fmt::Debug for ObserverList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObserverList")
            .field("registered", &self.len())
            .finish()
    }
}

impl<F: Fn(GameEvent)> GameObserver for F {
    fn on_notify(&self, event: GameEvent) {
        self(event)
    }
}
