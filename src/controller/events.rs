use crate::catalog::TagFilter;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Input the controller reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    Search(String),
    ClearSearch,
    SelectTag(TagFilter),
    OpenDetail(String),
    OpenSkins(String),
    CloseView,
}

type Handler<E> = Rc<RefCell<dyn FnMut(&E)>>;

struct Registry<E> {
    next_id: u64,
    handlers: Vec<(u64, Handler<E>)>,
}

/// Single-threaded event fan-out. Every registration hands back a disposer.
pub struct EventHub<E> {
    registry: Rc<RefCell<Registry<E>>>,
}

impl<E: 'static> EventHub<E> {
    pub fn new() -> Self {
        EventHub {
            registry: Rc::new(RefCell::new(Registry {
                next_id: 0,
                handlers: Vec::new(),
            })),
        }
    }

    pub fn subscribe<F>(&self, handler: F) -> Subscription
    where
        F: FnMut(&E) + 'static,
    {
        let handler: Handler<E> = Rc::new(RefCell::new(handler));
        let id = {
            let mut registry = self.registry.borrow_mut();
            registry.next_id += 1;
            let id = registry.next_id;
            registry.handlers.push((id, handler));
            id
        };

        let weak: Weak<RefCell<Registry<E>>> = Rc::downgrade(&self.registry);
        Subscription::new(move || {
            if let Some(registry) = weak.upgrade() {
                registry.borrow_mut().handlers.retain(|(hid, _)| *hid != id);
            }
        })
    }

    /// Delivers `event` to every handler registered at call time. Returns how many ran.
    pub fn emit(&self, event: &E) -> usize {
        // snapshot so handlers may (un)subscribe while running
        let handlers: Vec<Handler<E>> = self
            .registry
            .borrow()
            .handlers
            .iter()
            .map(|(_, h)| h.clone())
            .collect();
        for handler in &handlers {
            (handler.borrow_mut())(event);
        }
        handlers.len()
    }

    pub fn len(&self) -> usize {
        self.registry.borrow().handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<E: 'static> Default for EventHub<E> {
    fn default() -> Self {
        EventHub::new()
    }
}

/// Removes its handler when disposed or dropped.
#[must_use = "dropping a Subscription unregisters its handler"]
pub struct Subscription {
    disposer: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(disposer: impl FnOnce() + 'static) -> Self {
        Subscription {
            disposer: Some(Box::new(disposer)),
        }
    }

    pub fn dispose(mut self) {
        self.run();
    }

    fn run(&mut self) {
        if let Some(disposer) = self.disposer.take() {
            disposer();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.run();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handlers_receive_events_until_disposed() {
        let hub: EventHub<UiEvent> = EventHub::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let sink = seen.clone();
        let subscription = hub.subscribe(move |event: &UiEvent| sink.borrow_mut().push(event.clone()));

        assert_eq!(hub.emit(&UiEvent::ClearSearch), 1);
        subscription.dispose();
        assert_eq!(hub.emit(&UiEvent::CloseView), 0);

        assert_eq!(*seen.borrow(), vec![UiEvent::ClearSearch]);
        assert!(hub.is_empty());
    }

    #[test]
    fn dropping_subscription_unregisters() {
        let hub: EventHub<UiEvent> = EventHub::new();
        {
            let _subscription = hub.subscribe(|_| {});
            assert_eq!(hub.len(), 1);
        }
        assert_eq!(hub.len(), 0);
    }

    #[test]
    fn disposer_outliving_hub_is_harmless() {
        let hub: EventHub<UiEvent> = EventHub::new();
        let subscription = hub.subscribe(|_| {});
        drop(hub);
        subscription.dispose();
    }

    #[test]
    fn handler_may_subscribe_during_emit() {
        let hub = Rc::new(EventHub::<UiEvent>::new());
        let extra = Rc::new(RefCell::new(Vec::new()));

        let inner_hub = hub.clone();
        let keep = extra.clone();
        let _outer = hub.subscribe(move |_| {
            keep.borrow_mut().push(inner_hub.subscribe(|_| {}));
        });

        assert_eq!(hub.emit(&UiEvent::ClearSearch), 1);
        assert_eq!(hub.len(), 2);
    }
}
