//! Synchronous, single-threaded event dispatch keyed by [`EventKind`].
//!
//! Two kinds of listeners exist:
//! - system handlers are plain `fn(&mut C, &GameEvent)` pointers that get
//!   mutable access to the owning context and may emit further events;
//! - observers are host closures that only see the event.
//!
//! All listeners for a kind run in registration order before [`emit`]
//! returns. The listener list is captured when dispatch starts, so a
//! listener registered during dispatch does not receive the in-flight event.

use super::types::{EventKind, GameEvent};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

pub type SystemHandler<C> = fn(&mut C, &GameEvent);

pub type Observer = Rc<RefCell<dyn FnMut(&GameEvent)>>;

pub enum Handler<C> {
    System(SystemHandler<C>),
    Observer(Observer),
}

impl<C> Clone for Handler<C> {
    fn clone(&self) -> Self {
        match self {
            Handler::System(f) => Handler::System(*f),
            Handler::Observer(o) => Handler::Observer(Rc::clone(o)),
        }
    }
}

pub struct EventBus<C> {
    handlers: HashMap<EventKind, Vec<Handler<C>>>,
}

impl<C> Default for EventBus<C> {
    fn default() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }
}

impl<C> EventBus<C> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, kind: EventKind, handler: SystemHandler<C>) {
        self.handlers
            .entry(kind)
            .or_default()
            .push(Handler::System(handler));
    }

    pub fn observe(&mut self, kind: EventKind, observer: impl FnMut(&GameEvent) + 'static) {
        let observer: Observer = Rc::new(RefCell::new(observer));
        self.handlers
            .entry(kind)
            .or_default()
            .push(Handler::Observer(observer));
    }

    pub fn listener_count(&self, kind: EventKind) -> usize {
        self.handlers.get(&kind).map_or(0, Vec::len)
    }

    fn listeners(&self, kind: EventKind) -> Vec<Handler<C>> {
        self.handlers.get(&kind).cloned().unwrap_or_default()
    }
}

/// State that owns an [`EventBus`] over itself.
pub trait EventContext: Sized {
    fn event_bus(&self) -> &EventBus<Self>;

    fn event_bus_mut(&mut self) -> &mut EventBus<Self>;

    /// Called once per event before any listener runs.
    fn record(&mut self, _event: &GameEvent) {}
}

/// Dispatches `event` to every listener of its kind, in registration order.
pub fn emit<C: EventContext>(ctx: &mut C, event: GameEvent) {
    ctx.record(&event);
    for handler in ctx.event_bus().listeners(event.kind()) {
        match handler {
            Handler::System(f) => f(ctx, &event),
            Handler::Observer(observer) => match observer.try_borrow_mut() {
                Ok(mut callback) => (&mut *callback)(&event),
                Err(_) => log::warn!("Observer for {:?} is already running", event.kind()),
            },
        }
    }
}
