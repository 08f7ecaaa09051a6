//! Frozen dispatcher and the emission algorithm

use crate::config::DispatchConfig;
use crate::event::{AnyEvent, Payload};
use crate::identity::{TypeIdentity, identity_of};
use crate::listener::{ListenerRef, WildcardRef};
use crate::registry::ListenerRegistry;
use std::any::Any;
use std::fmt;
use std::sync::Arc;
use tracing::{trace, warn};

/// Read-only dispatcher produced by [`Builder::build`](crate::Builder::build).
///
/// Cloning is cheap and every clone shares the same frozen registry.
///
/// # Dispatch order
///
/// For each emission, wildcard listeners run first, then the listeners
/// registered for the event's type, each group in registration order.
/// With per-listener tasks enabled every invocation is spawned separately
/// and no order is guaranteed.
#[derive(Clone)]
pub struct Events {
    registry: Arc<ListenerRegistry>,
}

impl Events {
    pub(crate) fn from_registry(registry: ListenerRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }

    /// Emit a typed event
    ///
    /// # Examples
    ///
    /// ```rust
    /// use herald_events::Builder;
    ///
    /// struct UserCreated {
    ///     name: String,
    /// }
    ///
    /// let events = Builder::new()
    ///     .listen(|e: &UserCreated| println!("welcome, {}", e.name))
    ///     .build();
    ///
    /// events.emit(UserCreated { name: "alice".to_string() });
    /// ```
    pub fn emit<E: Any + Send + Sync>(&self, event: E) {
        self.dispatch(AnyEvent::new(event));
    }

    /// Emit a boxed event whose type is only known at runtime.
    ///
    /// Routes to the same listeners as `emit` would for the concrete type.
    /// Wildcard listeners see the type name as `"<dynamic>"`; see
    /// [`AnyEvent::type_name`].
    pub fn emit_any(&self, event: Box<dyn Any + Send + Sync>) {
        self.dispatch(AnyEvent::from_boxed(event));
    }

    /// Emit a shared event whose type is only known at runtime.
    pub fn emit_arc(&self, event: Payload) {
        self.dispatch(AnyEvent::from_payload(event));
    }

    /// Re-emit an event received elsewhere, e.g. by a wildcard listener.
    pub fn emit_event(&self, event: AnyEvent) {
        self.dispatch(event);
    }

    /// Number of typed listeners registered for `E`.
    pub fn listener_count<E: Any>(&self) -> usize {
        self.registry.listeners_for(&identity_of::<E>()).len()
    }

    /// Whether any typed listener is registered for `E`.
    pub fn has_listeners<E: Any>(&self) -> bool {
        self.listener_count::<E>() > 0
    }

    /// Number of wildcard listeners.
    pub fn wildcard_count(&self) -> usize {
        self.registry.wildcards().len()
    }

    /// Whether listeners run as independent tasks.
    pub fn is_concurrent(&self) -> bool {
        self.registry.config().per_listener_tasks
    }

    /// Dispatch policy this dispatcher was built with.
    pub fn config(&self) -> &DispatchConfig {
        self.registry.config()
    }

    fn dispatch(&self, event: AnyEvent) {
        let identity = event.identity();
        let logging = self.registry.config().enable_logging;
        let listeners = self.registry.listeners_for(&identity);

        if logging {
            trace!(
                event = %identity,
                typed = listeners.len(),
                wildcard = self.registry.wildcards().len(),
                "Dispatching event"
            );
        }

        for wildcard in self.registry.wildcards() {
            self.run_wildcard(wildcard, &event);
        }

        if listeners.is_empty() {
            if logging {
                trace!(event = %identity, "No typed listeners registered");
            }
            return;
        }

        for listener in listeners {
            self.run_listener(listener, &event);
        }
    }

    fn run_wildcard(&self, wildcard: &WildcardRef, event: &AnyEvent) {
        if !self.is_concurrent() {
            (**wildcard)(event);
            return;
        }

        let task_listener = Arc::clone(wildcard);
        let task_event = event.clone();
        let spawned = self
            .registry
            .spawner()
            .spawn(Box::new(move || (*task_listener)(&task_event)));

        if let Err(e) = spawned {
            self.spawn_failed(event.identity(), &e);
            (**wildcard)(event);
        }
    }

    fn run_listener(&self, listener: &ListenerRef, event: &AnyEvent) {
        if !self.is_concurrent() {
            listener.invoke(self, event);
            return;
        }

        let task_listener = Arc::clone(listener);
        let task_events = self.clone();
        let task_event = event.clone();
        let spawned = self
            .registry
            .spawner()
            .spawn(Box::new(move || task_listener.invoke(&task_events, &task_event)));

        if let Err(e) = spawned {
            self.spawn_failed(event.identity(), &e);
            listener.invoke(self, event);
        }
    }

    fn spawn_failed(&self, identity: TypeIdentity, error: &dyn std::error::Error) {
        warn!(event = %identity, "Listener task not spawned, running inline: {}", error);
    }
}

impl fmt::Debug for Events {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Events")
            .field("registry", &self.registry)
            .finish()
    }
}
