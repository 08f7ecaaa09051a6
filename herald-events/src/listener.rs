//! Listener definitions and type erasure

use crate::dispatcher::Events;
use crate::event::AnyEvent;
use std::any::Any;
use std::marker::PhantomData;
use std::sync::Arc;

/// Type-erased typed listener.
///
/// Only ever stored under the identity of the event type it was built for,
/// and only invoked by the dispatcher for events routed by that identity, so
/// the payload handed to `invoke` always has that type.
pub(crate) trait ErasedListener: Send + Sync {
    /// Invoke the listener with an emitted event.
    fn invoke(&self, events: &Events, event: &AnyEvent);
}

/// Shared handle to an erased typed listener.
pub(crate) type ListenerRef = Arc<dyn ErasedListener>;

/// Shared handle to a wildcard listener.
pub(crate) type WildcardRef = Arc<dyn Fn(&AnyEvent) + Send + Sync>;

/// Wrapper for `Fn(&E)` callbacks
pub(crate) struct TypedListener<E, F> {
    callback: F,
    _phantom: PhantomData<fn(&E)>,
}

impl<E, F> TypedListener<E, F>
where
    E: Any + Send + Sync,
    F: Fn(&E) + Send + Sync + 'static,
{
    /// Wrap `callback` for storage under `identity_of::<E>()`.
    pub(crate) fn new(callback: F) -> Self {
        Self {
            callback,
            _phantom: PhantomData,
        }
    }
}

impl<E, F> ErasedListener for TypedListener<E, F>
where
    E: Any + Send + Sync,
    F: Fn(&E) + Send + Sync + 'static,
{
    fn invoke(&self, _events: &Events, event: &AnyEvent) {
        if let Some(typed) = event.downcast_ref::<E>() {
            (self.callback)(typed);
        } else {
            debug_assert!(
                false,
                "listener for {} got {}",
                std::any::type_name::<E>(),
                event.type_name()
            );
        }
    }
}

/// Wrapper for `Fn(&Events, &E)` callbacks that need to emit further events
pub(crate) struct EmitterListener<E, F> {
    callback: F,
    _phantom: PhantomData<fn(&E)>,
}

impl<E, F> EmitterListener<E, F>
where
    E: Any + Send + Sync,
    F: Fn(&Events, &E) + Send + Sync + 'static,
{
    pub(crate) fn new(callback: F) -> Self {
        Self {
            callback,
            _phantom: PhantomData,
        }
    }
}

impl<E, F> ErasedListener for EmitterListener<E, F>
where
    E: Any + Send + Sync,
    F: Fn(&Events, &E) + Send + Sync + 'static,
{
    fn invoke(&self, events: &Events, event: &AnyEvent) {
        if let Some(typed) = event.downcast_ref::<E>() {
            (self.callback)(events, typed);
        } else {
            debug_assert!(
                false,
                "listener for {} got {}",
                std::any::type_name::<E>(),
                event.type_name()
            );
        }
    }
}
