//! Untyped view of an emitted event

use crate::identity::{TypeIdentity, identity_of_value};
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Shared, type-erased event payload.
pub type Payload = Arc<dyn Any + Send + Sync>;

/// An emitted event without static type information.
///
/// Wildcard listeners receive this. Cloning is cheap: the payload is shared
/// across every listener invoked for the same emission.
#[derive(Clone)]
pub struct AnyEvent {
    identity: TypeIdentity,
    payload: Payload,
}

impl AnyEvent {
    /// Wrap a typed event.
    pub fn new<E: Any + Send + Sync>(event: E) -> Self {
        Self {
            identity: TypeIdentity::of::<E>(),
            payload: Arc::new(event),
        }
    }

    /// Wrap an already shared payload, resolving its identity at runtime.
    pub fn from_payload(payload: Payload) -> Self {
        Self {
            identity: identity_of_value(&*payload),
            payload,
        }
    }

    /// Wrap a boxed payload, resolving its identity at runtime.
    pub fn from_boxed(payload: Box<dyn Any + Send + Sync>) -> Self {
        Self::from_payload(Arc::from(payload))
    }

    /// Routing key of the payload.
    #[inline]
    pub fn identity(&self) -> TypeIdentity {
        self.identity
    }

    /// Type name of the payload.
    ///
    /// Events emitted through [`Events::emit_any`](crate::Events::emit_any)
    /// or [`Events::emit_arc`](crate::Events::emit_arc) only carry their
    /// runtime `TypeId`, so this reads `"<dynamic>"` for them. Compare
    /// [`identity`](AnyEvent::identity) or use [`is`](AnyEvent::is) to tell
    /// such events apart.
    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.identity.name()
    }

    /// Whether the payload is a `T`.
    #[inline]
    pub fn is<T: Any>(&self) -> bool {
        self.payload.is::<T>()
    }

    /// Borrow the payload as a `T`.
    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.payload.downcast_ref::<T>()
    }

    /// Shared handle to the payload.
    #[inline]
    pub fn payload(&self) -> &Payload {
        &self.payload
    }
}

impl fmt::Debug for AnyEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnyEvent")
            .field("type", &self.identity.name())
            .finish_non_exhaustive()
    }
}
