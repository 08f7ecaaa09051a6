//! Type identities used to route events to listeners.
//!
//! Registration derives the key from the listener's declared event type,
//! emission derives it from the emitted value. Both go through `TypeId`,
//! so a key computed on one side always matches the other.

use std::any::{Any, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Name reported for identities derived from a runtime value.
const DYNAMIC_NAME: &str = "<dynamic>";

/// Routing key for an event payload type.
///
/// Equality and hashing only consider the underlying [`TypeId`]; the type
/// name is carried for diagnostics.
#[derive(Clone, Copy)]
pub struct TypeIdentity {
    id: TypeId,
    name: &'static str,
}

impl TypeIdentity {
    /// Identity of the static type `T`.
    #[inline]
    pub fn of<T: Any + ?Sized>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// Identity of a value whose static type is known.
    ///
    /// Same result as [`TypeIdentity::of`], but reads better at call sites
    /// holding a value.
    #[inline]
    pub fn of_val<T: Any>(_value: &T) -> Self {
        Self::of::<T>()
    }

    /// Identity of a type-erased value, resolved from its runtime type.
    #[inline]
    pub fn of_dyn(value: &dyn Any) -> Self {
        Self {
            id: value.type_id(),
            name: DYNAMIC_NAME,
        }
    }

    /// Underlying `TypeId`.
    #[inline]
    pub fn type_id(&self) -> TypeId {
        self.id
    }

    /// Type name, or `"<dynamic>"` if the identity came from an erased value.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Whether this identity is the identity of `T`.
    #[inline]
    pub fn is<T: Any + ?Sized>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }
}

impl PartialEq for TypeIdentity {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeIdentity {}

impl Hash for TypeIdentity {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for TypeIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TypeIdentity").field(&self.name).finish()
    }
}

impl fmt::Display for TypeIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Identity of the static type `T`.
#[inline]
pub fn identity_of<T: Any + ?Sized>() -> TypeIdentity {
    TypeIdentity::of::<T>()
}

/// Identity of a value from its runtime type.
///
/// For any `v: T`, `identity_of_value(&v) == identity_of::<T>()`.
#[inline]
pub fn identity_of_value(value: &dyn Any) -> TypeIdentity {
    TypeIdentity::of_dyn(value)
}
