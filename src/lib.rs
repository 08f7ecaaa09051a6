// Herald - type-safe, in-process event dispatch
//
// Listeners are registered on a builder, frozen into a dispatcher, and
// invoked synchronously or as independent tasks when events are emitted.

// Re-export core functionality
pub use herald_events::*;

// Re-export optional crates
#[cfg(feature = "testing")]
pub use herald_testing;

// Prelude for common imports
pub mod prelude {
    pub use crate::{AnyEvent, Builder, DispatchConfig, Events, Spawner, TypeIdentity};
    pub use crate::{identity_of, identity_of_value};
}
