//! Builder for [`Events`]

use crate::config::DispatchConfig;
use crate::dispatcher::Events;
use crate::event::AnyEvent;
use crate::identity::{TypeIdentity, identity_of};
use crate::listener::{EmitterListener, TypedListener};
use crate::registry::ListenerRegistry;
use crate::spawn::Spawner;
use std::any::Any;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Event dispatcher builder
///
/// Every method takes the builder by value and hands it back, so a chain of
/// registrations reads top to bottom in the order listeners will run.
/// [`build`](Builder::build) copies the registry: registering more listeners
/// on the same builder afterwards never changes an already built
/// [`Events`].
#[derive(Clone)]
pub struct Builder {
    registry: ListenerRegistry,
}

impl Builder {
    /// Create an empty builder with the default [`DispatchConfig`]
    pub fn new() -> Self {
        Self {
            registry: ListenerRegistry::new(),
        }
    }

    /// Replace the dispatch configuration
    pub fn with_config(mut self, config: DispatchConfig) -> Self {
        *self.registry.config_mut() = config;
        self
    }

    /// Run each listener invocation as its own task
    pub fn per_listener_tasks(mut self, enabled: bool) -> Self {
        self.registry.config_mut().per_listener_tasks = enabled;
        self
    }

    /// Alias of [`per_listener_tasks`](Builder::per_listener_tasks)
    pub fn with_goroutine_per_listener(self, enabled: bool) -> Self {
        self.per_listener_tasks(enabled)
    }

    /// Enable/disable dispatch logging
    pub fn enable_logging(mut self, enabled: bool) -> Self {
        self.registry.config_mut().enable_logging = enabled;
        self
    }

    /// Replace the spawner used for per-listener tasks
    pub fn with_spawner<S: Spawner + 'static>(mut self, spawner: S) -> Self {
        self.registry.set_spawner(Arc::new(spawner));
        self
    }

    /// Register a listener for events of type `E`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use herald_events::Builder;
    ///
    /// struct Tick(u32);
    ///
    /// let events = Builder::new()
    ///     .listen(|t: &Tick| println!("tick {}", t.0))
    ///     .build();
    /// assert_eq!(events.listener_count::<Tick>(), 1);
    /// ```
    pub fn listen<E, F>(mut self, callback: F) -> Self
    where
        E: Any + Send + Sync,
        F: Fn(&E) + Send + Sync + 'static,
    {
        let identity = identity_of::<E>();
        self.registry
            .push_listener(identity, Arc::new(TypedListener::new(callback)));
        self.log_registration("typed", &identity);
        self
    }

    /// Register a listener for `E` that also receives the dispatcher, so it
    /// can emit follow-up events
    pub fn listen_with_emitter<E, F>(mut self, callback: F) -> Self
    where
        E: Any + Send + Sync,
        F: Fn(&Events, &E) + Send + Sync + 'static,
    {
        let identity = identity_of::<E>();
        self.registry
            .push_listener(identity, Arc::new(EmitterListener::new(callback)));
        self.log_registration("emitter", &identity);
        self
    }

    /// Register a listener for every emitted event
    pub fn listen_to_all<F>(mut self, callback: F) -> Self
    where
        F: Fn(&AnyEvent) + Send + Sync + 'static,
    {
        self.registry.push_wildcard(Arc::new(callback));
        if self.registry.config().enable_logging {
            debug!("Registered wildcard listener");
        }
        self
    }

    /// Apply a reusable bundle of registrations
    ///
    /// ```rust
    /// use herald_events::Builder;
    ///
    /// struct Audit(&'static str);
    ///
    /// fn auditing(builder: Builder) -> Builder {
    ///     builder.listen(|a: &Audit| println!("audit: {}", a.0))
    /// }
    ///
    /// let events = Builder::new().wrap(auditing).build();
    /// assert!(events.has_listeners::<Audit>());
    /// ```
    pub fn wrap<W>(self, bundle: W) -> Self
    where
        W: FnOnce(Self) -> Self,
    {
        bundle(self)
    }

    /// Build the dispatcher from a snapshot of the current registrations
    pub fn build(&self) -> Events {
        let registry = self.registry.clone();
        if registry.config().enable_logging {
            debug!(
                event_types = registry.event_type_count(),
                listeners = registry.listener_count(),
                wildcards = registry.wildcards().len(),
                per_listener_tasks = registry.config().per_listener_tasks,
                "Built event dispatcher"
            );
        }
        Events::from_registry(registry)
    }

    fn log_registration(&self, kind: &str, identity: &TypeIdentity) {
        if self.registry.config().enable_logging {
            debug!(event = %identity, kind, "Registered listener");
        }
    }
}

impl Default for Builder {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Builder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Builder")
            .field("registry", &self.registry)
            .finish()
    }
}
