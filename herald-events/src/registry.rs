//! Listener registry

use crate::config::DispatchConfig;
use crate::identity::TypeIdentity;
use crate::listener::{ListenerRef, WildcardRef};
use crate::spawn::{DefaultSpawner, Spawner};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Listeners keyed by event type, plus wildcard listeners and the dispatch
/// policy.
///
/// Only [`Builder`](crate::Builder) mutates a registry. A built
/// [`Events`](crate::Events) owns its own copy and never changes it.
#[derive(Clone)]
pub(crate) struct ListenerRegistry {
    listeners: HashMap<TypeIdentity, Vec<ListenerRef>>,
    wildcards: Vec<WildcardRef>,
    config: DispatchConfig,
    spawner: Arc<dyn Spawner>,
}

impl ListenerRegistry {
    pub(crate) fn new() -> Self {
        Self {
            listeners: HashMap::new(),
            wildcards: Vec::new(),
            config: DispatchConfig::default(),
            spawner: Arc::new(DefaultSpawner),
        }
    }

    pub(crate) fn push_listener(&mut self, identity: TypeIdentity, listener: ListenerRef) {
        self.listeners.entry(identity).or_default().push(listener);
    }

    pub(crate) fn push_wildcard(&mut self, listener: WildcardRef) {
        self.wildcards.push(listener);
    }

    pub(crate) fn config_mut(&mut self) -> &mut DispatchConfig {
        &mut self.config
    }

    pub(crate) fn set_spawner(&mut self, spawner: Arc<dyn Spawner>) {
        self.spawner = spawner;
    }

    /// Typed listeners for `identity`, in registration order.
    pub(crate) fn listeners_for(&self, identity: &TypeIdentity) -> &[ListenerRef] {
        self.listeners
            .get(identity)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Wildcard listeners, in registration order.
    pub(crate) fn wildcards(&self) -> &[WildcardRef] {
        &self.wildcards
    }

    /// Dispatch policy.
    pub(crate) fn config(&self) -> &DispatchConfig {
        &self.config
    }

    pub(crate) fn spawner(&self) -> &dyn Spawner {
        self.spawner.as_ref()
    }

    /// Number of event types with at least one typed listener.
    pub(crate) fn event_type_count(&self) -> usize {
        self.listeners.len()
    }

    /// Total number of typed listeners across all event types.
    pub(crate) fn listener_count(&self) -> usize {
        self.listeners.values().map(Vec::len).sum()
    }
}

impl fmt::Debug for ListenerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerRegistry")
            .field("event_types", &self.listeners.keys().collect::<Vec<_>>())
            .field("listeners", &self.listener_count())
            .field("wildcards", &self.wildcards.len())
            .field("config", &self.config)
            .finish()
    }
}
