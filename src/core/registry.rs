use crate::core::activity::Activity;
use crate::core::connection_deletion::ConnectionDeletionActivity;
use crate::domain::model::WorkerRole;
use crate::domain::ports::ConnectionHelper;
use std::collections::HashMap;
use std::sync::Arc;

/// Name-keyed set of activities this worker process exposes to the engine
/// harness. Built once at startup and shared read-only afterwards.
#[derive(Default)]
pub struct ActivityRegistry {
    activities: HashMap<&'static str, Arc<dyn Activity>>,
}

impl ActivityRegistry {
    pub fn new() -> Self {
        Self {
            activities: HashMap::new(),
        }
    }

    pub fn register(&mut self, activity: Arc<dyn Activity>) {
        self.activities.insert(activity.name(), activity);
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Activity>> {
        self.activities.get(name).cloned()
    }

    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.activities.keys().copied().collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }
}

/// Wires the activity set for the given deployment role. Connection
/// management is a control-plane concern: on a data-plane worker the
/// deletion capability is absent entirely, not merely disabled.
pub fn build_registry<H>(role: WorkerRole, helper: Arc<H>) -> ActivityRegistry
where
    H: ConnectionHelper + 'static,
{
    let mut registry = ActivityRegistry::new();

    match role {
        WorkerRole::ControlPlane => {
            registry.register(Arc::new(ConnectionDeletionActivity::new(helper)));
        }
        WorkerRole::DataPlane => {}
    }

    tracing::info!(
        "Activity registry built for {} worker: {:?}",
        role,
        registry.names()
    );
    registry
}
