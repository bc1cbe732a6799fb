use crate::controller::DateWindowController;
use crate::source::{Clock, LocalClock};
use crate::storage::StepStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<StepStore>,
    pub controller: Arc<DateWindowController>,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    /// Wires the controller to `store`. Must run inside a tokio runtime.
    pub fn new(store: StepStore) -> Self {
        Self::with_clock(store, Arc::new(LocalClock))
    }

    pub fn with_clock(store: StepStore, clock: Arc<dyn Clock>) -> Self {
        let store = Arc::new(store);
        let controller = DateWindowController::new(store.clone(), store.clone(), clock.clone());
        Self {
            store,
            controller: Arc::new(controller),
            clock,
        }
    }
}
