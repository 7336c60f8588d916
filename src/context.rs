//! List Context
//!
//! The list state and catalog client shared by the widget's components
//! via the Leptos Context API.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;
use leptos::task::spawn_local;
use tracing::debug;

use crate::catalog::DynCatalogApi;
use crate::loader;
use crate::state::{ListState, StateCell, ToggleOutcome};

/// Writes to a disposed signal (the widget was unmounted mid-load) are dropped
impl StateCell for RwSignal<ListState> {
    fn write_state<R>(&self, f: impl FnOnce(&mut ListState) -> R) -> Option<R> {
        self.try_update(f)
    }
}

/// Widget-wide handles provided via context
#[derive(Clone, Copy)]
pub struct ListContext {
    /// List state; every write re-renders its readers
    pub state: RwSignal<ListState>,
    api: StoredValue<Rc<DynCatalogApi>, LocalStorage>,
}

impl ListContext {
    pub fn new(state: RwSignal<ListState>, api: DynCatalogApi) -> Self {
        Self {
            state,
            api: StoredValue::new_local(Rc::new(api)),
        }
    }

    /// Fetch the selectable categories in the background
    pub fn load_categories(&self) {
        let api = self.api.get_value();
        let state = self.state;
        spawn_local(async move {
            loader::load_categories(&*api, &state).await;
        });
    }

    /// Fetch the next page in the background; ignored while one is loading
    pub fn load_more(&self) {
        let api = self.api.get_value();
        let state = self.state;
        spawn_local(async move {
            loader::load_next_page(&*api, &state).await;
        });
    }

    /// Toggle a category and report whether it ends up selected
    pub fn toggle_tag(&self, name: &str) -> bool {
        let (outcome, selected) = self
            .state
            .write_state(|s| {
                let outcome = s.toggle_tag(name);
                (outcome, s.selection().contains(name))
            })
            .unwrap_or((ToggleOutcome::Rejected, false));
        if outcome == ToggleOutcome::Rejected {
            debug!(tag = name, "selection full, toggle rejected");
        }
        selected
    }

    /// Drop loaded items and selection, then load the first page again
    pub fn start_over(&self) {
        if self.state.write_state(ListState::reset).unwrap_or(false) {
            self.load_more();
        }
    }
}
