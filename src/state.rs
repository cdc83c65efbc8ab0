//! Shared application state for all routes. Built once in `main` and cloned into each router.

use crate::store::Store;

#[derive(Clone)]
pub struct AppState {
    pub store: Store,
}

impl AppState {
    pub fn new(store: Store) -> Self {
        Self { store }
    }
}
