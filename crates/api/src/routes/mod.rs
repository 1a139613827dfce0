pub mod fallback;
pub mod health;

use crate::clock::Clock;

/// Shared application state accessible from all handlers.
pub struct AppState<C: Clock> {
    pub clock: C,
}

impl<C: Clock> AppState<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }
}
