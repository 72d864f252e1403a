//! History-backed navigation.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use stat_forms::Navigator;
use tracing::{debug, warn};

use crate::error::Result;
use crate::route::{Route, RouteTable};

/// A navigation stack, like the browser's history.
///
/// Implements [`Navigator`] so a submission workflow can redirect through it.
#[derive(Debug)]
pub struct HistoryNavigator {
    table: RouteTable,
    stack: Mutex<Vec<Route>>,
}

impl HistoryNavigator {
    /// Creates a history starting at `start`.
    pub fn new(start: Route) -> Self {
        Self {
            table: RouteTable::new(),
            stack: Mutex::new(vec![start]),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Route>> {
        self.stack.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns the current route.
    pub fn current(&self) -> Route {
        self.lock()
            .last()
            .cloned()
            .unwrap_or(Route::Board)
    }

    /// Pushes a route.
    pub fn push(&self, route: Route) {
        debug!(path = %route, "navigate");
        self.lock().push(route);
    }

    /// Pushes the route for a concrete path.
    ///
    /// # Errors
    ///
    /// Returns the resolution error if the path matches no route.
    pub fn push_path(&self, path: &str) -> Result<()> {
        let route = self.table.resolve(path)?;
        self.push(route);
        Ok(())
    }

    /// Goes back one entry and returns the new current route.
    ///
    /// The first entry is never popped.
    pub fn back(&self) -> Option<Route> {
        let mut stack = self.lock();
        if stack.len() < 2 {
            return None;
        }
        stack.pop();
        stack.last().cloned()
    }

    /// Returns every visited route, oldest first.
    pub fn entries(&self) -> Vec<Route> {
        self.lock().clone()
    }
}

impl Navigator for HistoryNavigator {
    fn go_to(&self, route: &str) {
        let resolved = self
            .table
            .url_for(route, &HashMap::new())
            .and_then(|path| self.table.resolve(&path));
        match resolved {
            Ok(route) => self.push(route),
            Err(e) => warn!(route, error = %e, "navigation failed"),
        }
    }
}
