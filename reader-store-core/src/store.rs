//! Centralized state store with reducer pattern

use crate::{Commit, Mutation};
use std::marker::PhantomData;

/// A reducer function that applies a mutation to state
///
/// Returns `true` if the state changed.
pub type Reducer<S, M> = fn(&mut S, M) -> bool;

/// Centralized state store with Redux-like reducer pattern
///
/// The store owns the application state and is the single point where
/// mutations are applied. It is an explicit value: callers pass it (or a
/// channel to it) into every dispatcher instead of reaching for a global.
///
/// # Type Parameters
/// * `S` - The application state type
/// * `M` - The mutation type (must implement `Mutation`)
///
/// # Example
/// ```ignore
/// let mut store = Store::new(ReaderState::default(), reduce);
/// actions::set_progress(&mut store, 42);
/// assert_eq!(store.state().progress, 42);
/// ```
pub struct Store<S, M: Mutation> {
    state: S,
    reducer: Reducer<S, M>,
    _marker: PhantomData<M>,
}

impl<S: std::fmt::Debug, M: Mutation> std::fmt::Debug for Store<S, M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store").field("state", &self.state).finish()
    }
}

impl<S, M: Mutation> Store<S, M> {
    /// Create a new store with initial state and reducer
    pub fn new(state: S, reducer: Reducer<S, M>) -> Self {
        Self {
            state,
            reducer,
            _marker: PhantomData,
        }
    }

    /// Apply a mutation to the store
    ///
    /// Returns `true` if the state changed.
    pub fn dispatch(&mut self, mutation: M) -> bool {
        (self.reducer)(&mut self.state, mutation)
    }

    /// Get a reference to the current state
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Get a mutable reference to the state
    ///
    /// Use this sparingly - prefer committing mutations for state changes.
    pub fn state_mut(&mut self) -> &mut S {
        &mut self.state
    }

    /// Consume the store and return its state
    pub fn into_state(self) -> S {
        self.state
    }
}

impl<S, M: Mutation> Commit<M> for Store<S, M> {
    type Output = bool;

    fn commit(&mut self, mutation: M) -> bool {
        self.dispatch(mutation)
    }
}

/// Store with middleware support
///
/// Wraps a `Store` and lets middleware observe mutations
/// before and after they are applied by the reducer.
pub struct StoreWithMiddleware<S, M: Mutation, W: Middleware<M>> {
    store: Store<S, M>,
    middleware: W,
}

impl<S, M: Mutation, W: Middleware<M>> StoreWithMiddleware<S, M, W> {
    /// Create a new store with middleware
    pub fn new(state: S, reducer: Reducer<S, M>, middleware: W) -> Self {
        Self {
            store: Store::new(state, reducer),
            middleware,
        }
    }

    /// Apply a mutation through middleware and store
    pub fn dispatch(&mut self, mutation: M) -> bool {
        self.middleware.before(&mutation);
        let changed = self.store.dispatch(mutation.clone());
        self.middleware.after(&mutation, changed);
        changed
    }

    /// Get a reference to the current state
    pub fn state(&self) -> &S {
        self.store.state()
    }

    /// Get a mutable reference to the state
    pub fn state_mut(&mut self) -> &mut S {
        self.store.state_mut()
    }

    /// Get a reference to the middleware
    pub fn middleware(&self) -> &W {
        &self.middleware
    }

    /// Get a mutable reference to the middleware
    pub fn middleware_mut(&mut self) -> &mut W {
        &mut self.middleware
    }
}

impl<S, M: Mutation, W: Middleware<M>> Commit<M> for StoreWithMiddleware<S, M, W> {
    type Output = bool;

    fn commit(&mut self, mutation: M) -> bool {
        self.dispatch(mutation)
    }
}

/// Middleware trait for observing mutations
///
/// Implement this trait to add logging or other cross-cutting
/// concerns to your store.
pub trait Middleware<M: Mutation> {
    /// Called before the mutation is applied by the reducer
    fn before(&mut self, mutation: &M);

    /// Called after the mutation is applied by the reducer
    fn after(&mut self, mutation: &M, state_changed: bool);
}

/// A no-op middleware that does nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopMiddleware;

impl<M: Mutation> Middleware<M> for NoopMiddleware {
    fn before(&mut self, _mutation: &M) {}
    fn after(&mut self, _mutation: &M, _state_changed: bool) {}
}

/// Middleware that logs every mutation through `tracing`
#[derive(Debug, Clone, Default)]
pub struct LoggingMiddleware {
    /// Whether to log before the reducer runs
    pub log_before: bool,
    /// Whether to log after the reducer runs
    pub log_after: bool,
}

impl LoggingMiddleware {
    /// Create a new logging middleware with default settings (log after only)
    pub fn new() -> Self {
        Self {
            log_before: false,
            log_after: true,
        }
    }

    /// Create a logging middleware that logs both before and after
    pub fn verbose() -> Self {
        Self {
            log_before: true,
            log_after: true,
        }
    }
}

impl<M: Mutation> Middleware<M> for LoggingMiddleware {
    fn before(&mut self, mutation: &M) {
        if self.log_before {
            tracing::debug!(
                mutation = %mutation.id(),
                action = %mutation.action_name(),
                "Committing mutation"
            );
        }
    }

    fn after(&mut self, mutation: &M, state_changed: bool) {
        if self.log_after {
            tracing::debug!(
                mutation = %mutation.id(),
                state_changed = state_changed,
                "Mutation applied"
            );
        }
    }
}

/// Compose multiple middleware into a single middleware
pub struct ComposedMiddleware<M: Mutation> {
    middlewares: Vec<Box<dyn Middleware<M>>>,
}

impl<M: Mutation> std::fmt::Debug for ComposedMiddleware<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComposedMiddleware")
            .field("middlewares_count", &self.middlewares.len())
            .finish()
    }
}

impl<M: Mutation> Default for ComposedMiddleware<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: Mutation> ComposedMiddleware<M> {
    /// Create a new composed middleware
    pub fn new() -> Self {
        Self {
            middlewares: Vec::new(),
        }
    }

    /// Add a middleware to the composition
    pub fn add<W: Middleware<M> + 'static>(&mut self, middleware: W) {
        self.middlewares.push(Box::new(middleware));
    }

    /// Builder form of [`ComposedMiddleware::add`]
    pub fn with<W: Middleware<M> + 'static>(mut self, middleware: W) -> Self {
        self.add(middleware);
        self
    }
}

impl<M: Mutation> Middleware<M> for ComposedMiddleware<M> {
    fn before(&mut self, mutation: &M) {
        for middleware in &mut self.middlewares {
            middleware.before(mutation);
        }
    }

    fn after(&mut self, mutation: &M, state_changed: bool) {
        // Reverse order so the first middleware wraps the rest
        for middleware in self.middlewares.iter_mut().rev() {
            middleware.after(mutation, state_changed);
        }
    }
}
