//! Core traits and types for reader-store
//!
//! This crate provides the abstractions the reader's action dispatchers are
//! written against, following a Redux/Vuex-inspired split between intent
//! (actions) and state change (mutations).
//!
//! # Core Concepts
//!
//! - **Mutation**: A tagged state change; the tag is its mutation identifier
//! - **Commit**: The channel through which a mutation reaches the store
//! - **Store**: Explicit state container with a reducer
//! - **Middleware**: Hooks around every applied mutation (logging)
//!
//! # Basic Example
//!
//! ```ignore
//! use reader_store_core::prelude::*;
//!
//! #[derive(Mutation, Clone, Debug)]
//! enum PlayerMutation {
//!     SetVolume(u8),
//! }
//!
//! #[derive(Default)]
//! struct PlayerState {
//!     volume: u8,
//! }
//!
//! fn reducer(state: &mut PlayerState, mutation: PlayerMutation) -> bool {
//!     match mutation {
//!         PlayerMutation::SetVolume(v) => { state.volume = v; true }
//!     }
//! }
//!
//! fn set_volume<C: Commit<PlayerMutation>>(ctx: &mut C, volume: u8) -> C::Output {
//!     ctx.commit(PlayerMutation::SetVolume(volume))
//! }
//!
//! let mut store = Store::new(PlayerState::default(), reducer);
//! assert!(set_volume(&mut store, 7));
//! ```
//!
//! # Channel-backed commits
//!
//! When the store lives on another task, hand dispatchers the sending half
//! of an unbounded channel. The dispatcher returns the channel's
//! `Result<(), SendError<_>>` untouched:
//!
//! ```ignore
//! let (mut tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
//! set_volume(&mut tx, 7)?;
//!
//! while let Some(mutation) = rx.recv().await {
//!     store.dispatch(mutation);
//! }
//! ```

pub mod commit;
pub mod dispatch;
pub mod logger;
pub mod mutation;
pub mod store;
pub mod testing;

// Core trait exports
pub use commit::{commit_fn, Commit, FnCommit};
pub use mutation::{action_for_mutation, mutation_for_action, Binding, Mutation};

// Store exports
pub use store::{
    ComposedMiddleware, LoggingMiddleware, Middleware, NoopMiddleware, Reducer, Store,
    StoreWithMiddleware,
};

// Named dispatch exports
pub use dispatch::{decode_named, dispatch_named, DispatchError};

// Logger exports
pub use logger::{
    glob_match, MutationLog, MutationLogConfig, MutationLogEntry, MutationLoggerConfig,
    MutationLoggerMiddleware,
};

// Testing exports
pub use testing::{RecordingCommit, TestHarness};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::commit::{commit_fn, Commit};
    pub use crate::dispatch::{dispatch_named, DispatchError};
    pub use crate::logger::{MutationLoggerConfig, MutationLoggerMiddleware};
    pub use crate::mutation::{Binding, Mutation};
    pub use crate::store::{
        ComposedMiddleware, LoggingMiddleware, Middleware, NoopMiddleware, Reducer, Store,
        StoreWithMiddleware,
    };
}
