//! reader-store: typed action dispatchers for an e-book reader's state
//!
//! Every change to the reader's state goes through an action dispatcher,
//! which commits a tagged [`ReaderMutation`] to a caller-supplied commit
//! channel. The channel is usually a [`Store`], but anything implementing
//! [`Commit`] works: a closure, an mpsc sender, a recorder in tests.
//!
//! # Example
//! ```
//! use reader_store::{actions, default_store, SettingPanel};
//!
//! let mut store = default_store();
//!
//! assert!(actions::set_progress(&mut store, 42));
//! assert!(actions::set_setting_visible(&mut store, SettingPanel::Theme));
//! assert!(!actions::set_progress(&mut store, 42));
//!
//! assert_eq!(store.state().progress, 42);
//! ```
//!
//! Dispatching by name, with an untyped payload:
//! ```
//! use reader_store::{default_store, dispatch_named, ReaderMutation};
//! use serde_json::json;
//!
//! let mut store = default_store();
//! let changed = dispatch_named::<ReaderMutation, _>(&mut store, "setOffsetY", json!(-30)).unwrap();
//!
//! assert!(changed);
//! assert_eq!(store.state().offset_y, -30);
//! ```

// Lets the derive macros name `reader_store::...` from inside this crate
extern crate self as reader_store;

pub mod actions;
pub mod mutation;
pub mod state;

// Re-export everything from core
pub use reader_store_core::*;

// Re-export derive macros
pub use reader_store_macros::Mutation;

pub use mutation::{default_store, reduce, ReaderMutation};
pub use state::{Book, Metadata, NavItem, ReaderState, SettingPanel};

/// Prelude for convenient imports
pub mod prelude {
    // Traits
    pub use reader_store_core::{Commit, Middleware, Mutation};

    // Store
    pub use reader_store_core::{
        commit_fn, dispatch_named, ComposedMiddleware, DispatchError, LoggingMiddleware,
        MutationLoggerConfig, MutationLoggerMiddleware, NoopMiddleware, Reducer, Store,
        StoreWithMiddleware,
    };

    // Derive macros
    pub use reader_store_macros::Mutation;

    // Reader domain
    pub use crate::actions;
    pub use crate::mutation::{default_store, reduce, ReaderMutation};
    pub use crate::state::{Book, Metadata, NavItem, ReaderState, SettingPanel};
}
