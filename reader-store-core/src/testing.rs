//! Test utilities for code written against the commit channel
//!
//! - [`RecordingCommit`]: a commit channel that records every mutation and
//!   answers with a configurable response
//! - [`TestHarness`]: state plus an mpsc-backed channel, for code that hands
//!   mutations to another task
//! - Assertion macros for verifying committed mutations
//!
//! # Example
//!
//! ```ignore
//! use reader_store::testing::RecordingCommit;
//!
//! let mut ctx = RecordingCommit::new();
//! actions::set_progress(&mut ctx, 42);
//!
//! assert_eq!(ctx.ids(), vec!["SET_PROGRESS"]);
//! assert_committed!(ctx.committed(), ReaderMutation::SetProgress(42));
//! ```

use tokio::sync::mpsc;

use crate::{Commit, Mutation};

/// Commit channel that records every mutation it receives.
///
/// By default it answers `()`. Use [`RecordingCommit::with_response`] to
/// return something else, computed from the mutation.
pub struct RecordingCommit<M, R = ()> {
    committed: Vec<M>,
    respond: Box<dyn FnMut(&M) -> R>,
}

impl<M: Mutation> RecordingCommit<M> {
    /// Create a recorder that answers `()`.
    pub fn new() -> Self {
        Self {
            committed: Vec::new(),
            respond: Box::new(|_: &M| ()),
        }
    }
}

impl<M: Mutation> Default for RecordingCommit<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: Mutation, R> RecordingCommit<M, R> {
    /// Create a recorder whose `commit` returns `respond(&mutation)`.
    pub fn with_response<F>(respond: F) -> Self
    where
        F: FnMut(&M) -> R + 'static,
    {
        Self {
            committed: Vec::new(),
            respond: Box::new(respond),
        }
    }

    /// Mutations committed so far, oldest first.
    pub fn committed(&self) -> &[M] {
        &self.committed
    }

    /// Identifiers of the mutations committed so far.
    pub fn ids(&self) -> Vec<&'static str> {
        self.committed.iter().map(Mutation::id).collect()
    }

    /// Take all recorded mutations, leaving the recorder empty.
    pub fn drain(&mut self) -> Vec<M> {
        std::mem::take(&mut self.committed)
    }

    /// Number of commits recorded.
    pub fn len(&self) -> usize {
        self.committed.len()
    }

    /// Whether nothing was committed.
    pub fn is_empty(&self) -> bool {
        self.committed.is_empty()
    }

    /// Return the single recorded mutation.
    ///
    /// # Panics
    ///
    /// Panics unless exactly one mutation was committed.
    pub fn single(&self) -> &M {
        match self.committed.as_slice() {
            [only] => only,
            other => panic!(
                "Expected exactly one committed mutation, got {}: {:?}",
                other.len(),
                other
            ),
        }
    }
}

impl<M: Mutation, R> Commit<M> for RecordingCommit<M, R> {
    type Output = R;

    fn commit(&mut self, mutation: M) -> R {
        let out = (self.respond)(&mutation);
        self.committed.push(mutation);
        out
    }
}

impl<M: Mutation, R> std::fmt::Debug for RecordingCommit<M, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordingCommit")
            .field("committed", &self.committed)
            .finish_non_exhaustive()
    }
}

/// Generic test harness with state and a channel-backed commit.
///
/// # Example
///
/// ```ignore
/// let mut harness = TestHarness::<ReaderState, ReaderMutation>::new(ReaderState::default());
///
/// let mut ctx = harness.channel();
/// actions::set_section(&mut ctx, 3).unwrap();
///
/// let committed = harness.drain_committed();
/// assert_eq!(committed, vec![ReaderMutation::SetSection(3)]);
/// ```
pub struct TestHarness<S, M: Mutation> {
    /// The application state under test
    pub state: S,
    tx: mpsc::UnboundedSender<M>,
    rx: mpsc::UnboundedReceiver<M>,
}

impl<S, M: Mutation> TestHarness<S, M> {
    /// Create a new test harness with the given initial state.
    pub fn new(state: S) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self { state, tx, rx }
    }

    /// A commit channel feeding this harness.
    pub fn channel(&self) -> mpsc::UnboundedSender<M> {
        self.tx.clone()
    }

    /// Drain all mutations committed through [`TestHarness::channel`].
    pub fn drain_committed(&mut self) -> Vec<M> {
        let mut mutations = Vec::new();
        while let Ok(mutation) = self.rx.try_recv() {
            mutations.push(mutation);
        }
        mutations
    }

    /// Drain pending mutations and apply them to `state` with `reducer`.
    ///
    /// Returns how many of them changed state.
    pub fn apply_committed(&mut self, reducer: crate::Reducer<S, M>) -> usize {
        self.drain_committed()
            .into_iter()
            .filter(|m| reducer(&mut self.state, m.clone()))
            .count()
    }
}

impl<S: Default, M: Mutation> Default for TestHarness<S, M> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

/// Assert that a mutation matching a pattern was committed.
///
/// # Example
///
/// ```ignore
/// assert_committed!(ctx.committed(), ReaderMutation::SetProgress(42));
/// assert_committed!(ctx.committed(), ReaderMutation::SetCover(None));
/// ```
#[macro_export]
macro_rules! assert_committed {
    ($mutations:expr, $pattern:pat $(if $guard:expr)?) => {
        assert!(
            $mutations.iter().any(|m| matches!(m, $pattern $(if $guard)?)),
            "Expected mutation matching `{}` to be committed, but got: {:?}",
            stringify!($pattern),
            $mutations
        );
    };
}

/// Assert that no mutation matching a pattern was committed.
#[macro_export]
macro_rules! assert_not_committed {
    ($mutations:expr, $pattern:pat $(if $guard:expr)?) => {
        assert!(
            !$mutations.iter().any(|m| matches!(m, $pattern $(if $guard)?)),
            "Expected mutation matching `{}` NOT to be committed, but it was: {:?}",
            stringify!($pattern),
            $mutations
        );
    };
}

/// Count how many committed mutations match a pattern.
#[macro_export]
macro_rules! count_committed {
    ($mutations:expr, $pattern:pat $(if $guard:expr)?) => {
        $mutations
            .iter()
            .filter(|m| matches!(m, $pattern $(if $guard)?))
            .count()
    };
}
