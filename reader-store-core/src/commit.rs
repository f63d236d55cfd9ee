//! Commit channel: the capability through which mutations reach a store

use tokio::sync::mpsc;

/// A channel that applies (or forwards) a tagged mutation
///
/// Dispatchers are written against this trait and never touch state
/// directly. Whatever the channel returns is handed back to the caller
/// unchanged, so `Output` may be a change flag, a `Result`, or a future.
///
/// # Example
/// ```ignore
/// fn set_progress<C: Commit<ReaderMutation>>(ctx: &mut C, progress: u32) -> C::Output {
///     ctx.commit(ReaderMutation::SetProgress(progress))
/// }
/// ```
pub trait Commit<M> {
    /// Value returned by a single commit
    type Output;

    /// Apply one mutation
    fn commit(&mut self, mutation: M) -> Self::Output;
}

impl<M, C: Commit<M> + ?Sized> Commit<M> for &mut C {
    type Output = C::Output;

    fn commit(&mut self, mutation: M) -> Self::Output {
        (**self).commit(mutation)
    }
}

impl<M, C: Commit<M> + ?Sized> Commit<M> for Box<C> {
    type Output = C::Output;

    fn commit(&mut self, mutation: M) -> Self::Output {
        (**self).commit(mutation)
    }
}

/// Commit channel backed by a closure
///
/// Created with [`commit_fn`].
#[derive(Clone)]
pub struct FnCommit<F> {
    f: F,
}

impl<F> std::fmt::Debug for FnCommit<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnCommit").finish_non_exhaustive()
    }
}

/// Wrap a closure as a commit channel.
///
/// # Example
/// ```
/// use reader_store_core::{commit_fn, Commit};
///
/// let mut seen = Vec::new();
/// let mut ctx = commit_fn(|m: u32| {
///     seen.push(m);
///     m * 2
/// });
/// assert_eq!(ctx.commit(21), 42);
/// drop(ctx);
/// assert_eq!(seen, vec![21]);
/// ```
pub fn commit_fn<M, R, F>(f: F) -> FnCommit<F>
where
    F: FnMut(M) -> R,
{
    FnCommit { f }
}

impl<M, R, F> Commit<M> for FnCommit<F>
where
    F: FnMut(M) -> R,
{
    type Output = R;

    fn commit(&mut self, mutation: M) -> R {
        (self.f)(mutation)
    }
}

/// Forward mutations to the task that owns the store.
///
/// A closed receiver surfaces as the channel's own `SendError`.
impl<M> Commit<M> for mpsc::UnboundedSender<M> {
    type Output = Result<(), mpsc::error::SendError<M>>;

    fn commit(&mut self, mutation: M) -> Self::Output {
        self.send(mutation)
    }
}
