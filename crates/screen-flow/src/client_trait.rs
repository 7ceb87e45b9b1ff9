//! # ScreenHandle Trait
//!
//! Provides a common interface for screen-specific clients, adding default
//! `refresh` and `view` methods built on top of a generic `ScreenClient`.

use crate::{FlowError, ScreenClient, ScreenStore};
use async_trait::async_trait;

/// Trait for screen-specific clients to inherit the standard operations.
///
/// This trait reduces boilerplate by providing default implementations for
/// the operations every screen shares: reloading the base collection and
/// reading the current snapshot. Screen clients add their own domain methods
/// (search, cart operations, checkout) on top.
///
/// # Example
///
/// ```rust
/// use screen_flow::{FlowError, ScreenClient, ScreenHandle, ScreenStore};
/// use async_trait::async_trait;
///
/// // 1. Define a store
/// #[derive(Default)]
/// struct Counter { value: i64 }
/// #[derive(Debug)] enum CounterCommand { Add(i64) }
/// #[derive(Debug)] struct CounterError(String);
///
/// // Error must implement Display + Error + From<String> + Send + Sync
/// impl std::fmt::Display for CounterError {
///     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
///         write!(f, "{}", self.0)
///     }
/// }
/// impl std::error::Error for CounterError {}
///
/// impl From<String> for CounterError {
///     fn from(s: String) -> Self { CounterError(s) }
/// }
///
/// #[async_trait]
/// impl ScreenStore for Counter {
///     type Command = CounterCommand;
///     type Snapshot = i64;
///     type SubmitRequest = ();
///     type SubmitOutcome = ();
///     type Context = ();
///     type Error = CounterError;
///
///     async fn load(&mut self, _: &()) -> Result<(), CounterError> { Ok(()) }
///     fn apply(&mut self, cmd: CounterCommand) -> Result<(), CounterError> {
///         match cmd { CounterCommand::Add(n) => self.value += n }
///         Ok(())
///     }
///     async fn submit(&mut self, _: (), _: &()) -> Result<(), CounterError> { Ok(()) }
///     fn snapshot(&self) -> i64 { self.value }
/// }
///
/// // 2. Define a client wrapper
/// struct CounterScreen {
///     inner: ScreenClient<Counter>,
/// }
///
/// // 3. Implement ScreenHandle
/// #[async_trait]
/// impl ScreenHandle<Counter> for CounterScreen {
///     type Error = CounterError;
///
///     fn inner(&self) -> &ScreenClient<Counter> {
///         &self.inner
///     }
///
///     fn map_error(e: FlowError) -> Self::Error {
///         CounterError(e.to_string())
///     }
/// }
///
/// // 4. Usage
/// async fn usage(screen: CounterScreen) {
///     // refresh() and view() are provided automatically!
///     let _ = screen.refresh().await;
///     let _ = screen.view().await;
/// }
/// ```
#[async_trait]
pub trait ScreenHandle<S: ScreenStore>: Send + Sync {
    /// The screen-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic ScreenClient.
    fn inner(&self) -> &ScreenClient<S>;

    /// Map framework errors to the specific screen error type.
    fn map_error(e: FlowError) -> Self::Error;

    /// Reload the screen's base collection and return the derived snapshot.
    #[tracing::instrument(skip(self))]
    async fn refresh(&self) -> Result<S::Snapshot, Self::Error> {
        tracing::debug!("Sending load request");
        self.inner().load().await.map_err(Self::map_error)
    }

    /// Read the current snapshot.
    #[tracing::instrument(skip(self))]
    async fn view(&self) -> Result<S::Snapshot, Self::Error> {
        tracing::debug!("Sending snapshot request");
        self.inner().snapshot().await.map_err(Self::map_error)
    }
}
