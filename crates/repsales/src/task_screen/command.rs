//! Synchronous mutations for the task screen.

/// Mutations the task screen accepts between round trips.
#[derive(Debug, Clone)]
pub enum TaskCommand {
    /// Clears the outcome of the last create attempt from the view.
    DismissCreateResult,
}
