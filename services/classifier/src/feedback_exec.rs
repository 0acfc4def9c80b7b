use feedback::FeedbackStore;

/// Runs SQLite work on the blocking pool.
pub async fn with_feedback_blocking<R, F>(
    store: FeedbackStore,
    f: F,
) -> Result<R, tokio::task::JoinError>
where
    R: Send + 'static,
    F: FnOnce(&FeedbackStore) -> R + Send + 'static,
{
    tokio::task::spawn_blocking(move || f(&store)).await
}
