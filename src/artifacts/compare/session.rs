use crate::artifacts::compare::engine::ComparisonInput;
use crate::artifacts::compare::row::DiffRow;
use anyhow::Context;
use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Runs comparisons off the caller's thread and hands back only the newest one.
///
/// Each submission takes a ticket. A result whose ticket was superseded while
/// it was being computed resolves to `None` and must not be rendered. The
/// comparison itself is not interrupted.
#[derive(Debug, Clone, Default)]
pub struct DiffSession {
    generation: Arc<AtomicU64>,
}

impl DiffSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ticket of the most recent submission, 0 before the first one.
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// The ticket is taken when `submit` is called, not when the future is
    /// first polled, so call order decides which result is the latest.
    pub fn submit(
        &self,
        input: ComparisonInput,
    ) -> impl Future<Output = anyhow::Result<Option<Vec<DiffRow>>>> + Send + 'static {
        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let generation = Arc::clone(&self.generation);

        async move {
            let rows = tokio::task::spawn_blocking(move || input.compare())
                .await
                .with_context(|| format!("comparison #{ticket} did not complete"))?;

            let latest = generation.load(Ordering::SeqCst);
            if latest != ticket {
                log::debug!("discarding comparison #{ticket}, superseded by #{latest}");
                return Ok(None);
            }

            Ok(Some(rows))
        }
    }
}
