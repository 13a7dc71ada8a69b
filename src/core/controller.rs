use crate::core::pipeline;
use crate::core::state::{StateCell, SubscriptionId};
use crate::domain::model::PresentationModel;
use crate::domain::ports::CandidateSource;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::task::JoinSet;

/// What to do with a response that completes after a newer fetch was started.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResponsePolicy {
    /// Apply every completion; whichever finishes last wins.
    #[default]
    LastWriteWins,
    /// Drop completions that belong to a superseded fetch.
    LatestRequestOnly,
}

struct Shared<S> {
    source: S,
    state: StateCell<PresentationModel>,
    generation: AtomicU64,
    policy: ResponsePolicy,
}

/// Owns the fetch lifecycle and publishes [`PresentationModel`] snapshots.
///
/// Construction publishes `Loading` and starts the first fetch, so it must happen inside a
/// tokio runtime. Fetches run as tokio tasks; dropping the controller aborts those still
/// in flight.
pub struct Controller<S> {
    shared: Arc<Shared<S>>,
    tasks: Mutex<JoinSet<()>>,
}

impl<S: CandidateSource + 'static> Controller<S> {
    pub fn new(source: S) -> Self {
        Self::with_policy(source, ResponsePolicy::default())
    }

    pub fn with_policy(source: S, policy: ResponsePolicy) -> Self {
        let controller = Self {
            shared: Arc::new(Shared {
                source,
                state: StateCell::new(PresentationModel::loading()),
                generation: AtomicU64::new(0),
                policy,
            }),
            tasks: Mutex::new(JoinSet::new()),
        };
        controller.load();
        controller
    }

    /// Re-enters `Loading` and starts a new fetch, whatever the current state.
    pub fn retry(&self) {
        tracing::info!("Retrying candidate fetch");
        self.load();
    }

    pub fn current_state(&self) -> Arc<PresentationModel> {
        self.shared.state.current()
    }

    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&Arc<PresentationModel>) + Send + Sync + 'static,
    {
        self.shared.state.subscribe(callback)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.shared.state.unsubscribe(id)
    }

    /// Stream of snapshots, starting with the current one.
    pub fn updates(&self) -> UnboundedReceiver<Arc<PresentationModel>> {
        self.shared.state.updates()
    }

    pub fn policy(&self) -> ResponsePolicy {
        self.shared.policy
    }

    fn load(&self) {
        let shared = &self.shared;
        let mut generation = 0;
        // generation bump and Loading publish are one atomic step
        shared.state.replace_with(|_| {
            generation = shared.generation.fetch_add(1, Ordering::SeqCst) + 1;
            Some(PresentationModel::loading())
        });

        let shared = Arc::clone(&self.shared);
        let mut tasks = self.tasks.lock().unwrap_or_else(PoisonError::into_inner);
        while tasks.try_join_next().is_some() {}
        tasks.spawn(async move {
            shared.fetch(generation).await;
        });
    }
}

impl<S: CandidateSource> Shared<S> {
    async fn fetch(&self, generation: u64) {
        tracing::debug!(generation, "Fetching candidates");

        let next = match self.source.fetch_candidates().await {
            Ok(candidates) => {
                let groups = pipeline::transform(Some(&candidates));
                tracing::debug!(
                    generation,
                    received = candidates.len(),
                    groups = groups.len(),
                    "Candidates fetched"
                );
                PresentationModel::success(groups)
            }
            Err(e) => {
                tracing::warn!(generation, error = %e, "Candidate fetch failed");
                PresentationModel::failed(e.user_friendly_message())
            }
        };

        let applied = self.state.replace_with(|_| {
            let latest = self.generation.load(Ordering::SeqCst);
            if self.policy == ResponsePolicy::LatestRequestOnly && latest != generation {
                return None;
            }
            Some(next)
        });

        if !applied {
            tracing::debug!(generation, "Discarding stale response");
        }
    }
}
