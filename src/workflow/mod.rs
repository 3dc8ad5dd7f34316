mod conflict;
mod error;
mod mutations;
mod queries;

pub use conflict::find_conflict;
pub use error::WorkflowError;

use std::future::Future;
use std::sync::Arc;
use std::time::Instant;

use tokio::time::timeout;
use tracing::warn;

use crate::config::Config;
use crate::messages::Notice;
use crate::model::{BookingId, BookingRecord, BookingStatus};
use crate::notify::Notifier;
use crate::observability::{GATEWAY_DURATION_SECONDS, NOTIFY_FAILURES_TOTAL};
use crate::store::{Repository, StorageError};

/// The approval state machine. Owns nothing but gateway handles and
/// configuration: every operation re-reads current truth through the
/// repository (no process-wide cache of the collection) and holds no lock
/// across any gateway call.
pub struct Workflow {
    repo: Arc<dyn Repository>,
    notifier: Arc<dyn Notifier>,
    config: Config,
}

impl Workflow {
    pub fn new(repo: Arc<dyn Repository>, notifier: Arc<dyn Notifier>, config: Config) -> Self {
        Self {
            repo,
            notifier,
            config,
        }
    }

    /// Run one repository call under the configured timeout, recording its
    /// latency. An elapsed timeout surfaces as `Storage`; no partial state
    /// is committed on a timed-out call.
    async fn with_gateway<T>(
        &self,
        call: &'static str,
        fut: impl Future<Output = Result<T, StorageError>>,
    ) -> Result<T, WorkflowError> {
        let start = Instant::now();
        let result = match timeout(self.config.gateway_timeout, fut).await {
            Ok(r) => r.map_err(WorkflowError::from),
            Err(_) => Err(WorkflowError::Storage(format!("{call} timed out"))),
        };
        metrics::histogram!(GATEWAY_DURATION_SECONDS, "call" => call)
            .record(start.elapsed().as_secs_f64());
        result
    }

    pub(super) async fn fetch_all(&self) -> Result<Vec<BookingRecord>, WorkflowError> {
        self.with_gateway("fetch_all", self.repo.fetch_all()).await
    }

    pub(super) async fn append(&self, record: BookingRecord) -> Result<(), WorkflowError> {
        self.with_gateway("append", self.repo.append(record)).await
    }

    pub(super) async fn commit_status(
        &self,
        id: BookingId,
        status: BookingStatus,
    ) -> Result<(), WorkflowError> {
        self.with_gateway("update_status", self.repo.update_status(id, status))
            .await
    }

    /// Best-effort delivery: failures and timeouts are counted and logged,
    /// never propagated. A notice must not abort or roll back the state
    /// change that produced it, nor block a sibling notice.
    pub(super) async fn send_notice(&self, to: &str, notice: Notice) {
        let start = Instant::now();
        let sent = timeout(
            self.config.gateway_timeout,
            self.notifier.notify(to, &notice.subject, &notice.body_html),
        )
        .await;
        metrics::histogram!(GATEWAY_DURATION_SECONDS, "call" => "notify")
            .record(start.elapsed().as_secs_f64());
        match sent {
            Ok(Ok(())) => {}
            Ok(Err(e)) => {
                metrics::counter!(NOTIFY_FAILURES_TOTAL).increment(1);
                warn!(to, subject = %notice.subject, "notification failed: {e}");
            }
            Err(_) => {
                metrics::counter!(NOTIFY_FAILURES_TOTAL).increment(1);
                warn!(to, subject = %notice.subject, "notification timed out");
            }
        }
    }
}
