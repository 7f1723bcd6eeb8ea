//! Off-thread page fetching.
//!
//! The UI loop is synchronous; fetches are async. [`PageLoader`] owns a small
//! tokio runtime, spawns one task per page request and hands the outcome back
//! over a channel that the UI loop drains on its own thread. Every task
//! receives a cancellation signal; cancelling (or dropping the loader) makes a
//! late response a no-op.

use super::{FetchedPage, LaunchSource, PageRequest};
use crate::model::FetchError;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Runtime;
use tokio::sync::oneshot;
use tracing::{debug, warn};

/// Completed fetch, delivered back to the UI thread.
#[derive(Debug)]
pub struct PageResult {
    /// The request this result answers.
    pub request: PageRequest,
    /// Decoded page or the fetch error.
    pub outcome: Result<FetchedPage, FetchError>,
}

struct InFlight {
    request: PageRequest,
    cancel: oneshot::Sender<()>,
}

/// Runs page fetches for a [`LaunchSource`].
pub struct PageLoader<S: LaunchSource> {
    runtime: Option<Runtime>,
    source: Arc<S>,
    results_tx: Sender<PageResult>,
    results_rx: Receiver<PageResult>,
    in_flight: Option<InFlight>,
}

impl<S: LaunchSource> PageLoader<S> {
    /// Create a loader with its own single-worker runtime.
    ///
    /// # Errors
    ///
    /// Returns the I/O error if the runtime cannot be started.
    pub fn new(source: S) -> std::io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("launchdeck-fetch")
            .enable_all()
            .build()?;
        let (results_tx, results_rx) = mpsc::channel();

        Ok(Self {
            runtime: Some(runtime),
            source: Arc::new(source),
            results_tx,
            results_rx,
            in_flight: None,
        })
    }

    /// The source pages are fetched from.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// True while a dispatched request has not been collected.
    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Start fetching `request`.
    ///
    /// Callers gate on the pagination state, so a busy loader here is a bug
    /// upstream; the older request is cancelled rather than raced.
    pub fn dispatch(&mut self, request: PageRequest) {
        let Some(runtime) = self.runtime.as_ref() else {
            warn!(page = request.page, "Dispatch after loader shutdown ignored");
            return;
        };

        if let Some(previous) = self.in_flight.take() {
            warn!(
                previous = previous.request.page,
                next = request.page,
                "Page request dispatched while another was in flight"
            );
            let _ = previous.cancel.send(());
        }

        let (cancel_tx, cancel_rx) = oneshot::channel::<()>();
        let source = Arc::clone(&self.source);
        let results_tx = self.results_tx.clone();

        debug!(page = request.page, limit = request.limit, "Dispatching page fetch");
        runtime.spawn(async move {
            tokio::select! {
                biased;
                _ = cancel_rx => {
                    debug!(page = request.page, "Page fetch cancelled");
                }
                outcome = source.fetch_page(request) => {
                    // The receiver is gone once the loader is dropped.
                    let _ = results_tx.send(PageResult { request, outcome });
                }
            }
        });

        self.in_flight = Some(InFlight {
            request,
            cancel: cancel_tx,
        });
    }

    /// Collect a finished fetch without blocking.
    pub fn try_next(&mut self) -> Option<PageResult> {
        match self.results_rx.try_recv() {
            Ok(result) => Some(self.settle(result)),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }

    /// Wait up to `timeout` for a finished fetch.
    pub fn wait_next(&mut self, timeout: Duration) -> Option<PageResult> {
        match self.results_rx.recv_timeout(timeout) {
            Ok(result) => Some(self.settle(result)),
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => None,
        }
    }

    /// Cancel the in-flight fetch, if any.
    pub fn cancel(&mut self) {
        if let Some(in_flight) = self.in_flight.take() {
            debug!(page = in_flight.request.page, "Cancelling in-flight page fetch");
            let _ = in_flight.cancel.send(());
        }
    }

    /// Cancel outstanding work and stop the runtime without blocking.
    pub fn shutdown(&mut self) {
        self.cancel();
        if let Some(runtime) = self.runtime.take() {
            runtime.shutdown_background();
        }
    }

    fn settle(&mut self, result: PageResult) -> PageResult {
        if self
            .in_flight
            .as_ref()
            .is_some_and(|f| f.request == result.request)
        {
            self.in_flight = None;
        }
        result
    }
}

impl<S: LaunchSource> Drop for PageLoader<S> {
    fn drop(&mut self) {
        self.shutdown();
    }
}
