//! Periodic background sync.
//!
//! [`SyncScheduler`] runs one sync cycle per tick of a fixed interval. Manual
//! syncs go through the same `Arc<Mutex<QuoteApi>>`, so a periodic cycle and a
//! manual one never interleave their read-modify-write of the collection.
//!
//! Tests drive cycles with [`SyncScheduler::tick`] instead of waiting on the
//! clock; [`SchedulerHandle::cancel`] stops a spawned loop.

use crate::api::{CmdResult, QuoteApi};
use crate::error::{QuotezError, Result};
use crate::remote::RemoteSource;
use crate::store::DataStore;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{watch, Mutex};
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, info};

pub struct SyncScheduler<S: DataStore + Send + 'static> {
    api: Arc<Mutex<QuoteApi<S>>>,
    remote: Arc<dyn RemoteSource>,
    every: Duration,
}

impl<S: DataStore + Send + 'static> Clone for SyncScheduler<S> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
            remote: Arc::clone(&self.remote),
            every: self.every,
        }
    }
}

impl<S: DataStore + Send + 'static> SyncScheduler<S> {
    pub fn new(api: Arc<Mutex<QuoteApi<S>>>, remote: Arc<dyn RemoteSource>, every: Duration) -> Self {
        Self { api, remote, every }
    }

    pub fn api(&self) -> &Arc<Mutex<QuoteApi<S>>> {
        &self.api
    }

    /// Run a single sync cycle now.
    pub async fn tick(&self) -> Result<CmdResult> {
        let mut api = self.api.lock().await;
        api.sync(self.remote.as_ref()).await
    }

    /// Start the periodic loop. The first cycle runs immediately.
    /// `on_cycle` receives the outcome of every cycle.
    pub fn spawn<F>(self, mut on_cycle: F) -> SchedulerHandle
    where
        F: FnMut(Result<CmdResult>) + Send + 'static,
    {
        let (cancel_tx, mut cancel_rx) = watch::channel(false);

        let task = tokio::spawn(async move {
            info!(every_secs = self.every.as_secs_f64(), "sync scheduler started");

            let mut ticker = interval(self.every);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            // Cancellation is checked first at both await points. A cycle
            // dropped mid-fetch has not touched the collection yet.
            loop {
                tokio::select! {
                    biased;
                    _ = cancel_rx.changed() => break,
                    _ = ticker.tick() => {}
                }

                debug!("scheduled sync tick");
                tokio::select! {
                    biased;
                    _ = cancel_rx.changed() => {
                        debug!("sync cycle abandoned");
                        break;
                    }
                    outcome = self.tick() => on_cycle(outcome),
                }
            }

            info!("sync scheduler stopped");
        });

        SchedulerHandle {
            cancel: cancel_tx,
            task,
        }
    }
}

pub struct SchedulerHandle {
    cancel: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl SchedulerHandle {
    /// Ask the loop to stop. A cycle still waiting on the remote is dropped.
    pub fn cancel(&self) {
        let _ = self.cancel.send(true);
    }

    /// Cancel and wait for the loop to exit.
    pub async fn shutdown(self) -> Result<()> {
        self.cancel();
        self.task
            .await
            .map_err(|e| QuotezError::Store(format!("sync task failed: {}", e)))
    }
}
