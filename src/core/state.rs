//! Dashboard state: the last known data and the view derived from it

use crate::models::{Signal, Snapshot};
use crate::render::{render_signals, render_snapshot, DashboardView, ViewPhase};
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::{watch, RwLock};
use tracing::debug;

#[derive(Default)]
struct LastKnown {
    snapshot: Option<Snapshot>,
    signals: Vec<Signal>,
}

/// Single owner of the last received snapshot and signal history.
///
/// Each `apply_*` call replaces its half wholesale and re-renders it;
/// the other half is untouched. Subscribers receive every new view
/// through a `watch` channel. Once [`close`](Self::close) has returned,
/// all updates are ignored.
pub struct DashboardState {
    last_known: RwLock<LastKnown>,
    view_tx: watch::Sender<DashboardView>,
    closed: AtomicBool,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardState {
    pub fn new() -> Self {
        let (view_tx, _) = watch::channel(DashboardView::default());
        Self {
            last_known: RwLock::new(LastKnown::default()),
            view_tx,
            closed: AtomicBool::new(false),
        }
    }

    /// Replace the snapshot; returns false if the state is closed
    pub async fn apply_snapshot(&self, snapshot: Snapshot) -> bool {
        if self.is_closed() {
            debug!("DashboardState: closed, dropping snapshot");
            return false;
        }

        let rendered = render_snapshot(&snapshot);
        let mut last_known = self.last_known.write().await;
        // close() may have landed while waiting for the lock
        if self.is_closed() {
            debug!("DashboardState: closed, dropping snapshot");
            return false;
        }
        last_known.snapshot = Some(snapshot);
        self.view_tx.send_modify(|view| {
            view.snapshot = Some(rendered);
            view.phase = ViewPhase::ShowingData;
        });
        true
    }

    /// Replace the signal history; returns false if the state is closed
    pub async fn apply_signals(&self, signals: Vec<Signal>) -> bool {
        if self.is_closed() {
            debug!("DashboardState: closed, dropping signal history");
            return false;
        }

        let rendered = render_signals(&signals);
        let mut last_known = self.last_known.write().await;
        if self.is_closed() {
            debug!("DashboardState: closed, dropping signal history");
            return false;
        }
        last_known.signals = signals;
        self.view_tx.send_modify(|view| view.signals = rendered);
        true
    }

    /// Current rendered view
    pub fn view(&self) -> DashboardView {
        self.view_tx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<DashboardView> {
        self.view_tx.subscribe()
    }

    pub async fn snapshot(&self) -> Option<Snapshot> {
        self.last_known.read().await.snapshot.clone()
    }

    pub async fn signals(&self) -> Vec<Signal> {
        self.last_known.read().await.signals.clone()
    }

    /// Stop accepting updates
    ///
    /// Waits for an apply that already holds the lock to finish, so no
    /// render lands after this returns.
    pub async fn close(&self) {
        let _last_known = self.last_known.write().await;
        self.closed.store(true, Ordering::Release);
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }
}
