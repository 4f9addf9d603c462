//! Owner of the UI state. Runs prediction requests on worker threads.

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crossbeam_channel::{Receiver, RecvTimeoutError, Sender};
use premium_core::{IPredictionClient, InputField, InputSet, PredictionOutcome, TransportFailure};
use tracing::{debug, error};

use crate::state::{reduce, Effect, UiEvent, UiState};

/// Single owner of a [`UiState`].
///
/// `dispatch` never blocks on the network: a submission hands the request to
/// a worker thread and returns with `loading` set. The completion comes back
/// as a [`UiEvent::Resolved`] on [`completions`](Session::completions) and is
/// applied by [`poll`](Session::poll), [`wait`](Session::wait), or a direct
/// `dispatch`. Dropping the session drops the receiver, so a response that
/// arrives afterwards is discarded.
pub struct Session<C: IPredictionClient + 'static> {
    client: Arc<C>,
    state: UiState,
    tx: Sender<UiEvent>,
    rx: Receiver<UiEvent>,
}

impl<C: IPredictionClient + 'static> Session<C> {
    pub fn new(client: C) -> Self {
        Self::with_inputs(client, InputSet::default())
    }

    pub fn with_inputs(client: C, inputs: InputSet) -> Self {
        let (tx, rx) = crossbeam_channel::unbounded();
        Self {
            client: Arc::new(client),
            state: UiState::new(inputs),
            tx,
            rx,
        }
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    /// Channel on which request completions arrive.
    pub fn completions(&self) -> &Receiver<UiEvent> {
        &self.rx
    }

    pub fn dispatch(&mut self, event: UiEvent) -> &UiState {
        let transition = reduce(&self.state, event);
        self.state = transition.state;
        if let Some(effect) = transition.effect {
            self.run(effect);
        }
        &self.state
    }

    pub fn edit(&mut self, field: InputField, value: impl Into<String>) -> &UiState {
        self.dispatch(UiEvent::Edit {
            field,
            value: value.into(),
        })
    }

    /// Submit the current inputs. A no-op while a request is in flight.
    pub fn submit(&mut self) -> &UiState {
        self.dispatch(UiEvent::Submit)
    }

    pub fn close_result(&mut self) -> &UiState {
        self.dispatch(UiEvent::CloseResult)
    }

    /// Apply every completion that has already arrived. Returns how many.
    pub fn poll(&mut self) -> usize {
        let pending: Vec<UiEvent> = self.rx.try_iter().collect();
        let count = pending.len();
        for event in pending {
            self.dispatch(event);
        }
        count
    }

    /// Block until the in-flight request resolves or `timeout` elapses.
    /// Returns `true` if nothing is in flight afterwards. A timeout too large
    /// to represent as a deadline waits without one.
    pub fn wait(&mut self, timeout: Duration) -> bool {
        let Some(deadline) = std::time::Instant::now().checked_add(timeout) else {
            self.wait_forever();
            return !self.state.loading;
        };
        while self.state.loading {
            let remaining = deadline.saturating_duration_since(std::time::Instant::now());
            match self.rx.recv_timeout(remaining) {
                Ok(event) => {
                    self.dispatch(event);
                }
                Err(RecvTimeoutError::Timeout) => return false,
                // Unreachable while `self.tx` is alive.
                Err(RecvTimeoutError::Disconnected) => return false,
            }
        }
        true
    }

    /// Block until the in-flight request resolves, however long it takes.
    pub fn wait_forever(&mut self) {
        while self.state.loading {
            match self.rx.recv() {
                Ok(event) => {
                    self.dispatch(event);
                }
                Err(_) => return,
            }
        }
    }

    fn run(&mut self, effect: Effect) {
        match effect {
            Effect::SendRequest { request_id, inputs } => {
                debug!(request_id, "dispatching prediction request");
                let client = Arc::clone(&self.client);
                let tx = self.tx.clone();
                let spawned = thread::Builder::new()
                    .name(format!("premium-request-{request_id}"))
                    .spawn(move || {
                        let outcome = panic::catch_unwind(AssertUnwindSafe(|| client.predict(&inputs)))
                            .unwrap_or_else(|_| {
                                error!(request_id, "prediction client panicked");
                                PredictionOutcome::transport(TransportFailure::Other)
                            });
                        // The session may be gone; the result is then dropped.
                        let _ = tx.send(UiEvent::Resolved { request_id, outcome });
                    });

                if let Err(e) = spawned {
                    error!(request_id, error = %e, "failed to spawn request worker");
                    self.dispatch(UiEvent::Resolved {
                        request_id,
                        outcome: PredictionOutcome::transport(TransportFailure::Other),
                    });
                }
            }
        }
    }
}
