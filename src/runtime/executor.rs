//! Panel runtime executor

use super::traits::HostChannel;
use super::{PanelHandle, PanelInput, UiEvent};

use crate::availability::SplashView;
use crate::config::PanelConfig;
use crate::host::HostSnapshot;
use crate::state_machine::{transition, Effect, Event, GraceTimer, PanelState, TransitionError};
use tokio::sync::{broadcast, mpsc};
use tokio::time::Instant;

/// Event loop around the panel state machine
pub struct PanelRuntime<H>
where
    H: HostChannel + 'static,
{
    state: PanelState,
    host_state: HostSnapshot,
    host: H,
    input_rx: mpsc::Receiver<PanelInput>,
    /// Weak so the loop ends once every [`PanelHandle`] is dropped
    input_tx: mpsc::WeakSender<PanelInput>,
    ui_tx: broadcast::Sender<UiEvent>,
}

impl<H> PanelRuntime<H>
where
    H: HostChannel + 'static,
{
    #[must_use]
    pub fn new(config: &PanelConfig, host: H) -> (Self, PanelHandle) {
        let (input_tx, input_rx) = mpsc::channel(config.input_capacity);
        let (ui_tx, _) = broadcast::channel(config.ui_capacity);

        let runtime = Self {
            state: PanelState::new(config.availability_grace),
            host_state: HostSnapshot::default(),
            host,
            input_rx,
            input_tx: input_tx.downgrade(),
            ui_tx: ui_tx.clone(),
        };
        (runtime, PanelHandle::new(input_tx, ui_tx))
    }

    /// Spawn the event loop, returning a handle to feed it
    #[must_use]
    pub fn spawn(config: &PanelConfig, host: H) -> PanelHandle {
        let (runtime, handle) = Self::new(config, host);
        tokio::spawn(runtime.run());
        handle
    }

    #[must_use]
    pub fn state(&self) -> &PanelState {
        &self.state
    }

    #[must_use]
    pub fn host_state(&self) -> &HostSnapshot {
        &self.host_state
    }

    #[must_use]
    pub fn splash_view(&self) -> SplashView {
        self.state.splash_view(&self.host_state)
    }

    pub async fn run(mut self) {
        tracing::info!("Starting panel runtime");

        while let Some(input) = self.input_rx.recv().await {
            if let Err(e) = self.process_input(input).await {
                tracing::warn!(error = %e, "Error handling panel input");
            }
        }

        tracing::info!("Panel runtime stopped");
    }

    /// Wait for the next queued input and process it
    pub async fn process_next(&mut self) -> Option<Result<(), TransitionError>> {
        let input = self.input_rx.recv().await?;
        Some(self.process_input(input).await)
    }

    /// Process everything already queued without waiting. Returns how many
    /// inputs were handled.
    pub async fn process_pending(&mut self) -> usize {
        let mut handled = 0;
        while let Ok(input) = self.input_rx.try_recv() {
            if let Err(e) = self.process_input(input).await {
                tracing::warn!(error = %e, "Error handling panel input");
            }
            handled += 1;
        }
        handled
    }

    pub async fn process_input(&mut self, input: PanelInput) -> Result<(), TransitionError> {
        let before = self.splash_view();

        let result = match input {
            PanelInput::Event(event) => self.process_event(event).await,
            PanelInput::Host(update) => {
                self.host_state.apply(update);
                Ok(())
            }
        };

        let after = self.splash_view();
        if after != before {
            tracing::debug!(?before, ?after, "Splash view changed");
            let _ = self.ui_tx.send(UiEvent::SplashChanged { view: after });
        }

        result
    }

    async fn process_event(&mut self, event: Event) -> Result<(), TransitionError> {
        let result = match transition(&mut self.state, &self.host_state, event) {
            Ok(r) => r,
            Err(e) => {
                let _ = self.ui_tx.send(UiEvent::Error {
                    message: e.to_string(),
                });
                return Err(e);
            }
        };

        for effect in result.effects {
            self.execute_effect(effect).await;
        }
        Ok(())
    }

    async fn execute_effect(&self, effect: Effect) {
        match effect {
            Effect::PostToHost(message) => {
                if let Err(e) = self.host.post(message).await {
                    tracing::warn!(error = %e, "Failed to post message to host");
                }
            }

            Effect::Navigate { conversation_id } => {
                let _ = self.ui_tx.send(UiEvent::Navigate { conversation_id });
            }

            Effect::ScheduleGraceExpiry { delay } => {
                let Some(tx) = self.input_tx.upgrade() else {
                    tracing::debug!("Panel closed, grace timer not scheduled");
                    return;
                };
                // Deadline is fixed now, not when the task first runs
                let deadline = Instant::now() + delay;
                tokio::spawn(async move {
                    tokio::time::sleep_until(deadline).await;
                    let elapsed = Event::GraceElapsed(GraceTimer::fired());
                    if tx.send(PanelInput::Event(elapsed)).await.is_err() {
                        tracing::debug!("Panel closed before grace period elapsed");
                    }
                });
            }
        }
    }
}
