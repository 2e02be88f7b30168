//! Single-slot scheduler for countdown ticks.

use super::actor::SessionCommand;

use std::time::Duration;

use log::trace;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::sleep as TokioSleep;
use uuid::Uuid;

/// Holds at most one pending tick.
///
/// Scheduling replaces (aborts) the previous timer, and dropping the
/// scheduler aborts whatever is pending, so a torn-down session can never
/// receive a late tick from its own timer.
#[derive(Debug, Default)]
pub(crate) struct TickScheduler {
    pending: Option<JoinHandle<()>>,
}

impl TickScheduler {
    pub(crate) fn schedule(
        &mut self,
        draw_id: Uuid,
        delay: Duration,
        command_tx: mpsc::Sender<SessionCommand>,
    ) {
        self.cancel();

        trace!("Scheduling tick for draw {draw_id} in {delay:?}");
        self.pending = Some(tokio::spawn(async move {
            TokioSleep(delay).await;
            // The session may be gone; nothing to do then.
            let _ = command_tx.send(SessionCommand::Tick(draw_id)).await;
        }));
    }

    pub(crate) fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    /// Forget the finished timer without aborting it.
    pub(crate) fn clear(&mut self) {
        self.pending = None;
    }
}

impl Drop for TickScheduler {
    fn drop(&mut self) {
        self.cancel();
    }
}
