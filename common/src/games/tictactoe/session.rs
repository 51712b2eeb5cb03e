use tokio::sync::mpsc;
use tokio::time::{Instant, sleep_until};

use crate::games::SessionBroadcaster;
use super::game_state::{PendingReply, TicTacToeGameState};
use super::game_view::GameView;
use super::settings::TicTacToeSettings;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionCommand {
    PlaceMark { cell: usize },
    JumpTo { ply: usize },
    Reset,
    Shutdown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Transition {
    Unchanged,
    Updated,
    Finished,
}

struct ScheduledReply {
    reply: PendingReply,
    deadline: Instant,
}

/// Owns one game and drives it from a single task: player commands arrive on
/// a channel, the computer's reply is played from a timer.
pub struct TicTacToeSession {
    game_state: TicTacToeGameState,
    settings: TicTacToeSettings,
    scheduled: Option<ScheduledReply>,
}

impl TicTacToeSession {
    pub fn new(settings: TicTacToeSettings) -> Self {
        Self {
            game_state: TicTacToeGameState::new(),
            settings,
            scheduled: None,
        }
    }

    pub fn game_state(&self) -> &TicTacToeGameState {
        &self.game_state
    }

    pub fn has_scheduled_reply(&self) -> bool {
        self.scheduled.is_some()
    }

    /// Runs until `Shutdown` is received or every sender is dropped, then
    /// hands back the final game state.
    pub async fn run<B: SessionBroadcaster>(
        mut self,
        mut command_rx: mpsc::UnboundedReceiver<SessionCommand>,
        broadcaster: B,
    ) -> TicTacToeGameState {
        self.publish(&broadcaster, Transition::Updated).await;

        loop {
            let deadline = self.scheduled.as_ref().map(|scheduled| scheduled.deadline);

            let transition = tokio::select! {
                _ = wait_for_deadline(deadline) => self.fire_scheduled_reply(),
                command = command_rx.recv() => match command {
                    Some(SessionCommand::Shutdown) | None => break,
                    Some(command) => self.handle_command(command),
                },
            };

            self.publish(&broadcaster, transition).await;
        }

        crate::log!("Session finished at ply {}", self.game_state.ply());
        self.game_state
    }

    fn handle_command(&mut self, command: SessionCommand) -> Transition {
        match command {
            SessionCommand::PlaceMark { cell } => match self.game_state.place_mark(cell) {
                Ok(()) => {
                    self.schedule_reply();
                    self.transition_after_move()
                }
                Err(e) => {
                    crate::log!("Ignoring move on cell {}: {}", cell, e);
                    Transition::Unchanged
                }
            },
            SessionCommand::JumpTo { ply } => match self.game_state.jump_to(ply) {
                Ok(()) => {
                    // A reply scheduled before the jump stays queued and is
                    // checked against the new snapshot when it fires.
                    self.schedule_reply();
                    Transition::Updated
                }
                Err(e) => {
                    crate::log!("Ignoring jump: {}", e);
                    Transition::Unchanged
                }
            },
            SessionCommand::Reset => {
                self.game_state.reset();
                self.scheduled = None;
                crate::log!("Game reset");
                Transition::Updated
            }
            SessionCommand::Shutdown => Transition::Unchanged,
        }
    }

    fn schedule_reply(&mut self) {
        if let Some(reply) = self.game_state.pending_reply() {
            crate::log!(
                "Computer reply scheduled for ply {} in {} ms",
                reply.ply,
                self.settings.computer_delay_ms
            );
            self.scheduled = Some(ScheduledReply {
                reply,
                deadline: Instant::now() + self.settings.computer_delay(),
            });
        }
    }

    fn fire_scheduled_reply(&mut self) -> Transition {
        let Some(scheduled) = self.scheduled.take() else {
            return Transition::Unchanged;
        };

        match self.game_state.apply_reply(&scheduled.reply) {
            Ok(cell) => {
                crate::log!("Computer played cell {}\n{}", cell, self.game_state.active_snapshot());
                self.transition_after_move()
            }
            Err(e) => {
                crate::log!("Discarding computer reply: {}", e);
                Transition::Unchanged
            }
        }
    }

    fn transition_after_move(&self) -> Transition {
        if self.game_state.status().is_terminal() {
            crate::log!("Game over: {}", self.game_state.status_text());
            Transition::Finished
        } else {
            Transition::Updated
        }
    }

    async fn publish<B: SessionBroadcaster>(&self, broadcaster: &B, transition: Transition) {
        match transition {
            Transition::Unchanged => {}
            Transition::Updated => {
                broadcaster
                    .broadcast_state(GameView::from_game_state(&self.game_state))
                    .await;
            }
            Transition::Finished => {
                let view = GameView::from_game_state(&self.game_state);
                broadcaster.broadcast_state(view.clone()).await;
                broadcaster.broadcast_game_over(view).await;
            }
        }
    }
}

async fn wait_for_deadline(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => sleep_until(deadline).await,
        None => std::future::pending::<()>().await,
    }
}
