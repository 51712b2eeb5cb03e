use std::future::Future;

use tokio::sync::mpsc;

use crate::games::tictactoe::GameView;

pub trait SessionBroadcaster: Send + Sync + 'static {
    fn broadcast_state(&self, view: GameView) -> impl Future<Output = ()> + Send;

    fn broadcast_game_over(&self, view: GameView) -> impl Future<Output = ()> + Send;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionUpdate {
    State(GameView),
    GameOver(GameView),
}

/// Forwards every update into an unbounded channel.
#[derive(Clone)]
pub struct ChannelBroadcaster {
    sender: mpsc::UnboundedSender<SessionUpdate>,
}

impl ChannelBroadcaster {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<SessionUpdate>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }
}

impl SessionBroadcaster for ChannelBroadcaster {
    async fn broadcast_state(&self, view: GameView) {
        let _ = self.sender.send(SessionUpdate::State(view));
    }

    async fn broadcast_game_over(&self, view: GameView) {
        let _ = self.sender.send(SessionUpdate::GameOver(view));
    }
}
