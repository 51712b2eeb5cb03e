mod broadcaster;

pub mod tictactoe;

pub use broadcaster::{ChannelBroadcaster, SessionBroadcaster, SessionUpdate};
