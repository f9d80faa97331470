use tokio::sync::mpsc;

pub use app::*;
pub use message::*;
pub use popup::*;
pub use scroll_states::*;
pub use state::*;

pub type MpscRx<T> = mpsc::UnboundedReceiver<T>;
pub type MpscTx<T> = mpsc::UnboundedSender<T>;

mod app;
mod message;
mod popup;
mod scroll_states;
mod state;
