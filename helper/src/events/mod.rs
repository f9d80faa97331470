mod poll_event;
pub use poll_event::*;

mod render_event;
pub use render_event::*;
