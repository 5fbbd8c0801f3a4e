//! Progress events for advisory runs and the channel they travel on.

pub mod channel;
pub mod types;

pub use channel::{progress_channel, ProgressReceiver, ProgressSender, StreamClosed};
pub use types::{AdvisorRef, ProgressEvent};
