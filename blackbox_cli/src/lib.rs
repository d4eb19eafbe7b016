mod config;
mod recording;
mod session;
pub use config::*;
pub use recording::*;
pub use session::*;
