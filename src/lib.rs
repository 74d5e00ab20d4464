pub mod credentials;
pub mod logging;
pub mod model;
pub mod notes_feed;
pub mod payment;
pub mod remote;
pub mod secrets;
pub mod session;
pub mod store;
pub mod token;
pub mod tui;

mod tui_shell;
