//! A tiny launcher for config files: keep a list of labelled paths and open
//! any of them in your editor from a numbered menu.

pub mod add;
pub mod interrupt;
pub mod launcher;
pub mod logging;
pub mod paths;
pub mod registry;
pub mod session;
pub mod settings;
pub mod store;
pub mod terminal;

pub use paths::ConfigPaths;
pub use registry::{Entry, Registry};
pub use session::Session;
pub use settings::Settings;
