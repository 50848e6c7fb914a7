//! Core abstractions for the trace engine
//!
//! The step and trace model, the adapter and algorithm traits every plugin
//! implements, errors, configuration, and logging.

mod algorithm;
pub mod chumsky_utils;
mod config;
mod edit;
mod error;
pub mod logging;
mod step;
mod structure;
mod trace;

pub use algorithm::*;
pub use config::*;
pub use edit::*;
pub use error::*;
pub use logging::*;
pub use step::*;
pub use structure::*;
pub use trace::*;
