//! Command line front end for `cspace-detection`: argument parsing,
//! configuration, image decoding and mask output.

pub mod args;
pub mod config;
pub mod detection;
pub mod frame;
pub mod input;

pub use args::Args;
pub use config::Config;
pub use detection::{run_threshold, Report};
