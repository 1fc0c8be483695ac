//! whatsmy-gpu - GPU detection plugin for whatsmycli
//!
//! This library provides cross-platform GPU enumeration behind the
//! whatsmycli plugin interface. Detection strategies are selected per
//! target at compile time: sysfs traversal on Linux, SetupAPI device-class
//! enumeration on Windows, and a stub on macOS.
//!
//! # Modules
//!
//! - [`cli`]: Output formatting
//! - [`detect`]: Platform enumeration strategies and dispatcher
//! - [`domain`]: GPU record and vendor types
//! - [`error`]: Error types
//! - [`plugin`]: Plugin entry point and command router

pub mod cli;
pub mod detect;
pub mod domain;
pub mod error;
pub mod plugin;

pub use error::{AppError, Result};
pub use plugin::run;
