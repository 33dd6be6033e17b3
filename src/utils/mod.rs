//! Utility modules: build info, logging, file persistence.

pub mod build_info;
pub mod logging;
pub mod persistence;
