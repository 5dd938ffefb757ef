// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration module for cz.
//!
//! This module handles loading and parsing configuration from cz.toml files,
//! falling back to defaults when none is present.

pub mod default;
mod loader;
mod schema;

pub use default::default_config;
pub use loader::{find_config_file, find_config_file_from, load_config, parse_config};
pub use schema::*;
