// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Git integration module.
//!
//! This module lets the binary check for staged changes and commit the
//! confirmed message.

pub mod commands;
mod repo;

pub use commands::create_commit_in_repo;
pub use repo::Repository;
