//! The per-room aggregate and its session-owner surface (config, commands, snapshots).

pub(crate) mod command;
pub(crate) mod config;
pub(crate) mod session;
pub(crate) mod snapshot;
