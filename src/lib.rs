//! twerp - command-line control of a Twilio account.
//!
//! One invocation performs one action chosen from the command-line flags, or
//! drops into an interactive session for controlling a live call.

pub mod cli;
pub mod client;
pub mod config;
pub mod display;
pub mod session;
