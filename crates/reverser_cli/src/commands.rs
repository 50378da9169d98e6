//! Command modules for the reverser CLI.
//!
//! Each submodule handles a specific command:
//!
//! - `reverse_cmd`: Reverse a string and print it
//! - `explain_cmd`: Recognise and explain defects in compiler or runtime output
//! - `config_cmd`: Create, validate, read, and update the configuration file

pub mod config_cmd;
pub mod explain_cmd;
pub mod reverse_cmd;
