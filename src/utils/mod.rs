//! Utility modules for common functionality

pub mod exit_codes;
pub mod filesystem;
pub mod validators;

// Re-export commonly used functions
pub use exit_codes::{
    exit_code_for, exit_code_for_all, exit_code_for_error, get_exit_code_description,
};
pub use filesystem::{read_body_file, resolve_relative};
