pub mod analyzer;
pub mod bump;
pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod resolver;
pub mod ui;
pub mod workspace;

pub use error::{GitBumpError, Result};
