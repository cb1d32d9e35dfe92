pub mod commits;
pub mod config;
pub mod error;
pub mod export;
pub mod github;
pub mod issues;
