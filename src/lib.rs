pub mod cli;
pub mod error;
pub mod github;
pub mod models;
pub mod render;
pub mod sync;
pub mod tech;
pub mod types;
