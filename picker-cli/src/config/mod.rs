//! Group registry loading for the CLI

mod loader;

pub use loader::ConfigLoader;
