pub mod args;
pub mod requests;

pub use args::Args;
