mod config;
mod project;
mod value;

pub use config::*;
pub use project::*;
pub use value::*;
