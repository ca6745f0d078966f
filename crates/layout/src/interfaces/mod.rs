mod args;
mod artifact;
mod identity;
mod namespace;
mod project;
mod table;

pub use args::*;
pub use artifact::*;
pub use identity::*;
pub use namespace::*;
pub use project::*;
pub use table::*;
