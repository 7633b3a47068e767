pub mod context;
pub mod finding;
pub mod model;
pub mod path;
pub mod types;

pub use context::*;
pub use finding::*;
pub use model::*;
pub use path::*;
pub use types::*;
