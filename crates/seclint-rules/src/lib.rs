pub mod rule;
pub mod security;

pub use rule::*;
pub use security::*;
