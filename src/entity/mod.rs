pub mod user;

pub mod prelude;

pub use prelude::*;
