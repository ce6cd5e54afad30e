pub mod category;
pub mod config;
pub mod id;
pub mod todo;

pub use category::*;
pub use config::*;
pub use id::*;
pub use todo::*;
