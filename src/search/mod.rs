pub mod candidate;
pub use candidate::*;

pub mod config;
pub use config::*;

pub mod mutation;
pub use mutation::*;

pub mod search;
pub use search::*;
