#![forbid(unsafe_code)]

pub mod model;
pub mod parse;
pub mod prompt;
pub mod time;

pub use time::Clock;
