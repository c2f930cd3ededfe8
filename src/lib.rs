pub mod entropy_coding;
pub mod error;
pub mod helpers;
pub mod models;
pub mod runner;
pub mod symbols;
pub mod trace;

pub use error::{Error, Result};
pub use runner::{decode, encode, Decoded, Encoded, Mode, Options};
