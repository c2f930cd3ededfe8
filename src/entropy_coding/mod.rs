pub mod io;
pub mod range_coder;
