pub mod access;

pub use access::{AccessGuard, ACCESS_HEADER};
