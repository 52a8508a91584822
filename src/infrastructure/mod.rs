//! Infrastructure concerns: filesystem locations.

pub mod paths;

pub use paths::{data_dir, state_file};
