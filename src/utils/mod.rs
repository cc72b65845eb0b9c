mod atomic;
mod hash;

pub use atomic::atomic_write;
pub use hash::{compute_hash, constant_time_eq};
