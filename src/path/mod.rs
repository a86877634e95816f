mod resolve;

pub use resolve::{normalize, resolve};
