pub mod proximity;

pub use proximity::{Projected, Scan};
