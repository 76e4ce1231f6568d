pub mod errors;

pub use errors::{EigError, EigErrorCategory, EigResult};
