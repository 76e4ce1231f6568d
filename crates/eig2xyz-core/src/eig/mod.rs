mod model;
mod parser;

pub use model::EigenvectorModel;
pub use parser::{load_eig_file, parse_eig_source};
