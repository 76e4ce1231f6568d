pub mod domain;
pub mod eig;
pub mod elements;
pub mod serialization;
