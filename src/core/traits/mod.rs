pub mod repository;

pub use repository::{Identified, Repository};
