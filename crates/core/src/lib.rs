#![forbid(unsafe_code)]

pub mod catalog;
pub mod journey;
pub mod model;
pub mod translate;

pub use journey::{build_journey, split_sentences};
pub use translate::resolve;
