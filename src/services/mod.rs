pub mod pdf_processor;
pub mod storage;

pub use pdf_processor::*;
pub use storage::*;
