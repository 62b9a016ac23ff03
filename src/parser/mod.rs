pub mod errors;
pub mod product_parser;
pub mod traits;

pub use product_parser::ProductParser;
pub use traits::{Parser, ProductSource};
