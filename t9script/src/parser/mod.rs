mod parser;
pub mod ast;

pub use parser::Parser;
