pub mod input;
pub mod parser;
