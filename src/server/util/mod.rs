pub mod parse;
pub mod validate;
