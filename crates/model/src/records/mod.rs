pub mod chunk;
pub mod row;
