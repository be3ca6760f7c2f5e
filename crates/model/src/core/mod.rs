pub mod data_type;
pub mod utils;
pub mod value;
