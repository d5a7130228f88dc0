pub mod codec;
pub mod metadata;
pub mod table;
pub mod utils;
