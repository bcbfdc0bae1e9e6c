pub mod generate;
pub mod sync;
