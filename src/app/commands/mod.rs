pub mod generate;
pub mod research;
