pub mod calculator;
pub mod logic;
pub mod parser;
pub mod render;
