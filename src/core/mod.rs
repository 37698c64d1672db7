pub mod codepage;
pub mod compiler;
pub mod converter;
pub mod devanagari;
pub mod engine;
pub mod reorder;
pub mod rule;
pub mod rule_table;
pub mod token;
