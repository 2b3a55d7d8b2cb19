//! Парсер SQL SELECT для selsql

pub mod ast;
pub mod cursor;
pub mod parser;

#[cfg(test)]
pub mod tests;

// Переэкспортируем основные типы
pub use ast::{CompareOp, Comparison, Condition, Literal, LogicOp, SelectStatement};
pub use cursor::{Cursor, Position};
pub use parser::{parse_select, SelectParser};
