//! selsql — парсер ограниченного SQL SELECT
//!
//! Разбирает один SELECT-запрос (список колонок, одна таблица, необязательное
//! WHERE с комбинацией сравнений через AND/OR) в типизированное AST либо
//! возвращает ошибку с позицией сбоя и ожидаемой конструкцией. Семантической
//! проверки по схеме и выполнения запросов нет: это чистая функция из текста
//! в дерево.

pub mod cli;
pub mod common;
pub mod parser;

pub use common::error::{Error, Result};
pub use parser::ast::{CompareOp, Comparison, Condition, Literal, LogicOp, SelectStatement};
pub use parser::parse_select;

/// Версия библиотеки
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
