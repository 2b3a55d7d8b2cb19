//! Абстрактное синтаксическое дерево SELECT-запроса для selsql
//!
//! Все узлы создаются один раз при разборе и после этого не изменяются;
//! дерево условий владеет потомками сверху вниз (без разделяемых ссылок и циклов).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Литерал
///
/// Тег фиксируется в момент разбора той формой литерала, которая совпала;
/// неявных приведений между вариантами нет.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Literal {
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

/// Оператор сравнения
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompareOp {
    Lt,
    Gt,
    Le,
    Ge,
    Eq,
    Ne,
}

/// Логический оператор в дереве условий
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogicOp {
    And,
    Or,
}

/// Сравнение: колонка, оператор, литерал
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    pub column: String,
    pub op: CompareOp,
    pub value: Literal,
}

/// Условие WHERE: лист-сравнение или бинарный узел AND/OR
///
/// Рекурсивные потомки хранятся через `Box`; дерево строится снизу вверх
/// при разборе и не мутируется после.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Condition {
    /// Листовое сравнение
    Comparison(Comparison),
    /// Бинарный узел: оба потомка обязательны
    Binary {
        left: Box<Condition>,
        op: LogicOp,
        right: Box<Condition>,
    },
}

/// Разобранный SELECT-запрос
///
/// `fields` никогда не пуст; `condition` присутствует тогда и только тогда,
/// когда в исходном тексте было WHERE.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectStatement {
    pub fields: Vec<String>,
    pub table: String,
    pub condition: Option<Condition>,
}

impl Condition {
    /// Создает бинарный узел AND/OR
    pub fn binary(left: Condition, op: LogicOp, right: Condition) -> Self {
        Self::Binary {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }
}

// === Канонический принтер ===
// Повторный разбор напечатанного текста дает структурно идентичное дерево:
// бинарные узлы печатаются с явными скобками, чтобы форма дерева не зависела
// от приоритетов при перечитывании.

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Bool(true) => write!(f, "TRUE"),
            Literal::Bool(false) => write!(f, "FALSE"),
            Literal::Integer(v) => write!(f, "{}", v),
            // {:?} у f64 всегда содержит точку для обычных величин
            Literal::Float(v) => write!(f, "{:?}", v),
            Literal::Text(v) => {
                // Экранирования нет: выбираем кавычку, не встречающуюся в значении
                if v.contains('\'') {
                    write!(f, "\"{}\"", v)
                } else {
                    write!(f, "'{}'", v)
                }
            }
        }
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CompareOp::Lt => "<",
            CompareOp::Gt => ">",
            CompareOp::Le => "<=",
            CompareOp::Ge => ">=",
            CompareOp::Eq => "=",
            CompareOp::Ne => "!=",
        };
        write!(f, "{}", s)
    }
}

impl fmt::Display for LogicOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogicOp::And => write!(f, "AND"),
            LogicOp::Or => write!(f, "OR"),
        }
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.column, self.op, self.value)
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::Comparison(cmp) => write!(f, "{}", cmp),
            Condition::Binary { left, op, right } => {
                write!(f, "({} {} {})", left, op, right)
            }
        }
    }
}

impl fmt::Display for SelectStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SELECT {} FROM {}", self.fields.join(", "), self.table)?;
        if let Some(condition) = &self.condition {
            write!(f, " WHERE {}", condition)?;
        }
        Ok(())
    }
}
