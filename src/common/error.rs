//! Обработка ошибок для selsql

use crate::parser::cursor::Position;
use thiserror::Error;

/// Основной тип ошибки для selsql
///
/// Ошибка разбора всегда содержит позицию сбоя и описание ожидаемой
/// конструкции; формат сообщения повторяет диагностику вида
/// `expecting <X> here: "<остаток>"`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Неожиданный токен: правило зафиксировано, но ожидаемая
    /// конструкция не найдена
    #[error("expecting {expected} at {at} here: \"{rest}\"")]
    UnexpectedToken {
        expected: String,
        at: Position,
        rest: String,
    },

    /// Строковый литерал без закрывающей кавычки
    #[error("unterminated string literal (missing closing {quote}) starting at {at}")]
    UnterminatedLiteral { quote: char, at: Position },

    /// После полного разбора statement остался непотреблённый текст
    #[error("trailing input at {at}: \"{rest}\"")]
    TrailingInput { at: Position, rest: String },

    /// Ошибка I/O операций (чтение файла со statement'ами в драйвере)
    #[error("I/O error: {0}")]
    Io(String),

    /// Ошибка сериализации AST
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Тип результата для selsql
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Создает ошибку "ожидалась конструкция X"
    pub fn expected(expected: impl Into<String>, at: Position, rest: impl Into<String>) -> Self {
        Self::UnexpectedToken {
            expected: expected.into(),
            at,
            rest: rest.into(),
        }
    }

    /// Создает ошибку незакрытого строкового литерала
    pub fn unterminated(quote: char, at: Position) -> Self {
        Self::UnterminatedLiteral { quote, at }
    }

    /// Создает ошибку непотреблённого остатка ввода
    pub fn trailing(at: Position, rest: impl Into<String>) -> Self {
        Self::TrailingInput {
            at,
            rest: rest.into(),
        }
    }

    /// Позиция сбоя, если ошибка относится к разбору
    pub fn position(&self) -> Option<&Position> {
        match self {
            Self::UnexpectedToken { at, .. }
            | Self::UnterminatedLiteral { at, .. }
            | Self::TrailingInput { at, .. } => Some(at),
            Self::Io(_) | Self::Serialization(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
