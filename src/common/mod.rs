//! Общие типы и утилиты для selsql

pub mod error;

pub use error::{Error, Result};
