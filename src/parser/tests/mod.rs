//! Тесты парсера selsql
