//! CLI интерфейс для selsql
//!
//! Драйвер читает statement'ы из файла по одному на строку, прогоняет каждый
//! через парсер заданное число раз и печатает дерево либо ошибку.

use clap::Parser;
use std::path::PathBuf;

/// selsql — парсер ограниченного SQL SELECT
#[derive(Parser)]
#[command(name = "selsql")]
#[command(about = "selsql - a restricted SQL SELECT parser")]
#[command(version)]
pub struct Cli {
    /// Файл со statement'ами, по одному на строку
    pub file: PathBuf,

    /// Сколько раз повторить проход по файлу (для замеров)
    #[arg(short = 'n', long, default_value_t = 1)]
    pub runs: u32,

    /// Не печатать разобранные деревья
    #[arg(short, long)]
    pub quiet: bool,

    /// Печатать AST в формате JSON вместо канонического текста
    #[arg(long)]
    pub json: bool,
}
