//! Главный исполняемый файл selsql

use clap::Parser;
use selsql::cli::Cli;
use selsql::{parse_select, Result};
use std::fs;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::from(1)
        }
    }
}

/// Прогоняет все statement'ы из файла; `Ok(false)` — были ошибки разбора
fn run(cli: &Cli) -> Result<bool> {
    let content = fs::read_to_string(&cli.file)?;
    let statements: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let mut all_ok = true;
    for run in 0..cli.runs {
        log::debug!("проход {} из {}", run + 1, cli.runs);

        for sql in &statements {
            match parse_select(sql) {
                Ok(statement) => {
                    if !cli.quiet {
                        if cli.json {
                            println!("{}", serde_json::to_string_pretty(&statement)?);
                        } else {
                            println!("{}", statement);
                        }
                    }
                }
                Err(err) => {
                    all_ok = false;
                    eprintln!("[FAIL] {}: {}", sql, err);
                }
            }
        }
    }

    Ok(all_ok)
}
