//! Символьный курсор для разбора SELECT-запроса
//!
//! Грамматика достаточно мала, чтобы обойтись без отдельного лексера:
//! правила парсера читают символы напрямую, а курсор отслеживает позицию
//! для диагностики и поддерживает откат к сохранённой точке.

use std::fmt;

/// Позиция в исходном тексте
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub column: usize,
    pub offset: usize,
}

impl Position {
    pub fn new(line: usize, column: usize, offset: usize) -> Self {
        Self {
            line,
            column,
            offset,
        }
    }

    pub fn start() -> Self {
        Self::new(1, 1, 0)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Сохранённое состояние курсора для отката
#[derive(Debug, Clone)]
pub struct Checkpoint {
    position: usize,
    current_position: Position,
}

/// Курсор по символам входного текста
pub struct Cursor {
    /// Исходный текст
    input: Vec<char>,
    /// Текущая позиция в тексте
    position: usize,
    /// Текущая позиция для отображения ошибок
    current_position: Position,
}

impl Cursor {
    /// Создает новый курсор в начале текста
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            current_position: Position::start(),
        }
    }

    /// Возвращает текущий символ и продвигает позицию
    pub fn advance(&mut self) -> char {
        if self.position >= self.input.len() {
            return '\0';
        }

        let ch = self.input[self.position];
        self.position += 1;

        if ch == '\n' {
            self.current_position.line += 1;
            self.current_position.column = 1;
        } else {
            self.current_position.column += 1;
        }
        self.current_position.offset += 1;

        ch
    }

    /// Возвращает следующий символ без продвижения позиции
    pub fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    /// Возвращает символ на определенном расстоянии от текущей позиции
    pub fn peek_ahead(&self, offset: usize) -> Option<char> {
        self.input.get(self.position + offset).copied()
    }

    /// Пропускает пробельные символы между токенами
    pub fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek() {
            if ch.is_ascii_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    /// Проверяет, достигнут ли конец ввода
    pub fn is_eof(&self) -> bool {
        self.position >= self.input.len()
    }

    /// Текущая позиция для диагностики
    pub fn pos(&self) -> Position {
        self.current_position.clone()
    }

    /// Непотреблённый остаток текста от текущей позиции
    pub fn rest(&self) -> String {
        self.input[self.position..].iter().collect()
    }

    /// Сохраняет состояние для последующего отката
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            position: self.position,
            current_position: self.current_position.clone(),
        }
    }

    /// Возвращает курсор к сохранённому состоянию
    pub fn restore(&mut self, checkpoint: Checkpoint) {
        self.position = checkpoint.position;
        self.current_position = checkpoint.current_position;
    }

    /// Потребляет ожидаемый одиночный символ, если он следующий
    pub fn match_symbol(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Потребляет ключевое слово без учета регистра
    ///
    /// Совпадение обязано быть целым токеном: сразу за ключевым словом не
    /// может идти буква, цифра или `_` (иначе `selection` совпал бы с
    /// `select`). При неудаче курсор откатывается, ничего не потребляя.
    pub fn match_keyword(&mut self, keyword: &str) -> bool {
        let saved = self.checkpoint();

        for expected in keyword.chars() {
            match self.peek() {
                Some(ch) if ch.eq_ignore_ascii_case(&expected) => {
                    self.advance();
                }
                _ => {
                    self.restore(saved);
                    return false;
                }
            }
        }

        // Граница токена: дальше не должно быть продолжения идентификатора
        if let Some(ch) = self.peek() {
            if ch.is_ascii_alphanumeric() || ch == '_' {
                self.restore(saved);
                return false;
            }
        }

        true
    }
}
