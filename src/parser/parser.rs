//! Рекурсивный парсер SELECT-запроса
//!
//! Один метод на правило грамматики; каждый метод продвигает общий курсор и
//! возвращает разобранное значение либо ошибку. После потребления ключевого
//! слова или идентификатора правило зафиксировано: дальнейший сбой выдается
//! как жесткая ошибка с ожидаемой конструкцией, а не как откат к
//! альтернативе.

use crate::common::{Error, Result};
use crate::parser::ast::{CompareOp, Comparison, Condition, Literal, LogicOp, SelectStatement};
use crate::parser::cursor::Cursor;

/// Ключевые слова грамматики; идентификаторами не являются
const KEYWORDS: [&str; 5] = ["SELECT", "FROM", "WHERE", "AND", "OR"];

/// Разбирает один SELECT-запрос целиком
///
/// На успехе весь вход (с точностью до хвостовых пробелов) потреблён;
/// непотреблённый остаток — ошибка `TrailingInput`, а не молчаливое
/// игнорирование. Глубина вложенности скобок в WHERE ограничена только
/// стеком вызовов.
pub fn parse_select(input: &str) -> Result<SelectStatement> {
    log::debug!("разбор statement: {:?}", input);
    SelectParser::new(input).parse()
}

/// Рекурсивный парсер одного SELECT-запроса
pub struct SelectParser {
    cursor: Cursor,
}

impl SelectParser {
    /// Создает парсер над входным текстом
    pub fn new(input: &str) -> Self {
        Self {
            cursor: Cursor::new(input),
        }
    }

    /// Разбирает statement и требует конца ввода
    pub fn parse(mut self) -> Result<SelectStatement> {
        let statement = self.parse_statement()?;

        self.cursor.skip_whitespace();
        if !self.cursor.is_eof() {
            return Err(Error::trailing(self.cursor.pos(), self.cursor.rest()));
        }

        Ok(statement)
    }

    /// select: `SELECT` поля `FROM` таблица [`WHERE` условие]
    fn parse_statement(&mut self) -> Result<SelectStatement> {
        self.expect_keyword("SELECT")?;
        let fields = self.parse_field_list()?;
        self.expect_keyword("FROM")?;
        let table = self.parse_identifier("a table name")?;

        self.cursor.skip_whitespace();
        let condition = if self.cursor.match_keyword("WHERE") {
            Some(self.parse_condition_or()?)
        } else {
            None
        };

        Ok(SelectStatement {
            fields,
            table,
            condition,
        })
    }

    /// Список колонок: один и более идентификаторов через запятую
    fn parse_field_list(&mut self) -> Result<Vec<String>> {
        let mut fields = Vec::new();

        loop {
            fields.push(self.parse_identifier("a column name")?);

            self.cursor.skip_whitespace();
            if !self.cursor.match_symbol(',') {
                break;
            }
        }

        Ok(fields)
    }

    /// condition_or: condition_and (`OR` condition_and)*
    ///
    /// Повторения сворачиваются влево: накопленный результат становится
    /// левым потомком нового узла. Без повторений атом возвращается как есть.
    fn parse_condition_or(&mut self) -> Result<Condition> {
        let mut node = self.parse_condition_and()?;

        loop {
            self.cursor.skip_whitespace();
            if !self.cursor.match_keyword("OR") {
                break;
            }
            let right = self.parse_condition_and()?;
            node = Condition::binary(node, LogicOp::Or, right);
        }

        Ok(node)
    }

    /// condition_and: condition_atom (`AND` condition_atom)*
    ///
    /// AND связывает сильнее OR: этот уровень служит атомом для
    /// `parse_condition_or`.
    fn parse_condition_and(&mut self) -> Result<Condition> {
        let mut node = self.parse_condition_atom()?;

        loop {
            self.cursor.skip_whitespace();
            if !self.cursor.match_keyword("AND") {
                break;
            }
            let right = self.parse_condition_atom()?;
            node = Condition::binary(node, LogicOp::And, right);
        }

        Ok(node)
    }

    /// condition_atom: сравнение либо `(` condition_or `)`
    fn parse_condition_atom(&mut self) -> Result<Condition> {
        self.cursor.skip_whitespace();

        if self.cursor.match_symbol('(') {
            let condition = self.parse_condition_or()?;

            self.cursor.skip_whitespace();
            if !self.cursor.match_symbol(')') {
                return Err(Error::expected(
                    "')'",
                    self.cursor.pos(),
                    self.cursor.rest(),
                ));
            }
            Ok(condition)
        } else {
            Ok(Condition::Comparison(self.parse_comparison()?))
        }
    }

    /// Сравнение: идентификатор, оператор, литерал
    ///
    /// После идентификатора правило зафиксировано: отсутствие оператора или
    /// литерала — жесткая ошибка соответствующего шага.
    fn parse_comparison(&mut self) -> Result<Comparison> {
        let column = self.parse_identifier("an identifier")?;
        let op = self.parse_compare_op()?;
        let value = self.parse_literal()?;

        Ok(Comparison { column, op, value })
    }

    /// Оператор сравнения
    ///
    /// Двухсимвольные написания проверяются раньше односимвольных, чтобы
    /// `<=`, `>=`, `!=` не распадались на префикс и повисший `=`.
    fn parse_compare_op(&mut self) -> Result<CompareOp> {
        self.cursor.skip_whitespace();

        let (op, len) = match (self.cursor.peek(), self.cursor.peek_ahead(1)) {
            (Some('<'), Some('=')) => (CompareOp::Le, 2),
            (Some('>'), Some('=')) => (CompareOp::Ge, 2),
            (Some('!'), Some('=')) => (CompareOp::Ne, 2),
            (Some('<'), _) => (CompareOp::Lt, 1),
            (Some('>'), _) => (CompareOp::Gt, 1),
            (Some('='), _) => (CompareOp::Eq, 1),
            _ => {
                return Err(Error::expected(
                    "a comparison operator",
                    self.cursor.pos(),
                    self.cursor.rest(),
                ));
            }
        };

        for _ in 0..len {
            self.cursor.advance();
        }
        Ok(op)
    }

    /// Литерал: текст, затем булев, затем число
    fn parse_literal(&mut self) -> Result<Literal> {
        self.cursor.skip_whitespace();

        match self.cursor.peek() {
            Some(quote @ ('"' | '\'')) => self.parse_text_literal(quote),
            _ => {
                if self.cursor.match_keyword("TRUE") {
                    return Ok(Literal::Bool(true));
                }
                if self.cursor.match_keyword("FALSE") {
                    return Ok(Literal::Bool(false));
                }
                self.parse_number_literal()
            }
        }
    }

    /// Текстовый литерал: символы до повторения открывшей кавычки
    ///
    /// Экранирования нет; содержимое берется дословно. Конец ввода до
    /// закрывающей кавычки — `UnterminatedLiteral`.
    fn parse_text_literal(&mut self, quote: char) -> Result<Literal> {
        let at = self.cursor.pos();
        self.cursor.advance(); // открывающая кавычка

        let mut value = String::new();
        loop {
            match self.cursor.peek() {
                Some(ch) if ch == quote => {
                    self.cursor.advance();
                    return Ok(Literal::Text(value));
                }
                Some(_) => value.push(self.cursor.advance()),
                None => return Err(Error::unterminated(quote, at)),
            }
        }
    }

    /// Числовой литерал: строгое вещественное, иначе целое
    ///
    /// Вещественная форма обязана содержать точку с хотя бы одной цифрой по
    /// каждую сторону (`1.` и `.5` не проходят); экспонента не
    /// поддерживается.
    fn parse_number_literal(&mut self) -> Result<Literal> {
        let at = self.cursor.pos();
        let saved = self.cursor.checkpoint();

        let mut text = String::new();
        if matches!(self.cursor.peek(), Some('+' | '-')) {
            text.push(self.cursor.advance());
        }

        if self.read_digits(&mut text) == 0 {
            self.cursor.restore(saved);
            return Err(Error::expected("a literal", at, self.cursor.rest()));
        }

        if self.cursor.peek() == Some('.')
            && self
                .cursor
                .peek_ahead(1)
                .is_some_and(|ch| ch.is_ascii_digit())
        {
            text.push(self.cursor.advance()); // точка
            self.read_digits(&mut text);

            let value = text
                .parse::<f64>()
                .map_err(|_| Error::expected("a literal", at.clone(), self.cursor.rest()))?;
            return Ok(Literal::Float(value));
        }

        match text.parse::<i64>() {
            Ok(value) => Ok(Literal::Integer(value)),
            Err(_) => {
                // Переполнение i64
                self.cursor.restore(saved);
                Err(Error::expected(
                    "an integer literal",
                    at,
                    self.cursor.rest(),
                ))
            }
        }
    }

    /// Потребляет подряд идущие цифры, возвращает их количество
    fn read_digits(&mut self, text: &mut String) -> usize {
        let mut count = 0;
        while let Some(ch) = self.cursor.peek() {
            if ch.is_ascii_digit() {
                text.push(self.cursor.advance());
                count += 1;
            } else {
                break;
            }
        }
        count
    }

    /// Идентификатор: буква, затем буквы/цифры/подчеркивания
    ///
    /// Ключевые слова грамматики идентификаторами не считаются.
    fn parse_identifier(&mut self, what: &str) -> Result<String> {
        self.cursor.skip_whitespace();
        let at = self.cursor.pos();
        let saved = self.cursor.checkpoint();

        match self.cursor.peek() {
            Some(ch) if ch.is_ascii_alphabetic() => {}
            _ => return Err(Error::expected(what, at, self.cursor.rest())),
        }

        let mut name = String::new();
        while let Some(ch) = self.cursor.peek() {
            if ch.is_ascii_alphanumeric() || ch == '_' {
                name.push(self.cursor.advance());
            } else {
                break;
            }
        }

        if KEYWORDS.iter().any(|kw| kw.eq_ignore_ascii_case(&name)) {
            self.cursor.restore(saved);
            return Err(Error::expected(what, at, self.cursor.rest()));
        }

        Ok(name)
    }

    /// Ожидает ключевое слово и потребляет его
    fn expect_keyword(&mut self, keyword: &str) -> Result<()> {
        self.cursor.skip_whitespace();
        if self.cursor.match_keyword(keyword) {
            Ok(())
        } else {
            Err(Error::expected(
                keyword,
                self.cursor.pos(),
                self.cursor.rest(),
            ))
        }
    }
}
