//! Parser for the flat `"key" = "value";` string-table grammar.

use std::collections::BTreeMap;

/// Flat key-value table parsed from a `.strings` file.
pub type StringTable = BTreeMap<String, String>;

/// Parse failure with the line it occurred on.
#[derive(Debug)]
pub struct StringsParseError {
    /// 1-based line number of the malformed construct.
    pub line: usize,
    /// Description of what went wrong.
    pub message: String,
}

impl std::fmt::Display for StringsParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}: {}", self.line, self.message)
    }
}

impl std::error::Error for StringsParseError {}

/// Parse the classic string-table grammar.
///
/// Supports quoted and bare keys, `//` and `/* */` comments, and the usual
/// backslash escapes inside quoted text. Later duplicates of a key overwrite
/// earlier ones.
pub fn parse_strings(input: &str) -> Result<StringTable, StringsParseError> {
    let mut cursor = Cursor::new(input);
    let mut table = StringTable::new();

    loop {
        cursor.skip_trivia()?;
        if cursor.peek().is_none() {
            return Ok(table);
        }

        let key = cursor.read_key()?;
        cursor.skip_trivia()?;
        cursor.expect('=')?;
        cursor.skip_trivia()?;
        let value = cursor.read_quoted()?;
        cursor.skip_trivia()?;
        cursor.expect(';')?;
        table.insert(key, value);
    }
}

struct Cursor<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
    line: usize,
}

impl<'a> Cursor<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            chars: input.chars().peekable(),
            line: 1,
        }
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }

    fn bump(&mut self) -> Option<char> {
        let next = self.chars.next();
        if next == Some('\n') {
            self.line += 1;
        }
        next
    }

    fn error(&self, message: impl Into<String>) -> StringsParseError {
        StringsParseError {
            line: self.line,
            message: message.into(),
        }
    }

    fn skip_trivia(&mut self) -> Result<(), StringsParseError> {
        loop {
            match self.peek() {
                Some(c) if c.is_whitespace() => {
                    self.bump();
                }
                Some('/') => {
                    self.bump();
                    match self.peek() {
                        Some('/') => {
                            while let Some(c) = self.bump() {
                                if c == '\n' {
                                    break;
                                }
                            }
                        }
                        Some('*') => {
                            self.bump();
                            let mut previous = '\0';
                            loop {
                                match self.bump() {
                                    Some('/') if previous == '*' => break,
                                    Some(c) => previous = c,
                                    None => return Err(self.error("unterminated comment")),
                                }
                            }
                        }
                        _ => return Err(self.error("stray '/'")),
                    }
                }
                _ => return Ok(()),
            }
        }
    }

    fn expect(&mut self, expected: char) -> Result<(), StringsParseError> {
        match self.bump() {
            Some(c) if c == expected => Ok(()),
            Some(c) => Err(self.error(format!("expected '{expected}', found '{c}'"))),
            None => Err(self.error(format!("expected '{expected}', found end of input"))),
        }
    }

    fn read_key(&mut self) -> Result<String, StringsParseError> {
        if self.peek() == Some('"') {
            return self.read_quoted();
        }

        let mut key = String::new();
        while let Some(c) = self.peek() {
            if c.is_alphanumeric() || matches!(c, '_' | '.' | '-') {
                key.push(c);
                self.bump();
            } else {
                break;
            }
        }

        if key.is_empty() {
            return Err(self.error("expected a key"));
        }
        Ok(key)
    }

    fn read_quoted(&mut self) -> Result<String, StringsParseError> {
        self.expect('"')?;
        let mut value = String::new();
        loop {
            match self.bump() {
                Some('"') => return Ok(value),
                Some('\\') => match self.bump() {
                    Some('n') => value.push('\n'),
                    Some('t') => value.push('\t'),
                    Some('r') => value.push('\r'),
                    Some(c @ ('"' | '\\' | '\'')) => value.push(c),
                    Some(c) => {
                        value.push('\\');
                        value.push(c);
                    }
                    None => return Err(self.error("unterminated string")),
                },
                Some(c) => value.push(c),
                None => return Err(self.error("unterminated string")),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::parse_strings;

    #[test]
    fn parses_quoted_pairs() {
        let table = parse_strings("\"Greeting\" = \"Hello\";\n\"Farewell\" = \"Bye\";")
            .expect("table should parse");
        assert_eq!(table.get("Greeting").map(String::as_str), Some("Hello"));
        assert_eq!(table.get("Farewell").map(String::as_str), Some("Bye"));
    }

    #[test]
    fn parses_bare_keys_with_dots() {
        let table =
            parse_strings("LoginButton.Title = \"Sign In\";").expect("table should parse");
        assert_eq!(
            table.get("LoginButton.Title").map(String::as_str),
            Some("Sign In")
        );
    }

    #[test]
    fn skips_comments() {
        let input = r#"
            // line comment
            "A" = "1";
            /* block
               comment */
            "B" = "2";
        "#;
        let table = parse_strings(input).expect("table should parse");
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn decodes_escapes_in_quoted_text() {
        let table = parse_strings(r#""Key" = "line\none \"two\"\t\\";"#)
            .expect("table should parse");
        assert_eq!(
            table.get("Key").map(String::as_str),
            Some("line\none \"two\"\t\\")
        );
    }

    #[test]
    fn empty_input_yields_an_empty_table() {
        assert!(parse_strings("").expect("empty input parses").is_empty());
        assert!(
            parse_strings("  // nothing here\n")
                .expect("comment-only input parses")
                .is_empty()
        );
    }

    #[test]
    fn reports_the_line_of_a_missing_semicolon() {
        let err = parse_strings("\"A\" = \"1\";\n\"B\" = \"2\"")
            .expect_err("missing semicolon should fail");
        assert_eq!(err.line, 2);
    }

    #[test]
    fn rejects_unterminated_values() {
        assert!(parse_strings("\"A\" = \"open").is_err());
    }
}
