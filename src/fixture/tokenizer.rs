//! Splits fixture text into whitespace-delimited tokens, remembering where each started.

use super::Location;

/// A single whitespace-delimited token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// The token itself, without surrounding whitespace.
    pub text: &'a str,
    /// Where the token starts.
    pub location: Location,
}

/// Sequential, forward-only tokenizer. There is no way to rewind.
#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
    input: &'a str,
    location: Location,
}

impl<'a> Tokenizer<'a> {
    /// Creates a tokenizer positioned at line 1, column 1.
    pub fn new(input: &'a str) -> Self {
        Tokenizer {
            input,
            location: Location::default(),
        }
    }

    /// Location just past the last consumed character.
    pub fn location(&self) -> Location {
        self.location
    }

    fn advance(&mut self, c: char) {
        self.location.offset += c.len_utf8();
        if c == '\n' {
            self.location.line += 1;
            self.location.column = 1;
        } else {
            self.location.column += 1;
        }
    }

    /// Consumes characters while `keep` holds.
    fn advance_while(&mut self, keep: impl Fn(char) -> bool) {
        let input = self.input;
        for c in input[self.location.offset..].chars() {
            if !keep(c) {
                break;
            }
            self.advance(c);
        }
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        self.advance_while(char::is_whitespace);
        let location = self.location;
        self.advance_while(|c| !c.is_whitespace());
        if self.location.offset == location.offset {
            None
        } else {
            Some(Token {
                text: &self.input[location.offset..self.location.offset],
                location,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Tokenizer;

    #[test]
    fn test_splits_on_any_whitespace() {
        let texts: Vec<&str> = Tokenizer::new("  3\npos1:\t1 2.5   -3\r\n").map(|t| t.text).collect();
        assert_eq!(texts, vec!["3", "pos1:", "1", "2.5", "-3"]);
    }

    #[test]
    fn test_tracks_lines_and_columns() {
        let tokens: Vec<_> = Tokenizer::new("1\n  pos1: 2\n\nresult: 01").collect();

        assert_eq!(tokens[0].location.line, 1);
        assert_eq!(tokens[0].location.column, 1);

        assert_eq!(tokens[1].text, "pos1:");
        assert_eq!(tokens[1].location.line, 2);
        assert_eq!(tokens[1].location.column, 3);
        assert_eq!(tokens[1].location.offset, 4);

        assert_eq!(tokens[3].text, "result:");
        assert_eq!(tokens[3].location.line, 4);
        assert_eq!(tokens[3].location.column, 1);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(Tokenizer::new("").next(), None);
        assert_eq!(Tokenizer::new(" \n\t ").next(), None);
    }

    #[test]
    fn test_location_after_exhaustion() {
        let mut tokens = Tokenizer::new("a\nb\n");
        while tokens.next().is_some() {}
        assert_eq!(tokens.location().line, 3);
        assert_eq!(tokens.location().offset, 4);
    }
}
