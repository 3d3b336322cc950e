//! Parsing of inputs typed on the command line
//!
//! Two tiny grammars share one tokenizer:
//!
//! ```text
//! values := number (sep number)*          e.g. "5,3,4,1,2" or "5 3 4"
//! edges  := label '-' label (sep label '-' label)*   e.g. "N1-N2, N2-N3"
//! sep    := ',' | whitespace
//! ```
//!
//! Errors carry the 1-based column of the offending token.

use super::graph::{label_index, node_label, Graph};
use super::{InputError, MAX_NODES};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("parse error at column {column}: {message}")]
    Syntax { message: String, column: usize },
    #[error(transparent)]
    Graph(#[from] InputError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Number(i64, usize),
    Label(String, usize),
    Dash(usize),
    Comma(usize),
    Eof(usize),
}

impl Token {
    fn column(&self) -> usize {
        match self {
            Token::Number(_, c)
            | Token::Label(_, c)
            | Token::Dash(c)
            | Token::Comma(c)
            | Token::Eof(c) => *c,
        }
    }

    fn describe(&self) -> String {
        match self {
            Token::Number(n, _) => format!("number {}", n),
            Token::Label(l, _) => format!("label '{}'", l),
            Token::Dash(_) => "'-'".to_string(),
            Token::Comma(_) => "','".to_string(),
            Token::Eof(_) => "end of input".to_string(),
        }
    }
}

struct Lexer {
    input: Vec<char>,
    position: usize,
}

impl Lexer {
    fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
        }
    }

    fn tokenize(&mut self) -> Result<Vec<Token>, ParseError> {
        let mut tokens = Vec::new();

        loop {
            while self.peek().is_some_and(char::is_whitespace) {
                self.advance();
            }

            let column = self.position + 1;
            let Some(ch) = self.advance() else {
                tokens.push(Token::Eof(column));
                break;
            };

            let token = match ch {
                ',' => Token::Comma(column),
                '-' => Token::Dash(column),
                c if c.is_ascii_digit() => self.number(c, column)?,
                c if c.is_ascii_alphabetic() => self.label(c, column),
                other => {
                    return Err(ParseError::Syntax {
                        message: format!("unexpected character '{}'", other),
                        column,
                    })
                }
            };
            tokens.push(token);
        }

        Ok(tokens)
    }

    fn number(&mut self, first: char, column: usize) -> Result<Token, ParseError> {
        let mut digits = String::new();
        digits.push(first);
        while let Some(ch) = self.peek().filter(char::is_ascii_digit) {
            digits.push(ch);
            self.advance();
        }
        let value = digits.parse::<i64>().map_err(|_| ParseError::Syntax {
            message: format!("invalid integer '{}'", digits),
            column,
        })?;
        Ok(Token::Number(value, column))
    }

    fn label(&mut self, first: char, column: usize) -> Token {
        let mut label = String::new();
        label.push(first);
        while let Some(ch) = self.peek().filter(char::is_ascii_alphanumeric) {
            label.push(ch);
            self.advance();
        }
        Token::Label(label, column)
    }

    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += 1;
        Some(ch)
    }
}

/// Parse a list of integers such as `"5,3,4,1,2"`. A leading `-` negates.
pub fn parse_values(text: &str) -> Result<Vec<i64>, ParseError> {
    let tokens = Lexer::new(text).tokenize()?;
    let mut values = Vec::new();
    let mut iter = tokens.into_iter().peekable();
    let mut expect_value = true;

    while let Some(token) = iter.next() {
        match token {
            Token::Eof(_) => break,
            Token::Comma(column) if expect_value => {
                return Err(ParseError::Syntax {
                    message: "expected a number before ','".to_string(),
                    column,
                })
            }
            Token::Comma(_) => expect_value = true,
            Token::Number(n, _) => {
                values.push(n);
                expect_value = false;
            }
            Token::Dash(column) => match iter.next() {
                Some(Token::Number(n, _)) => {
                    values.push(-n);
                    expect_value = false;
                }
                other => {
                    return Err(ParseError::Syntax {
                        message: format!(
                            "expected a number after '-', found {}",
                            other.map(|t| t.describe()).unwrap_or_default()
                        ),
                        column,
                    })
                }
            },
            other => {
                return Err(ParseError::Syntax {
                    message: format!("expected a number, found {}", other.describe()),
                    column: other.column(),
                })
            }
        }
    }

    Ok(values)
}

/// Parse an edge list such as `"N1-N2, N1-N3"`.
///
/// The graph gets as many nodes as the highest label mentioned, or `nodes`
/// when that is larger.
pub fn parse_edges(text: &str, nodes: Option<usize>) -> Result<Graph, ParseError> {
    let tokens = Lexer::new(text).tokenize()?;
    let mut pairs: Vec<(usize, usize)> = Vec::new();
    let mut pos = 0;

    let node_at = |pos: usize| -> Result<usize, ParseError> {
        match &tokens[pos] {
            Token::Label(label, column) => label_index(label).ok_or_else(|| ParseError::Syntax {
                message: format!("'{}' is not a node label (expected N1, N2, ...)", label),
                column: *column,
            }),
            other => Err(ParseError::Syntax {
                message: format!("expected a node label, found {}", other.describe()),
                column: other.column(),
            }),
        }
    };

    while !matches!(tokens[pos], Token::Eof(_)) {
        let a = node_at(pos)?;
        pos += 1;
        match &tokens[pos] {
            Token::Dash(_) => pos += 1,
            other => {
                return Err(ParseError::Syntax {
                    message: format!("expected '-', found {}", other.describe()),
                    column: other.column(),
                })
            }
        }
        let b = node_at(pos)?;
        pos += 1;
        pairs.push((a, b));

        if let Token::Comma(_) = tokens[pos] {
            pos += 1;
        }
    }

    let highest = pairs.iter().map(|&(a, b)| a.max(b) + 1).max().unwrap_or(0);
    let count = highest.max(nodes.unwrap_or(0));
    if count > MAX_NODES {
        return Err(InputError::TooManyNodes {
            nodes: count,
            max: MAX_NODES,
        }
        .into());
    }

    let mut graph = Graph::with_nodes(count)?;
    for (a, b) in pairs {
        graph.add_edge(a, b)?;
    }
    Ok(graph)
}

/// Resolve a node label typed for the BFS source.
pub fn parse_node(text: &str) -> Result<usize, ParseError> {
    label_index(text.trim()).ok_or_else(|| ParseError::Syntax {
        message: format!(
            "'{}' is not a node label (expected {} or similar)",
            text.trim(),
            node_label(0)
        ),
        column: 1,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_commas_and_spaces() {
        assert_eq!(parse_values("5,3,4,1,2").unwrap(), vec![5, 3, 4, 1, 2]);
        assert_eq!(parse_values(" 5 3  4 ").unwrap(), vec![5, 3, 4]);
        assert_eq!(parse_values("1, -2").unwrap(), vec![1, -2]);
        assert_eq!(parse_values("").unwrap(), Vec::<i64>::new());
    }

    #[test]
    fn test_values_errors_report_column() {
        match parse_values("1,,2") {
            Err(ParseError::Syntax { column, .. }) => assert_eq!(column, 3),
            other => panic!("Expected syntax error, got {:?}", other),
        }
        match parse_values("1,x") {
            Err(ParseError::Syntax { column, .. }) => assert_eq!(column, 3),
            other => panic!("Expected syntax error, got {:?}", other),
        }
        assert!(parse_values("1;2").is_err());
    }

    #[test]
    fn test_edges() {
        let g = parse_edges("N1-N2, N1-N3 N2-N4,N3-N4", None).unwrap();
        assert_eq!(g, Graph::sample());
    }

    #[test]
    fn test_edges_extra_nodes_and_errors() {
        let g = parse_edges("N1-N2", Some(4)).unwrap();
        assert_eq!(g.node_count(), 4);
        assert!(parse_edges("N1-N1", None).is_err());
        assert!(parse_edges("N1 N2", None).is_err());
        assert!(parse_edges("N1-N9", None).is_err());
        assert!(parse_edges("A-B", None).is_err());
    }

    #[test]
    fn test_node() {
        assert_eq!(parse_node(" N3 ").unwrap(), 2);
        assert!(parse_node("3").is_err());
    }
}
