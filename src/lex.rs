use log::{debug, trace};

use crate::{
    op,
    status::{Result, Status},
};

pub const MAX_LINE_LEN: usize = 80;
pub const MAX_TOKENS: usize = 3;

/// Raised when the input had to be cut down. `line` is what will actually
/// be parsed.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Truncation {
    pub line: String,
}

#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct Tokens {
    pub words: Vec<String>,
    pub truncation: Option<Truncation>,
}

#[derive(Debug, PartialEq, Clone)]
pub struct Token {
    pub text: String,
    pub value: Option<f64>,
}

impl Token {
    pub fn is_numeric(&self) -> bool {
        self.value.is_some()
    }
}

/// Uppercases the line, clips it to [`MAX_LINE_LEN`] characters and keeps
/// at most [`MAX_TOKENS`] whitespace separated words.
pub fn normalize(line: &str) -> Tokens {
    let mut clipped = line.to_uppercase();
    let mut truncated = false;
    if let Some((idx, _)) = clipped.char_indices().nth(MAX_LINE_LEN) {
        clipped.truncate(idx);
        truncated = true;
    }

    let mut words: Vec<String> = clipped.split_whitespace().map(String::from).collect();
    if words.len() > MAX_TOKENS {
        words.truncate(MAX_TOKENS);
        truncated = true;
    }

    let truncation = if truncated {
        let line = words.join(" ");
        debug!("input truncated to {:?}", line);
        Some(Truncation { line })
    } else {
        None
    };
    debug!("tokens: {:?}", words);

    Tokens { words, truncation }
}

fn parse_number(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Marks each word as a number or an operator symbol. A single word that
/// is neither rejects the whole line. Every `MR` is then replaced by the
/// current memory value.
pub fn classify(words: &[String], memory: f64) -> Result<Vec<Token>> {
    let mut tokens = Vec::with_capacity(words.len());
    for word in words {
        let value = parse_number(word);
        if value.is_none() && !op::contains(word) {
            debug!("unrecognized token {:?}", word);
            return Err(Status::InvalidInput);
        }
        trace!("{:?} numeric={}", word, value.is_some());
        tokens.push(Token {
            text: word.clone(),
            value,
        });
    }

    for token in tokens.iter_mut().filter(|t| op::is_memory_recall(&t.text)) {
        token.value = Some(memory);
    }

    Ok(tokens)
}
