use log::debug;

use crate::{
    lex::Token,
    op::{self, Operator},
    status::{Result, Status},
};

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Command {
    /// A lone operator; operands are left as they were.
    Standalone(Operator),
    Binary {
        operand1: f64,
        operand2: f64,
        operator: Operator,
    },
}

pub struct Parser<'a> {
    tokens: &'a [Token],
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Parser { tokens }
    }

    /// Resolves one of the three sentence shapes:
    ///
    /// - `OP` where `OP` is standalone
    /// - `OP NUM`, chained onto `previous_result`
    /// - `NUM OP NUM`
    pub fn parse(&self, previous_result: f64) -> Result<Command> {
        let command = match self.tokens {
            [only] => Command::Standalone(self.standalone(only)?),
            [op, rhs] => Command::Binary {
                operand1: previous_result,
                operand2: self.number(rhs)?,
                operator: self.binary(op)?,
            },
            [lhs, op, rhs] => Command::Binary {
                operand1: self.number(lhs)?,
                operand2: self.number(rhs)?,
                operator: self.binary(op)?,
            },
            _ => return Err(Status::InvalidInput),
        };
        debug!("resolved {:?}", command);
        Ok(command)
    }

    // MR is numeric after classification but is still a valid lone command.
    fn standalone(&self, token: &Token) -> Result<Operator> {
        if token.is_numeric() && !op::is_memory_recall(&token.text) {
            return Err(Status::InvalidInput);
        }
        if !op::is_standalone(&token.text) {
            return Err(Status::InvalidInput);
        }
        self.operator(token)
    }

    fn binary(&self, token: &Token) -> Result<Operator> {
        if token.is_numeric() || op::is_standalone(&token.text) {
            return Err(Status::InvalidInput);
        }
        self.operator(token)
    }

    fn number(&self, token: &Token) -> Result<f64> {
        token.value.ok_or(Status::InvalidInput)
    }

    fn operator(&self, token: &Token) -> Result<Operator> {
        op::lookup(&token.text)
            .map(|d| d.operator)
            .ok_or(Status::InvalidInput)
    }
}
