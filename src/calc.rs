use crate::{
    exec::{self, Registers},
    lex::{self, Truncation},
    message,
    op::Operator,
    parse::{Command, Parser},
    status::{Result, Status},
};

#[derive(Debug, PartialEq, Clone)]
pub struct Outcome {
    pub status: Status,
    pub truncation: Option<Truncation>,
    /// Rendered message for `status`; `None` means the session should end.
    pub output: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Calculator {
    pub registers: Registers,
    pub operand1: f64,
    pub operand2: f64,
    pub operator: Operator,
}

impl Calculator {
    pub fn new() -> Self {
        Calculator::with_state(0.0, 0.0)
    }

    pub fn with_state(memory: f64, result: f64) -> Self {
        Calculator {
            registers: Registers { memory, result },
            operand1: 0.0,
            operand2: 0.0,
            operator: Operator::Add,
        }
    }

    pub fn memory(&self) -> f64 {
        self.registers.memory
    }

    pub fn result(&self) -> f64 {
        self.registers.result
    }

    /// Tokenizes, resolves and executes one input line.
    pub fn process_line(&mut self, line: &str) -> Outcome {
        let tokens = lex::normalize(line);
        let status = match self.parse(&tokens.words) {
            Ok(()) => self.execute(),
            Err(status) => status,
        };
        Outcome {
            status,
            truncation: tokens.truncation,
            output: message::render(status, &self.registers),
        }
    }

    /// Loads operands and operator from already normalized words. On
    /// failure the calculator is left untouched.
    pub fn parse(&mut self, words: &[String]) -> Result<()> {
        let tokens = lex::classify(words, self.memory())?;
        match Parser::new(&tokens).parse(self.result())? {
            Command::Standalone(operator) => self.operator = operator,
            Command::Binary {
                operand1,
                operand2,
                operator,
            } => {
                self.operand1 = operand1;
                self.operand2 = operand2;
                self.operator = operator;
            }
        }
        Ok(())
    }

    pub fn execute(&mut self) -> Status {
        let (registers, status) =
            exec::execute(self.operator, self.registers, self.operand1, self.operand2);
        self.registers = registers;
        status
    }
}
