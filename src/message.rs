use crate::{exec::Registers, lex::Truncation, status::Status};

pub const GREETING: &str = "Hello!
This is a console calculator.
Type help to see the list of commands.
Type exit to quit.";

pub const HELP: &str = "Commands come in three shapes.

1. Three tokens: \"operand1 operator operand2\"
   Operators: '+', '-', '*', '/', '^'.
   Operands are real numbers or MR (the value held in memory).

2. Two tokens: \"operator operand2\"
   Same as the three token form, with the previous result as operand1.

3. One token: \"command\"
   M+   add the last result to memory
   M-   subtract the last result from memory
   MR   recall memory into the result
   MC   clear memory
   help show this text
   exit quit the calculator

Input is case-insensitive. Lines are cut to 80 characters and 3 tokens.";

pub const INVALID_INPUT: &str = "Sorry, that command was not understood.
Please follow the command format. Type help to see it.";

pub const DIVISION_BY_ZERO: &str = "The second operand is zero.
Division by zero is not allowed, try another divisor.";

pub fn truncation_warning(truncation: &Truncation) -> String {
    format!("Input was too long and has been cut to: {}", truncation.line)
}

/// Text for a status. `Exit` has none.
pub fn render(status: Status, registers: &Registers) -> Option<String> {
    Some(match status {
        Status::Ok => format!("Result: {}", registers.result),
        Status::MemoryOp => format!("Memory: {}", registers.memory),
        Status::Help => HELP.to_string(),
        Status::InvalidInput => INVALID_INPUT.to_string(),
        Status::DivisionByZero => DIVISION_BY_ZERO.to_string(),
        Status::Exit => return None,
    })
}
