/// Outcome of parsing or executing one line.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Status {
    Ok,
    /// Succeeded, and touched the memory register instead of the result.
    MemoryOp,
    Help,
    InvalidInput,
    DivisionByZero,
    Exit,
}

pub type Result<T> = std::result::Result<T, Status>;

impl Status {
    pub fn is_error(self) -> bool {
        matches!(self, Status::InvalidInput | Status::DivisionByZero)
    }
}
