use log::{debug, warn};

use crate::{op::Operator, status::Status};

/// Divisors closer to zero than this are rejected.
pub const DIVISION_EPSILON: f64 = 1e-10;

/// The calculator values that survive between commands.
#[derive(Debug, PartialEq, Clone, Copy, Default)]
pub struct Registers {
    pub memory: f64,
    pub result: f64,
}

type Operation = fn(Registers, f64, f64) -> (Registers, Status);

// Indexed by operator id.
const OPERATIONS: [Operation; 11] = [
    |r, a, b| (Registers { result: a + b, ..r }, Status::Ok),
    |r, a, b| (Registers { result: a - b, ..r }, Status::Ok),
    |r, a, b| (Registers { result: a * b, ..r }, Status::Ok),
    divide,
    |r, a, b| (Registers { result: a.powf(b), ..r }, Status::Ok),
    |r, _, _| {
        let memory = r.memory + r.result;
        (Registers { memory, ..r }, Status::MemoryOp)
    },
    |r, _, _| {
        let memory = r.memory - r.result;
        (Registers { memory, ..r }, Status::MemoryOp)
    },
    |r, _, _| (Registers { result: r.memory, ..r }, Status::Ok),
    |r, _, _| (Registers { memory: 0.0, ..r }, Status::MemoryOp),
    |r, _, _| (r, Status::Help),
    |r, _, _| (r, Status::Exit),
];

fn divide(r: Registers, a: f64, b: f64) -> (Registers, Status) {
    if b.abs() < DIVISION_EPSILON {
        return (r, Status::DivisionByZero);
    }
    (Registers { result: a / b, ..r }, Status::Ok)
}

/// Applies `operator` to the registers. Operands are ignored by the memory
/// and control operators.
pub fn execute(
    operator: Operator,
    registers: Registers,
    operand1: f64,
    operand2: f64,
) -> (Registers, Status) {
    let Some(operation) = OPERATIONS.get(operator.id()) else {
        warn!("no operation wired for {}", operator);
        return (registers, Status::InvalidInput);
    };
    let (registers, status) = operation(registers, operand1, operand2);
    debug!("{} -> {:?} {:?}", operator, status, registers);
    (registers, status)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::op;

    fn regs(memory: f64, result: f64) -> Registers {
        Registers { memory, result }
    }

    #[test]
    fn test_every_operator_is_wired() {
        assert_eq!(OPERATIONS.len(), op::all().len());
        for d in op::all() {
            let (_, status) = execute(d.operator, regs(1.0, 2.0), 3.0, 4.0);
            assert_ne!(status, Status::InvalidInput, "{}", d.operator);
        }
    }

    #[test]
    fn test_arithmetic() {
        let cases = [
            (1.0, 2.0, Operator::Add, 3.0),
            (1.0, 2.0, Operator::Subtract, -1.0),
            (4.0, 5.0, Operator::Multiply, 20.0),
            (4.0, 5.0, Operator::Divide, 0.8),
            (2.0, 10.0, Operator::Power, 1024.0),
            (1024.0, 0.5, Operator::Power, 32.0),
            (2.0, -1.0, Operator::Power, 0.5),
            (0.1, 0.2, Operator::Add, 0.1 + 0.2),
        ];
        for (a, b, operator, expected) in cases {
            let (r, status) = execute(operator, regs(7.0, 0.0), a, b);
            assert_eq!(status, Status::Ok);
            assert_eq!(r.result, expected);
            assert_eq!(r.memory, 7.0);
        }
    }

    #[test]
    fn test_power_follows_powf() {
        let (r, _) = execute(Operator::Power, regs(0.0, 0.0), -8.0, 1.0 / 3.0);
        assert!(r.result.is_nan());
        let (r, _) = execute(Operator::Power, regs(0.0, 0.0), 0.0, -1.0);
        assert_eq!(r.result, f64::INFINITY);
    }

    #[test]
    fn test_division_by_zero() {
        for b in [0.0, -0.0, 1e-11, -9e-11] {
            let (r, status) = execute(Operator::Divide, regs(1.0, 42.0), 5.0, b);
            assert_eq!(status, Status::DivisionByZero);
            assert_eq!(r, regs(1.0, 42.0));
        }
        let (r, status) = execute(Operator::Divide, regs(0.0, 0.0), 1.0, 1e-9);
        assert_eq!(status, Status::Ok);
        assert_eq!(r.result, 1.0 / 1e-9);
    }

    #[test]
    fn test_memory() {
        // (result, memory, operator, expected result, expected memory, status)
        let cases = [
            (1.0, 2.0, Operator::MemoryAdd, 1.0, 3.0, Status::MemoryOp),
            (1.0, 2.0, Operator::MemorySubtract, 1.0, 1.0, Status::MemoryOp),
            (4.0, 5.0, Operator::MemoryRecall, 5.0, 5.0, Status::Ok),
            (4.0, 5.0, Operator::MemoryClear, 4.0, 0.0, Status::MemoryOp),
        ];
        for (result, memory, operator, expected_result, expected_memory, expected) in cases {
            let (r, status) = execute(operator, regs(memory, result), 9.0, 9.0);
            assert_eq!(status, expected);
            assert_eq!(r, regs(expected_memory, expected_result));
        }
    }

    #[test]
    fn test_memory_clear_twice() {
        let (r, _) = execute(Operator::MemoryClear, regs(3.0, 1.0), 0.0, 0.0);
        assert_eq!(r.memory, 0.0);
        let (r, _) = execute(Operator::MemoryClear, r, 0.0, 0.0);
        assert_eq!(r.memory, 0.0);
    }

    #[test]
    fn test_help_and_exit() {
        let before = regs(3.0, 4.0);
        assert_eq!(execute(Operator::Help, before, 1.0, 2.0), (before, Status::Help));
        assert_eq!(execute(Operator::Exit, before, 1.0, 2.0), (before, Status::Exit));
    }
}
