use std::fmt::Display;

/// Every command the calculator understands. The discriminant doubles as
/// the operator's stable id and its index in [`CATALOG`].
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Operator {
    Add = 0,
    Subtract,
    Multiply,
    Divide,
    Power,
    MemoryAdd,
    MemorySubtract,
    MemoryRecall,
    MemoryClear,
    Help,
    Exit,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Descriptor {
    pub id: usize,
    pub name: &'static str,
    pub symbol: &'static str,
    /// Valid as a lone, zero-operand command.
    pub standalone: bool,
    pub operator: Operator,
}

const fn entry(
    operator: Operator,
    name: &'static str,
    symbol: &'static str,
    standalone: bool,
) -> Descriptor {
    Descriptor {
        id: operator as usize,
        name,
        symbol,
        standalone,
        operator,
    }
}

pub const CATALOG: [Descriptor; 11] = [
    entry(Operator::Add, "Add", "+", false),
    entry(Operator::Subtract, "Subtract", "-", false),
    entry(Operator::Multiply, "Multiply", "*", false),
    entry(Operator::Divide, "Divide", "/", false),
    entry(Operator::Power, "Power", "^", false),
    entry(Operator::MemoryAdd, "MemoryAdd", "M+", true),
    entry(Operator::MemorySubtract, "MemorySubtract", "M-", true),
    entry(Operator::MemoryRecall, "MemoryRecall", "MR", true),
    entry(Operator::MemoryClear, "MemoryClear", "MC", true),
    entry(Operator::Help, "Help", "HELP", true),
    entry(Operator::Exit, "Exit", "EXIT", true),
];

impl Operator {
    pub fn id(self) -> usize {
        self.descriptor().id
    }

    pub fn descriptor(self) -> &'static Descriptor {
        &CATALOG[self as usize]
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.descriptor().name)
    }
}

#[allow(dead_code)]
pub fn all() -> &'static [Descriptor] {
    &CATALOG
}

/// Case-insensitive exact match on the operator symbol.
pub fn lookup(symbol: &str) -> Option<&'static Descriptor> {
    CATALOG.iter().find(|d| d.symbol.eq_ignore_ascii_case(symbol))
}

#[allow(dead_code)]
pub fn by_id(id: usize) -> Option<&'static Descriptor> {
    CATALOG.get(id)
}

pub fn contains(symbol: &str) -> bool {
    lookup(symbol).is_some()
}

pub fn is_memory_recall(symbol: &str) -> bool {
    matches!(lookup(symbol), Some(d) if d.operator == Operator::MemoryRecall)
}

/// Unknown symbols are never standalone.
pub fn is_standalone(symbol: &str) -> bool {
    lookup(symbol).map_or(false, |d| d.standalone)
}
