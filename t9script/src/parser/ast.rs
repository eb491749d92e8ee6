use t9_core::{InputEvent, KeyId};

// AST nodes for layout scripts
#[derive(Debug, Default)]
pub struct LayoutFile {
    pub keys: Vec<KeyDecl>,
    pub symbols: Vec<SymbolDecl>,
}

/// `key <digit> lower "..." upper "..." [numeric "d"]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyDecl {
    pub key: KeyId,
    pub lower: String,
    pub upper: String,
    pub numeric: Option<char>,
    pub line: usize,
}

/// `symbols <digit> "..."`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolDecl {
    pub key: KeyId,
    pub symbols: String,
    pub line: usize,
}

// Event scripts resolve straight to engine events
#[derive(Debug, Default)]
pub struct EventScript {
    pub events: Vec<EventDecl>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDecl {
    pub event: InputEvent,
    pub line: usize,
}

impl LayoutFile {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EventScript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
