use std::fmt;

/// Input mode of the keypad
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InputMode {
    #[default]
    Lower,
    Upper,
    Numeric,
}

impl InputMode {
    pub fn name(&self) -> &'static str {
        match self {
            InputMode::Lower => "lower",
            InputMode::Upper => "upper",
            InputMode::Numeric => "numeric",
        }
    }
}

impl fmt::Display for InputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
