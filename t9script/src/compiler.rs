//! Layout AST to key map

use t9_core::KeyMap;

use crate::error::Result;
use crate::parser::ast::LayoutFile;

pub struct Compiler;

impl Compiler {
    pub fn new() -> Self {
        Self
    }

    /// Build a validated key map. Keys without a `numeric` clause type their own digit.
    pub fn compile(&self, ast: LayoutFile) -> Result<KeyMap> {
        let mut builder = KeyMap::builder();

        for decl in &ast.keys {
            let numeric = decl.numeric.unwrap_or(char::from(b'0' + decl.key.0));
            builder.key(decl.key, &decl.lower, &decl.upper, numeric);
        }
        for decl in &ast.symbols {
            builder.long_press(decl.key, &decl.symbols);
        }

        Ok(builder.build()?)
    }
}

impl Default for Compiler {
    fn default() -> Self {
        Self::new()
    }
}
