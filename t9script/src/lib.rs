pub mod error;
pub mod lexer;
pub mod parser;
pub mod compiler;
pub mod config;
pub mod replay;

pub use t9_core;

pub use error::{Result, ScriptError};
pub use config::{config_from_str, load_config};
pub use replay::{replay, ReplayStep, Transcript};

use std::fs::read_to_string;
use std::path::Path;

use t9_core::KeyMap;

use parser::ast::EventScript;

pub fn compile_layout(input: &str) -> Result<KeyMap> {
    let mut parser = parser::Parser::new(input);
    let ast = parser.parse_layout()?;

    let compiler = compiler::Compiler::new();
    compiler.compile(ast)
}

pub fn compile_layout_file(input_path: &Path) -> Result<KeyMap> {
    let input = read_to_string(input_path)?;
    compile_layout(&input)
}

pub fn parse_events(input: &str) -> Result<EventScript> {
    let mut parser = parser::Parser::new(input);
    parser.parse_events()
}

pub fn parse_events_file(input_path: &Path) -> Result<EventScript> {
    let input = read_to_string(input_path)?;
    parse_events(&input)
}
