#![no_main]

use libfuzzer_sys::fuzz_target;
use pvc::backend::{CodegenConfig, compile_program};
use pvc::frontend::parser;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(ast) = parser::parse_source(s) {
            let _ = compile_program(&ast, &CodegenConfig::default());
        }
    }
});
