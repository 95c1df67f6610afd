#![no_main]

use libfuzzer_sys::fuzz_target;
use pvc::frontend::{lexer, parser};

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        // Tokenizing never fails; the parser may reject the sequence
        let tokens = lexer::lex(s);
        let _ = parser::parse(tokens);
    }
});
