#![no_main]

use std::io::BufReader;

use libfuzzer_sys::fuzz_target;
use lumen_std::io::{scan_line, scan_token, MAX_TOKEN_LEN};

fuzz_target!(|data: &[u8]| {
    let data = if data.len() > 64 * 1024 {
        &data[..64 * 1024]
    } else {
        data
    };

    // Small buffers exercise tokens that straddle refills.
    let mut input = BufReader::with_capacity(5, data);
    loop {
        let Ok(tok) = scan_token(&mut input, MAX_TOKEN_LEN) else {
            break;
        };
        assert!(tok.len() <= MAX_TOKEN_LEN);
        assert!(!tok.iter().any(|b| b.is_ascii_whitespace()));
        if tok.is_empty() {
            break;
        }
    }

    let mut input = BufReader::with_capacity(5, data);
    while let Ok(Some(line)) = scan_line(&mut input, MAX_TOKEN_LEN) {
        assert!(line.len() <= MAX_TOKEN_LEN);
        assert!(!line.contains(&b'\n'));
    }
});
