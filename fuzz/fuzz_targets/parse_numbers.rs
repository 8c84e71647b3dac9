#![no_main]

use libfuzzer_sys::fuzz_target;
use lumen_std::io::{parse_float, parse_int};
use lumen_std::string::{int_to_string, str_to_int};

fuzz_target!(|data: &[u8]| {
    let data = if data.len() > 4096 { &data[..4096] } else { data };

    let n = parse_int(data);
    let _ = parse_float(data);

    let s = int_to_string(n);
    assert_eq!(str_to_int(s.as_c_str()), n);
});
