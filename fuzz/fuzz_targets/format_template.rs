//! Fuzz harness for the printf-style template engine.
//!
//! The engine must never panic, whatever the template looks like and
//! however badly it matches the argument list.

#![no_main]

use libfuzzer_sys::fuzz_target;
use textkit_fmt::{format, Arg};

fuzz_target!(|data: &[u8]| {
    let Ok(template) = std::str::from_utf8(data) else {
        return;
    };

    let args = [
        Arg::Int(-42),
        Arg::Uint(u64::MAX),
        Arg::Float(3.25),
        Arg::Char('x'),
        Arg::Str("sample"),
        Arg::Ptr(0xdead_beef),
    ];

    // full argument list, empty argument list, and deliberately short one
    let _ = format(template, &args);
    let _ = format(template, &[]);
    let _ = format(template, &args[..1]);
});
