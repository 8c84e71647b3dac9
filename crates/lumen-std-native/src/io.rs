//! Console I/O.
//!
//! Output is synchronous and ordered: each call writes through a locked stdout
//! handle before returning. Input is whitespace-delimited tokens (or lines) pulled
//! from the shared stdin buffer, so consecutive reads continue where the last one
//! stopped. None of these report errors; a failed write is logged and dropped, and
//! EOF reads as an empty token.

use std::ffi::CStr;
use std::io::{self, BufRead, Write};

use lumen_contracts::READ_STRING_CAP;

use crate::buf::OwnedStr;
use crate::runtime;

/// Longest token or line kept by the string readers, excluding the terminator.
pub const MAX_TOKEN_LEN: usize = READ_STRING_CAP - 1;

// Numeric tokens longer than this cannot be meaningful; the rest is discarded.
const MAX_NUMERIC_TOKEN_LEN: usize = 512;

pub fn write_text<W: Write>(out: &mut W, text: &[u8], newline: bool) -> io::Result<()> {
    out.write_all(text)?;
    if newline {
        out.write_all(b"\n")?;
    }
    Ok(())
}

fn emit_to<W: Write>(out: &mut W, text: &[u8], newline: bool, autoflush: bool) {
    let mut res = write_text(out, text, newline);
    if res.is_ok() && autoflush {
        res = out.flush();
    }
    if let Err(err) = res {
        tracing::warn!(%err, "stdout write failed");
    }
}

fn emit(text: &[u8], newline: bool) {
    let autoflush = runtime::init().autoflush();
    emit_to(&mut io::stdout().lock(), text, newline, autoflush);
}

pub fn print(text: &CStr) {
    emit(text.to_bytes(), false);
}

pub fn println(text: &CStr) {
    emit(text.to_bytes(), true);
}

pub fn print_int(x: i32) {
    let mut buf = itoa::Buffer::new();
    emit(buf.format(x).as_bytes(), false);
}

pub fn print_float(x: f64) {
    let s = crate::string::float_to_string(x);
    emit(s.as_bytes(), false);
}

pub fn flush() {
    if let Err(err) = io::stdout().lock().flush() {
        tracing::warn!(%err, "stdout flush failed");
    }
}

/// Skips leading ASCII whitespace and returns the next token. At most `cap` bytes
/// are kept; the remainder of a longer token is consumed and dropped. Returns an
/// empty token at EOF.
pub fn scan_token<R: BufRead>(input: &mut R, cap: usize) -> io::Result<Vec<u8>> {
    let mut out = Vec::new();
    let mut started = false;
    loop {
        let (consume_n, done) = {
            let buf = input.fill_buf()?;
            if buf.is_empty() {
                break;
            }
            let mut i = 0;
            if !started {
                while i < buf.len() && buf[i].is_ascii_whitespace() {
                    i += 1;
                }
                if i < buf.len() {
                    started = true;
                }
            }
            let start = i;
            while i < buf.len() && !buf[i].is_ascii_whitespace() {
                i += 1;
            }
            let room = cap.saturating_sub(out.len());
            out.extend_from_slice(&buf[start..start + (i - start).min(room)]);
            // The delimiter stays in the stream for the next read.
            (i, started && i < buf.len())
        };
        input.consume(consume_n);
        if done {
            break;
        }
    }
    Ok(out)
}

/// Reads one line without its `\n` or `\r\n`. At most `cap` bytes are kept; the
/// rest of a longer line is consumed and dropped. Returns `None` at EOF.
pub fn scan_line<R: BufRead>(input: &mut R, cap: usize) -> io::Result<Option<Vec<u8>>> {
    let mut out = Vec::new();
    let mut saw_any = false;
    loop {
        let (consume_n, saw_newline) = {
            let buf = input.fill_buf()?;
            if buf.is_empty() {
                break;
            }
            saw_any = true;
            let (body, consume_n, saw_newline) = match buf.iter().position(|&b| b == b'\n') {
                Some(pos) => (&buf[..pos], pos + 1, true),
                None => (buf, buf.len(), false),
            };
            let room = cap.saturating_sub(out.len());
            out.extend_from_slice(&body[..body.len().min(room)]);
            (consume_n, saw_newline)
        };
        input.consume(consume_n);
        if saw_newline {
            break;
        }
    }
    if !saw_any {
        return Ok(None);
    }
    if out.last() == Some(&b'\r') {
        out.pop();
    }
    Ok(Some(out))
}

/// Longest integer prefix of `token`; 0 if there is none or it overflows.
pub fn parse_int(token: &[u8]) -> i32 {
    match lexical_core::parse_partial::<i32>(token) {
        Ok((value, _)) => value,
        Err(_) => 0,
    }
}

/// Longest float prefix of `token`; 0.0 if there is none.
pub fn parse_float(token: &[u8]) -> f64 {
    match lexical_core::parse_partial::<f64>(token) {
        Ok((value, _)) => value,
        Err(_) => 0.0,
    }
}

// Prompts written with `print` must be visible before the process blocks.
fn read_stdin_token(cap: usize) -> Vec<u8> {
    flush();
    let mut stdin = io::stdin().lock();
    scan_token(&mut stdin, cap).unwrap_or_else(|err| {
        tracing::warn!(%err, "stdin read failed");
        Vec::new()
    })
}

pub fn read_int() -> i32 {
    parse_int(&read_stdin_token(MAX_NUMERIC_TOKEN_LEN))
}

pub fn read_float() -> f64 {
    parse_float(&read_stdin_token(MAX_NUMERIC_TOKEN_LEN))
}

/// Next whitespace-delimited token, truncated to [`MAX_TOKEN_LEN`] bytes. The caller
/// owns the returned buffer.
pub fn read_string() -> OwnedStr {
    OwnedStr::from_bytes(&read_stdin_token(MAX_TOKEN_LEN))
}

/// Next line, truncated to [`MAX_TOKEN_LEN`] bytes; empty at EOF. The caller owns the
/// returned buffer.
pub fn read_line() -> OwnedStr {
    flush();
    let mut stdin = io::stdin().lock();
    let line = match scan_line(&mut stdin, MAX_TOKEN_LEN) {
        Ok(line) => line.unwrap_or_default(),
        Err(err) => {
            tracing::warn!(%err, "stdin read failed");
            Vec::new()
        }
    };
    OwnedStr::from_bytes(&line)
}
