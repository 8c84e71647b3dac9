use std::ffi::{c_char, CStr};
use std::fmt;
use std::ptr::NonNull;

use crate::mem;

/// A NUL-terminated byte buffer with exactly one owner.
///
/// Every allocating primitive returns one of these. Dropping it releases the buffer;
/// [`OwnedStr::into_raw`] hands ownership to C code, which must release it with
/// `lumen_free` (or give it back through [`OwnedStr::from_raw`]). The library never
/// keeps a reference to a buffer it returned.
pub struct OwnedStr {
    ptr: NonNull<u8>,
    // Excludes the terminator.
    len: usize,
}

impl OwnedStr {
    /// Allocates `len + 1` bytes, lets `fill` write the first `len`, and terminates.
    pub(crate) fn with_len(len: usize, fill: impl FnOnce(&mut [u8])) -> Self {
        let Some(size) = len.checked_add(1) else {
            crate::fault::trap(crate::fault::Fault::OutOfMemory { size: len });
        };
        let ptr = mem::acquire_zeroed(size);
        unsafe {
            let body = std::slice::from_raw_parts_mut(ptr.as_ptr(), len);
            fill(body);
            *ptr.as_ptr().add(len) = 0;
        }
        OwnedStr { ptr, len }
    }

    /// Copies `bytes` into a fresh buffer.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self::with_len(bytes.len(), |dst| dst.copy_from_slice(bytes))
    }

    /// Concatenates `parts` into a fresh buffer.
    pub fn concat(parts: &[&[u8]]) -> Self {
        let len = parts.iter().map(|p| p.len()).sum();
        Self::with_len(len, |dst| {
            let mut off = 0;
            for p in parts {
                dst[off..off + p.len()].copy_from_slice(p);
                off += p.len();
            }
        })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Bytes without the terminator.
    pub fn as_bytes(&self) -> &[u8] {
        unsafe { std::slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    /// The buffer as a C string view. Stops at the first NUL, so a buffer holding
    /// interior NUL bytes reads shorter here than [`OwnedStr::len`].
    pub fn as_c_str(&self) -> &CStr {
        let with_nul = unsafe { std::slice::from_raw_parts(self.ptr.as_ptr(), self.len + 1) };
        match CStr::from_bytes_until_nul(with_nul) {
            Ok(s) => s,
            // Unreachable: the terminator is always written.
            Err(_) => c"",
        }
    }

    /// Transfers ownership to the caller.
    pub fn into_raw(self) -> *mut c_char {
        let p = self.ptr.as_ptr() as *mut c_char;
        std::mem::forget(self);
        p
    }

    /// Takes back ownership of a pointer produced by [`OwnedStr::into_raw`].
    ///
    /// # Safety
    /// `raw` must come from `into_raw` and must not be used or released afterwards
    /// except through the returned value.
    pub unsafe fn from_raw(raw: *mut c_char) -> Self {
        let len = CStr::from_ptr(raw).to_bytes().len();
        OwnedStr {
            ptr: NonNull::new_unchecked(raw as *mut u8),
            len,
        }
    }
}

impl Drop for OwnedStr {
    fn drop(&mut self) {
        unsafe { mem::release(self.ptr.as_ptr()) }
    }
}

impl AsRef<[u8]> for OwnedStr {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl PartialEq for OwnedStr {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for OwnedStr {}

impl PartialEq<[u8]> for OwnedStr {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_bytes() == other
    }
}

impl PartialEq<&[u8]> for OwnedStr {
    fn eq(&self, other: &&[u8]) -> bool {
        self.as_bytes() == *other
    }
}

impl PartialEq<&str> for OwnedStr {
    fn eq(&self, other: &&str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl fmt::Debug for OwnedStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OwnedStr({:?})", String::from_utf8_lossy(self.as_bytes()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_bytes_is_terminated() {
        let s = OwnedStr::from_bytes(b"lumen");
        assert_eq!(s.len(), 5);
        assert_eq!(s.as_c_str().to_bytes_with_nul(), b"lumen\0");
        assert_eq!(s, "lumen");
    }

    #[test]
    fn concat_joins_parts() {
        let s = OwnedStr::concat(&[b"foo".as_slice(), b"".as_slice(), b"bar".as_slice()]);
        assert_eq!(s, "foobar");
    }

    #[test]
    fn raw_roundtrip_preserves_contents() {
        let raw = OwnedStr::from_bytes(b"abc").into_raw();
        let back = unsafe { OwnedStr::from_raw(raw) };
        assert_eq!(back, "abc");
    }

    #[test]
    fn empty_buffer_is_valid_c_string() {
        let s = OwnedStr::from_bytes(b"");
        assert!(s.is_empty());
        assert_eq!(s.as_c_str(), c"");
    }
}
