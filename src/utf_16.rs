// Copyright 2015-2016 Mozilla Foundation. See the COPYRIGHT
// file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Converters between UTF-16 and UTF-8.

use core::cmp;

use crate::ascii::ascii_to_basic_latin;
use crate::handles::{CopyLatinResult, Utf16Source, Utf8Destination};
use crate::utf_8::{decode_code_point, Utf8Unit};

/// Converts potentially-invalid UTF-16 to valid UTF-8 as far as the
/// destination allows, replacing unpaired surrogates with the REPLACEMENT
/// CHARACTER.
///
/// Returns the number of code units read and the number of bytes written.
///
/// Neither read nor write ever exceeds its buffer, and the output is valid
/// UTF-8 in its entirety regardless of how the destination clips the input:
/// when the next code point needs more bytes than remain, no partial
/// sequence is written. Instead, the destination is topped off with a
/// replacement character whose encoded width exactly equals the remaining
/// space (U+FFFD for three bytes, U+00BF for two, `?` for one), the code
/// units of the code point that did not fit count as read, and the
/// conversion stops. A caller chunking a large source can therefore resume
/// at `src[read..]` with the next destination window. When zero bytes
/// remain, nothing is written and the pending code unit is not consumed.
pub fn convert_utf16_to_utf8_partial(src: &[u16], dst: &mut [u8]) -> (usize, usize) {
    let mut source = Utf16Source::new(src);
    let mut dest = Utf8Destination::new(dst);
    loop {
        match dest.copy_basic_latin_from(&mut source) {
            CopyLatinResult::Stop => break,
            CopyLatinResult::GoOn => {}
        }
        // A non-ASCII code unit is pending and at least one destination
        // byte remains.
        let code_point = u32::from(source.read());
        let remaining = dest.remaining();
        if code_point < 0x800 {
            if remaining < 2 {
                dest.write_replacement_fill();
                break;
            }
            dest.write_mid_bmp(code_point as u16);
        } else if code_point <= 0xFFFF {
            if remaining < 3 {
                dest.write_replacement_fill();
                break;
            }
            dest.write_upper_bmp(code_point as u16);
        } else {
            if remaining < 4 {
                dest.write_replacement_fill();
                break;
            }
            dest.write_astral(code_point);
        }
    }
    (source.consumed(), dest.written())
}

/// Converts potentially-invalid UTF-16 to valid UTF-8 with unpaired
/// surrogates replaced with the REPLACEMENT CHARACTER.
///
/// The length of the destination buffer must be at least the length of the
/// source buffer times three.
///
/// Returns the number of bytes written.
///
/// # Panics
///
/// Panics if the destination buffer is shorter than stated above.
#[inline]
pub fn convert_utf16_to_utf8(src: &[u16], dst: &mut [u8]) -> usize {
    assert!(
        dst.len() >= src.len() * 3,
        "Destination must not be shorter than the source times three."
    );
    let (read, written) = convert_utf16_to_utf8_partial(src, dst);
    debug_assert_eq!(read, src.len());
    written
}

/// Converts potentially-invalid UTF-8 to valid UTF-16 with malformed
/// sequences replaced with the REPLACEMENT CHARACTER.
///
/// Each maximal subpart of an ill-formed sequence (the longest prefix that
/// is a valid prefix of some well-formed sequence, or one byte when there is
/// no such prefix) is replaced with a single U+FFFD.
///
/// The length of the destination buffer must be greater than the length of
/// the source buffer.
///
/// Returns the number of code units written.
///
/// # Panics
///
/// Panics if the destination buffer is shorter than stated above.
pub fn convert_utf8_to_utf16(src: &[u8], dst: &mut [u16]) -> usize {
    assert!(
        dst.len() > src.len(),
        "Destination must be longer than the source."
    );
    let mut read = 0usize;
    let mut written = 0usize;
    'outer: loop {
        let mut byte = {
            let src_remaining = &src[read..];
            let dst_remaining = &mut dst[written..];
            let length = src_remaining.len();
            match unsafe {
                ascii_to_basic_latin(src_remaining.as_ptr(), dst_remaining.as_mut_ptr(), length)
            } {
                None => {
                    written += length;
                    return written;
                }
                Some((non_ascii, consumed)) => {
                    read += consumed;
                    written += consumed;
                    non_ascii
                }
            }
        };
        'inner: loop {
            // At this point `byte` is the non-ASCII lead at `src[read]`.
            if byte >= 0xC2 && byte < 0xF5 {
                let (trail_count, first_lower, first_upper, lead_bits) = if byte < 0xE0 {
                    (1usize, 0x80u8, 0xBFu8, u32::from(byte & 0x1F))
                } else if byte < 0xF0 {
                    (
                        2,
                        if byte == 0xE0 { 0xA0 } else { 0x80 },
                        if byte == 0xED { 0x9F } else { 0xBF },
                        u32::from(byte & 0xF),
                    )
                } else {
                    (
                        3,
                        if byte == 0xF0 { 0x90 } else { 0x80 },
                        if byte == 0xF4 { 0x8F } else { 0xBF },
                        u32::from(byte & 0x7),
                    )
                };
                let mut point = lead_bits;
                let mut lower = first_lower;
                let mut upper = first_upper;
                let mut seen = 0usize;
                let complete = loop {
                    if read + 1 + seen == src.len() {
                        // Truncated sequence at the end of the input.
                        break false;
                    }
                    let trail = src[read + 1 + seen];
                    if trail < lower || trail > upper {
                        break false;
                    }
                    lower = 0x80;
                    upper = 0xBF;
                    point = (point << 6) | u32::from(trail & 0x3F);
                    seen += 1;
                    if seen == trail_count {
                        break true;
                    }
                };
                if complete {
                    read += 1 + trail_count;
                    if point <= 0xFFFF {
                        dst[written] = point as u16;
                        written += 1;
                    } else {
                        dst[written] = (0xD7C0 + (point >> 10)) as u16;
                        dst[written + 1] = (0xDC00 + (point & 0x3FF)) as u16;
                        written += 2;
                    }
                } else {
                    // The lead and the valid trailing bytes seen so far form
                    // one maximal subpart; the offending byte is reprocessed.
                    read += 1 + seen;
                    dst[written] = 0xFFFD;
                    written += 1;
                }
            } else {
                // Lone continuation, C0, C1 or F5..FF.
                read += 1;
                dst[written] = 0xFFFD;
                written += 1;
            }
            if read == src.len() {
                return written;
            }
            byte = src[read];
            if byte < 0x80 {
                dst[written] = u16::from(byte);
                read += 1;
                written += 1;
                continue 'outer;
            }
            continue 'inner;
        }
    }
}

/// Converts UTF-8 to UTF-16 without replacement.
///
/// Returns the number of code units written or `None` if the source is not
/// valid UTF-8 in its entirety or does not fit the destination. Data may
/// have been written into the destination before the failure was found; a
/// `None` tells the caller to discard it.
pub fn convert_utf8_to_utf16_without_replacement(src: &[u8], dst: &mut [u16]) -> Option<usize> {
    let mut read = 0usize;
    let mut written = 0usize;
    loop {
        let byte = {
            let src_remaining = &src[read..];
            let dst_remaining = &mut dst[written..];
            let length = cmp::min(src_remaining.len(), dst_remaining.len());
            match unsafe {
                ascii_to_basic_latin(src_remaining.as_ptr(), dst_remaining.as_mut_ptr(), length)
            } {
                None => {
                    read += length;
                    written += length;
                    if read == src.len() {
                        return Some(written);
                    }
                    // Destination full with source remaining.
                    return None;
                }
                Some((non_ascii, consumed)) => {
                    read += consumed;
                    written += consumed;
                    non_ascii
                }
            }
        };
        let mut pos = read + 1;
        match decode_code_point(Utf8Unit::new(byte), &mut pos, src) {
            Err(_) => {
                return None;
            }
            Ok(c) => {
                let point = u32::from(c);
                if point <= 0xFFFF {
                    if written == dst.len() {
                        return None;
                    }
                    dst[written] = point as u16;
                    written += 1;
                } else {
                    if written + 1 >= dst.len() {
                        return None;
                    }
                    dst[written] = (0xD7C0 + (point >> 10)) as u16;
                    dst[written + 1] = (0xDC00 + (point & 0x3FF)) as u16;
                    written += 2;
                }
                read = pos;
            }
        }
        if read == src.len() {
            return Some(written);
        }
    }
}

/// Converts valid UTF-8 to UTF-16.
///
/// Returns the number of code units written.
///
/// # Safety
///
/// The source must be valid UTF-8 and the destination must not be shorter
/// than the source. Both preconditions are checked in debug builds only;
/// release builds rely on them.
pub unsafe fn convert_valid_utf8_to_utf16(src: &[u8], dst: &mut [u16]) -> usize {
    debug_assert!(dst.len() >= src.len());
    debug_assert_eq!(crate::utf_8::utf8_valid_up_to(src), src.len());
    let mut read = 0usize;
    let mut written = 0usize;
    'outer: loop {
        let mut byte = {
            let src_remaining = &src[read..];
            let dst_remaining = &mut dst[written..];
            let length = src_remaining.len();
            match ascii_to_basic_latin(src_remaining.as_ptr(), dst_remaining.as_mut_ptr(), length)
            {
                None => {
                    written += length;
                    return written;
                }
                Some((non_ascii, consumed)) => {
                    read += consumed;
                    written += consumed;
                    non_ascii
                }
            }
        };
        'inner: loop {
            // At this point, `byte` is not included in `read`.
            if byte < 0xE0 {
                if byte >= 0x80 {
                    // Two-byte
                    let second = src[read + 1];
                    let point = ((u32::from(byte) & 0x1F) << 6) | (u32::from(second) & 0x3F);
                    dst[written] = point as u16;
                    read += 2;
                    written += 1;
                } else {
                    // ASCII: write and go back to the bulk copy.
                    dst[written] = u16::from(byte);
                    read += 1;
                    written += 1;
                    continue 'outer;
                }
            } else if byte < 0xF0 {
                // Three-byte
                let second = src[read + 1];
                let third = src[read + 2];
                let point = ((u32::from(byte) & 0xF) << 12)
                    | ((u32::from(second) & 0x3F) << 6)
                    | (u32::from(third) & 0x3F);
                dst[written] = point as u16;
                read += 3;
                written += 1;
            } else {
                // Four-byte
                let second = src[read + 1];
                let third = src[read + 2];
                let fourth = src[read + 3];
                let point = ((u32::from(byte) & 0x7) << 18)
                    | ((u32::from(second) & 0x3F) << 12)
                    | ((u32::from(third) & 0x3F) << 6)
                    | (u32::from(fourth) & 0x3F);
                dst[written] = (0xD7C0 + (point >> 10)) as u16;
                dst[written + 1] = (0xDC00 + (point & 0x3FF)) as u16;
                read += 4;
                written += 2;
            }
            if read == src.len() {
                return written;
            }
            byte = src[read];
            continue 'inner;
        }
    }
}

/// Converts valid UTF-8 to UTF-16 with the validity precondition carried by
/// the type system.
///
/// The length of the destination buffer must be at least the length of the
/// source buffer.
///
/// Returns the number of code units written.
///
/// # Panics
///
/// Panics if the destination buffer is shorter than stated above.
#[inline]
pub fn convert_str_to_utf16(src: &str, dst: &mut [u16]) -> usize {
    assert!(
        dst.len() >= src.len(),
        "Destination must not be shorter than the source."
    );
    unsafe { convert_valid_utf8_to_utf16(src.as_bytes(), dst) }
}

// Any copyright to the test code below this comment is dedicated to the
// Public Domain. http://creativecommons.org/publicdomain/zero/1.0/
