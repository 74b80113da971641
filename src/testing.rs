// Copyright 2016 Mozilla Foundation. See the COPYRIGHT
// file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Helpers shared by the converter tests.

use std::vec::Vec;

use crate::utf_16::{convert_utf16_to_utf8, convert_utf16_to_utf8_partial, convert_utf8_to_utf16};
use crate::utf_8::is_utf8;

pub fn encode_utf8_from_utf16(src: &[u16], expect: &[u8]) {
    let mut dest: Vec<u8> = Vec::with_capacity(src.len() * 3);
    dest.resize(src.len() * 3, 0);
    let written = convert_utf16_to_utf8(src, &mut dest);
    assert_eq!(written, expect.len());
    dest.truncate(written);
    assert_eq!(&dest[..], expect);
}

/// Runs the bounded converter into a destination of `limit` bytes and checks
/// the progress pair, the bytes written and that the output is well-formed.
pub fn enc_lmt(src: &[u16], expect: &[u8], limit: usize, read: usize, written: usize) {
    let mut dest: Vec<u8> = Vec::with_capacity(limit);
    dest.resize(limit, 0);
    let (actual_read, actual_written) = convert_utf16_to_utf8_partial(src, &mut dest);
    assert!(actual_written <= limit);
    assert_eq!(actual_read, read);
    assert_eq!(actual_written, written);
    assert_eq!(&dest[..actual_written], expect);
    assert!(is_utf8(&dest[..actual_written]));
}

pub fn decode_utf16_from_utf8(bytes: &[u8], expect: &[u16]) {
    let mut dest: Vec<u16> = Vec::with_capacity(bytes.len() + 1);
    dest.resize(bytes.len() + 1, 0);
    let written = convert_utf8_to_utf16(bytes, &mut dest);
    assert_eq!(written, expect.len());
    dest.truncate(written);
    assert_eq!(&dest[..], expect);
}
