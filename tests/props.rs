// Copyright 2016 Mozilla Foundation. See the COPYRIGHT
// file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Property tests pitting the converters against the standard library and
//! against their own progress contracts.

use quickcheck::QuickCheck;
use textmem::*;

#[test]
fn valid_utf8_always_validates() {
    fn prop(s: String) -> bool {
        is_utf8(s.as_bytes()) && utf8_valid_up_to(s.as_bytes()) == s.len()
    }
    QuickCheck::new()
        .tests(1000)
        .quickcheck(prop as fn(String) -> bool);
}

#[test]
fn valid_up_to_agrees_with_std() {
    fn prop(data: Vec<u8>) -> bool {
        let up_to = utf8_valid_up_to(&data);
        if up_to > data.len() {
            return false;
        }
        match std::str::from_utf8(&data) {
            Ok(_) => up_to == data.len(),
            Err(e) => up_to == e.valid_up_to(),
        }
    }
    QuickCheck::new()
        .tests(1000)
        .quickcheck(prop as fn(Vec<u8>) -> bool);
}

#[test]
fn concatenation_preserves_validity() {
    fn prop(data: Vec<u8>) -> bool {
        let mut doubled = data.clone();
        doubled.extend_from_slice(&data);
        is_utf8(&doubled) == is_utf8(&data)
    }
    QuickCheck::new()
        .tests(1000)
        .quickcheck(prop as fn(Vec<u8>) -> bool);
}

#[test]
fn utf16_to_utf8_output_is_always_well_formed() {
    fn prop(units: Vec<u16>) -> bool {
        let mut dst = vec![0u8; units.len() * 3];
        let written = convert_utf16_to_utf8(&units, &mut dst);
        is_utf8(&dst[..written])
    }
    QuickCheck::new()
        .tests(1000)
        .quickcheck(prop as fn(Vec<u16>) -> bool);
}

#[test]
fn bounded_utf16_to_utf8_stays_in_bounds_and_well_formed() {
    fn prop(units: Vec<u16>, limit: u8) -> bool {
        let mut dst = vec![0u8; usize::from(limit)];
        let (read, written) = convert_utf16_to_utf8_partial(&units, &mut dst);
        read <= units.len() && written <= dst.len() && is_utf8(&dst[..written])
    }
    QuickCheck::new()
        .tests(1000)
        .quickcheck(prop as fn(Vec<u16>, u8) -> bool);
}

#[test]
fn chunked_utf16_to_utf8_terminates_and_stays_well_formed() {
    fn prop(units: Vec<u16>, window: u8) -> bool {
        let window = usize::from(window % 13) + 1;
        let mut out = Vec::new();
        let mut pos = 0;
        while pos < units.len() {
            let mut buf = vec![0u8; window];
            let (read, written) = convert_utf16_to_utf8_partial(&units[pos..], &mut buf);
            if read == 0 {
                // A one-byte window cannot regress.
                return false;
            }
            out.extend_from_slice(&buf[..written]);
            pos += read;
        }
        is_utf8(&out)
    }
    QuickCheck::new()
        .tests(500)
        .quickcheck(prop as fn(Vec<u16>, u8) -> bool);
}

#[test]
fn utf8_to_utf16_replacement_agrees_with_std_lossy() {
    fn prop(data: Vec<u8>) -> bool {
        let mut dst = vec![0u16; data.len() + 1];
        let written = convert_utf8_to_utf16(&data, &mut dst);
        let expected: Vec<u16> = String::from_utf8_lossy(&data).encode_utf16().collect();
        dst[..written] == expected[..]
    }
    QuickCheck::new()
        .tests(1000)
        .quickcheck(prop as fn(Vec<u8>) -> bool);
}

#[test]
fn without_replacement_agrees_with_validity() {
    fn prop(data: Vec<u8>) -> bool {
        let mut dst = vec![0u16; data.len() + 1];
        match convert_utf8_to_utf16_without_replacement(&data, &mut dst) {
            Some(written) => match std::str::from_utf8(&data) {
                Ok(s) => {
                    let expected: Vec<u16> = s.encode_utf16().collect();
                    dst[..written] == expected[..]
                }
                Err(_) => false,
            },
            None => std::str::from_utf8(&data).is_err(),
        }
    }
    QuickCheck::new()
        .tests(1000)
        .quickcheck(prop as fn(Vec<u8>) -> bool);
}

#[test]
fn utf16_round_trips_for_valid_text() {
    fn prop(s: String) -> bool {
        let mut units = vec![0u16; s.len()];
        let unit_count = convert_str_to_utf16(&s, &mut units);
        let std_units: Vec<u16> = s.encode_utf16().collect();
        if units[..unit_count] != std_units[..] {
            return false;
        }
        let mut bytes = vec![0u8; unit_count * 3];
        let written = convert_utf16_to_utf8(&units[..unit_count], &mut bytes);
        bytes[..written] == *s.as_bytes()
    }
    QuickCheck::new()
        .tests(1000)
        .quickcheck(prop as fn(String) -> bool);
}

#[test]
fn latin1_round_trips_through_utf8() {
    fn prop(bytes: Vec<u8>) -> bool {
        let mut utf8 = vec![0u8; bytes.len() * 2];
        let len = convert_latin1_to_utf8(&bytes, &mut utf8);
        if !is_utf8_latin1(&utf8[..len]) {
            return false;
        }
        let mut back = vec![0u8; len];
        let back_len = lossy_convert_utf8_to_latin1(&utf8[..len], &mut back);
        back_len == bytes.len() && back[..back_len] == bytes[..]
    }
    QuickCheck::new()
        .tests(1000)
        .quickcheck(prop as fn(Vec<u8>) -> bool);
}

#[test]
fn latin1_round_trips_through_utf16() {
    fn prop(bytes: Vec<u8>) -> bool {
        let mut units = vec![0u16; bytes.len()];
        convert_latin1_to_utf16(&bytes, &mut units);
        if !is_utf16_latin1(&units) {
            return false;
        }
        let mut back = vec![0u8; bytes.len()];
        lossy_convert_utf16_to_latin1(&units, &mut back);
        back == bytes
    }
    QuickCheck::new()
        .tests(1000)
        .quickcheck(prop as fn(Vec<u8>) -> bool);
}
