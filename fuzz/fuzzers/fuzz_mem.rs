// Copyright 2015-2016 Mozilla Foundation. See the COPYRIGHT
// file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

#![no_main]
#[macro_use]
extern crate libfuzzer_sys;
extern crate textmem;

fn check_utf8(data: &[u8]) {
    if std::str::from_utf8(data).is_err() {
        panic!("Bogus UTF-8.");
    }
}

fn as_u16_slice(data: &[u8]) -> &[u16] {
    unsafe {
        let ptr = data.as_ptr();
        let len = data.len();
        if len < 2 {
            return std::slice::from_raw_parts(ptr as *const u16, 0);
        }
        let (adj_ptr, adj_len) = if ptr as usize & 1 == 0 {
            (ptr, len / 2)
        } else {
            (ptr.offset(1), (len - 1) / 2)
        };
        std::slice::from_raw_parts(adj_ptr as *const u16, adj_len)
    }
}

fuzz_target!(|data: &[u8]| {
    // Validator
    let up_to = textmem::utf8_valid_up_to(data);
    assert!(up_to <= data.len());
    check_utf8(&data[..up_to]);
    assert_eq!(textmem::is_utf8(data), up_to == data.len());

    // UTF-8 to UTF-16 with replacement against the standard library
    let mut utf16 = vec![0u16; data.len() + 1];
    let written = textmem::convert_utf8_to_utf16(data, &mut utf16);
    let expected: Vec<u16> = String::from_utf8_lossy(data).encode_utf16().collect();
    assert_eq!(&utf16[..written], &expected[..]);

    // UTF-16 to UTF-8, full and bounded
    let units = as_u16_slice(data);
    let mut utf8 = vec![0u8; units.len() * 3];
    let written = textmem::convert_utf16_to_utf8(units, &mut utf8);
    check_utf8(&utf8[..written]);

    let mut small = vec![0u8; data.len() % 17];
    let (read, written) = textmem::convert_utf16_to_utf8_partial(units, &mut small);
    assert!(read <= units.len());
    assert!(written <= small.len());
    check_utf8(&small[..written]);

    // Latin1 bridges
    let mut widened = vec![0u16; data.len()];
    textmem::convert_latin1_to_utf16(data, &mut widened);
    assert!(textmem::is_utf16_latin1(&widened));
    let mut latin1_utf8 = vec![0u8; data.len() * 2];
    let len = textmem::convert_latin1_to_utf8(data, &mut latin1_utf8);
    assert!(textmem::is_utf8_latin1(&latin1_utf8[..len]));
    assert_eq!(textmem::utf8_latin1_up_to(&latin1_utf8[..len]), len);
});
