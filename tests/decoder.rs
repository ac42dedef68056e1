use std::io::{self, ErrorKind, Read};

use ota_dict::{ByteBlockSource, OtaError, Utf8Decoder};
use proptest::prelude::*;

/// Hands out one byte per read and starts with an interrupted read.
struct Trickle {
    data: Vec<u8>,
    pos: usize,
    interrupted: bool,
}

impl Trickle {
    fn new(data: &[u8]) -> Self {
        Self {
            data: data.to_vec(),
            pos: 0,
            interrupted: false,
        }
    }
}

impl Read for Trickle {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if !self.interrupted {
            self.interrupted = true;
            return Err(io::Error::new(ErrorKind::Interrupted, "try again"));
        }
        if self.pos >= self.data.len() || buf.is_empty() {
            return Ok(0);
        }
        buf[0] = self.data[self.pos];
        self.pos += 1;
        Ok(1)
    }
}

struct Broken;

impl Read for Broken {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(ErrorKind::PermissionDenied, "no access"))
    }
}

fn decode_all(bytes: &[u8]) -> ota_dict::Result<String> {
    let mut decoder = Utf8Decoder::new(bytes);
    let mut out = String::new();
    while let Some(c) = decoder.next_char()? {
        out.push(c);
    }
    Ok(out)
}

#[test]
fn source_refills_in_blocks_of_256() {
    let data: Vec<u8> = (0..600u32).map(|i| (i % 251) as u8).collect();
    let mut source = ByteBlockSource::new(data.as_slice());

    assert_eq!(source.refill().expect("refill"), 256);
    let mut seen = Vec::new();
    while let Some(byte) = source.next_byte().expect("byte") {
        seen.push(byte);
    }
    assert_eq!(seen, data);
    assert_eq!(source.offset(), 600);
    assert!(source.is_exhausted());
}

#[test]
fn source_stays_at_end_of_stream() {
    let mut source = ByteBlockSource::new(&b"a"[..]);
    assert_eq!(source.next_byte().unwrap(), Some(b'a'));
    for _ in 0..5 {
        assert_eq!(source.next_byte().unwrap(), None);
    }
    assert_eq!(source.refill().unwrap(), 0);
}

#[test]
fn source_retries_interrupted_reads() {
    let mut source = ByteBlockSource::new(Trickle::new(b"xyz"));
    let mut seen = Vec::new();
    while let Some(byte) = source.next_byte().expect("byte") {
        seen.push(byte);
    }
    assert_eq!(seen, b"xyz");
}

#[test]
fn source_propagates_read_errors() {
    let mut source = ByteBlockSource::new(Broken);
    match source.next_byte() {
        Err(OtaError::Io(e)) => assert_eq!(e.kind(), ErrorKind::PermissionDenied),
        other => panic!("expected I/O error, got {:?}", other),
    }
}

#[test]
fn decodes_ascii_and_multibyte_characters() {
    let text = "cat кот 猫 🐈";
    assert_eq!(decode_all(text.as_bytes()).unwrap(), text);
}

#[test]
fn decodes_characters_split_across_blocks() {
    let mut text = "a".repeat(255);
    text.push('é');
    text.push_str(&"b".repeat(254));
    text.push('😀');
    assert_eq!(decode_all(text.as_bytes()).unwrap(), text);
}

#[test]
fn decodes_from_a_one_byte_reader() {
    let text = "naïve – ok";
    let mut decoder = Utf8Decoder::new(Trickle::new(text.as_bytes()));
    let mut out = String::new();
    while let Some(c) = decoder.next_char().unwrap() {
        out.push(c);
    }
    assert_eq!(out, text);
}

#[test]
fn truncated_sequence_is_an_error_not_a_character() {
    let mut bytes = b"ok".to_vec();
    bytes.extend_from_slice(&"猫".as_bytes()[..2]);
    let mut decoder = Utf8Decoder::new(bytes.as_slice());
    assert_eq!(decoder.next_char().unwrap(), Some('o'));
    assert_eq!(decoder.next_char().unwrap(), Some('k'));
    match decoder.next_char() {
        Err(OtaError::TruncatedUtf8 { offset }) => assert_eq!(offset, 2),
        other => panic!("expected truncation error, got {:?}", other),
    }
}

#[test]
fn rejects_malformed_sequences() {
    let cases: &[(&[u8], &str)] = &[
        (&[0x80], "unexpected continuation byte"),
        (&[0xF8, 0x80, 0x80, 0x80], "invalid lead byte"),
        (&[0xC3, 0x41], "expected continuation byte"),
        (&[0xC0, 0xAF], "overlong encoding"),
        (&[0xE0, 0x80, 0xAF], "overlong encoding"),
        (&[0xED, 0xA0, 0x80], "surrogate or out-of-range code point"),
        (&[0xF4, 0x90, 0x80, 0x80], "surrogate or out-of-range code point"),
    ];
    for (bytes, expected) in cases {
        match decode_all(bytes) {
            Err(OtaError::InvalidUtf8 { reason, .. }) => {
                assert_eq!(reason, *expected, "wrong reason for {:02x?}", bytes)
            }
            other => panic!("expected invalid UTF-8 for {:02x?}, got {:?}", bytes, other),
        }
    }
}

#[test]
fn invalid_continuation_reports_its_offset() {
    match decode_all(b"abc\xE2\x82x") {
        Err(OtaError::InvalidUtf8 { offset, .. }) => assert_eq!(offset, 5),
        other => panic!("expected invalid UTF-8, got {:?}", other),
    }
}

proptest! {
    #[test]
    fn decoded_characters_reencode_to_the_input(text in any::<String>()) {
        let mut decoder = Utf8Decoder::new(text.as_bytes());
        let mut reencoded = Vec::new();
        let mut buf = [0u8; 4];
        while let Some(c) = decoder.next_char().unwrap() {
            reencoded.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
        }
        prop_assert_eq!(reencoded, text.as_bytes().to_vec());
    }

    #[test]
    fn agrees_with_encoding_rs_on_arbitrary_bytes(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
        let reference = encoding_rs::UTF_8
            .decode_without_bom_handling_and_without_replacement(&bytes)
            .map(|text| text.into_owned());
        let ours = decode_all(&bytes).ok();
        prop_assert_eq!(ours, reference);
    }
}
