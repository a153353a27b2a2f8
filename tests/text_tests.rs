use record_marshal::{
    Error, Limits, RecordReader, RecordWriter, TextEncoding, bytes_to_hex, hex_to_bytes,
};

// ══════════════════════════════════════════════════════════════════════════
// C-strings
// ══════════════════════════════════════════════════════════════════════════

#[test]
fn test_read_cstring_stops_at_terminator() {
    let bytes = b"root\0tail";
    let mut reader = RecordReader::new(&bytes[..]);
    assert_eq!(reader.read_cstring().unwrap(), "root");
    assert_eq!(reader.position(), 5);
}

#[test]
fn test_read_consecutive_cstrings() {
    let bytes = b"a\0\0bc\0";
    let mut reader = RecordReader::new(&bytes[..]);
    assert_eq!(reader.read_cstring().unwrap(), "a");
    assert_eq!(reader.read_cstring().unwrap(), "");
    assert_eq!(reader.read_cstring().unwrap(), "bc");
    assert_eq!(reader.position(), 6);
}

#[test]
fn test_read_cstring_unterminated() {
    let bytes = b"no terminator";
    let mut reader = RecordReader::new(&bytes[..]);
    assert_eq!(reader.read_cstring().unwrap_err(), Error::UnterminatedString);
}

#[test]
fn test_read_cstring_invalid_utf8() {
    let bytes = [0x66, 0xFF, 0x6F, 0x00];
    let mut reader = RecordReader::new(&bytes[..]);
    assert!(matches!(
        reader.read_cstring(),
        Err(Error::InvalidEncoding { encoding: "UTF-8", .. })
    ));
}

#[test]
fn test_read_cstring_latin1() {
    let bytes = [0x63, 0x61, 0x66, 0xE9, 0x00];
    let mut reader = RecordReader::new(&bytes[..]);
    assert_eq!(
        reader.read_cstring_with(TextEncoding::Latin1).unwrap(),
        "café"
    );
}

#[test]
fn test_read_cstring_ascii_rejects_high_bytes() {
    let bytes = [0x63, 0xE9, 0x00];
    let mut reader = RecordReader::new(&bytes[..]);
    assert!(matches!(
        reader.read_cstring_with(TextEncoding::Ascii),
        Err(Error::InvalidEncoding { encoding: "ASCII", .. })
    ));
}

#[test]
fn test_read_cstring_length_limit() {
    let bytes = b"abcdef\0";
    let limits = Limits::default().with_max_cstring_len(4);
    let mut reader = RecordReader::with_limits(&bytes[..], limits);
    assert_eq!(
        reader.read_cstring().unwrap_err(),
        Error::LengthOverflow { max: 4, got: 5 }
    );

    let mut reader = RecordReader::with_limits(&b"abcd\0"[..], limits);
    assert_eq!(reader.read_cstring().unwrap(), "abcd");
}

#[test]
fn test_write_cstring_appends_terminator() {
    let mut writer = RecordWriter::new(Vec::new());
    writer.write_cstring("data.001").unwrap();
    assert_eq!(writer.position(), 9);
    assert_eq!(writer.into_inner(), b"data.001\0");
}

#[test]
fn test_write_cstring_utf8_multibyte() {
    let mut writer = RecordWriter::new(Vec::new());
    writer.write_cstring("ü").unwrap();
    assert_eq!(writer.into_inner(), [0xC3, 0xBC, 0x00]);
}

#[test]
fn test_write_cstring_latin1() {
    let mut writer = RecordWriter::new(Vec::new());
    writer
        .write_cstring_with("café", TextEncoding::Latin1)
        .unwrap();
    assert_eq!(writer.into_inner(), [0x63, 0x61, 0x66, 0xE9, 0x00]);
}

#[test]
fn test_write_cstring_unrepresentable() {
    let mut writer = RecordWriter::new(Vec::new());
    let result = writer.write_cstring_with("日本", TextEncoding::Latin1);
    assert!(matches!(result, Err(Error::InvalidEncoding { .. })));
    assert!(writer.into_inner().is_empty());
}

#[test]
fn test_write_cstring_rejects_interior_nul() {
    let mut writer = RecordWriter::new(Vec::new());
    let result = writer.write_cstring("a\0b");
    assert!(matches!(result, Err(Error::InvalidEncoding { .. })));
    assert_eq!(writer.position(), 0);
}

#[test]
fn test_cstring_roundtrip_each_encoding() {
    for (text, encoding) in [
        ("index", TextEncoding::Ascii),
        ("Ærøskøbing", TextEncoding::Latin1),
        ("表示名", TextEncoding::Utf8),
    ] {
        let mut writer = RecordWriter::new(Vec::new());
        writer.write_cstring_with(text, encoding).unwrap();
        let bytes = writer.into_inner();

        let mut reader = RecordReader::new(bytes.as_slice());
        assert_eq!(reader.read_cstring_with(encoding).unwrap(), text);
        assert_eq!(reader.position(), bytes.len() as u64);
    }
}

#[test]
fn test_default_encoding_is_utf8() {
    assert_eq!(TextEncoding::default(), TextEncoding::Utf8);
}

// ══════════════════════════════════════════════════════════════════════════
// Hex strings
// ══════════════════════════════════════════════════════════════════════════

#[test]
fn test_hex_with_spaces() {
    assert_eq!(hex_to_bytes("DE AD BE EF").unwrap(), [0xDE, 0xAD, 0xBE, 0xEF]);
}

#[test]
fn test_hex_without_spaces() {
    assert_eq!(hex_to_bytes("DEADBEEF").unwrap(), [0xDE, 0xAD, 0xBE, 0xEF]);
}

#[test]
fn test_hex_lower_case_and_irregular_spacing() {
    assert_eq!(hex_to_bytes(" de  ad b e ef ").unwrap(), [0xDE, 0xAD, 0xBE, 0xEF]);
}

#[test]
fn test_hex_empty() {
    assert!(hex_to_bytes("").unwrap().is_empty());
    assert!(hex_to_bytes("   ").unwrap().is_empty());
}

#[test]
fn test_hex_odd_length() {
    assert!(matches!(hex_to_bytes("ABC"), Err(Error::InvalidHex(_))));
}

#[test]
fn test_hex_invalid_digit() {
    assert!(matches!(hex_to_bytes("0G"), Err(Error::InvalidHex(_))));
    assert!(matches!(hex_to_bytes("0x12"), Err(Error::InvalidHex(_))));
}

#[test]
fn test_bytes_to_hex_upper_case() {
    assert_eq!(bytes_to_hex(&[0xDE, 0xAD, 0x0B, 0xEF]), "DEAD0BEF");
    assert_eq!(hex_to_bytes(&bytes_to_hex(&[1, 2, 254])).unwrap(), [1, 2, 254]);
}
