//! End-to-end decode/encode scenarios, including the exact chunk-seam cases
//! the codec exists for.

use rowcodec_core::{FieldValue, Record};
use rowcodec_csv::{Decoder, Encoder};

fn text(s: &str) -> FieldValue {
    FieldValue::Str(s.into())
}

/// Feed every chunk in order, then finish, collecting all batches into one
/// authoritative record sequence.
fn decode_all(chunks: &[&str]) -> (Vec<Record>, Vec<String>) {
    let mut decoder = Decoder::new();
    let mut records = Vec::new();
    for chunk in chunks {
        if let Some(batch) = decoder.feed(chunk).expect("feed") {
            records.extend(batch);
        }
    }
    if let Some(batch) = decoder.finish().expect("finish") {
        records.extend(batch);
    }
    let header = decoder
        .header()
        .map(|h| h.names().to_vec())
        .unwrap_or_default();
    (records, header)
}

#[test]
fn decode_then_encode_reproduces_input_bytes() {
    let mut data = String::from("h1,h2,h3");
    for i in 0..1000 {
        data.push_str(&format!("\nfoo{i},bar,baz"));
    }

    let (records, header) = decode_all(&[&data]);
    assert_eq!(records.len(), 1000);

    let mut encoder = Encoder::new(header).expect("encoder");
    let mut out = String::new();
    for record in &records {
        out.push_str(&encoder.feed_record(record));
    }
    encoder.finish();
    assert_eq!(out, data);
}

#[test]
fn roundtrip_survives_arbitrary_chunking() {
    let data = "a,b\n1,2\n3,4\n5,";
    let one_byte_chunks: Vec<String> = data.chars().map(String::from).collect();
    let chunk_refs: Vec<&str> = one_byte_chunks.iter().map(String::as_str).collect();

    let (records, header) = decode_all(&chunk_refs);
    let (whole_records, _) = decode_all(&[data]);
    assert_eq!(records, whole_records);

    let mut encoder = Encoder::new(header).expect("encoder");
    let out = encoder.feed(&records);
    assert_eq!(out, data);
}

#[test]
fn roundtrip_preserves_empty_fields() {
    let data = "a,b,c\n1,,3";
    let (records, header) = decode_all(&[data]);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].get("a"), Some(&text("1")));
    assert_eq!(records[0].get("b"), Some(&text("")));
    assert_eq!(records[0].get("c"), Some(&text("3")));

    let mut encoder = Encoder::new(header).expect("encoder");
    assert_eq!(encoder.feed(&records), data);
}

#[test]
fn row_split_mid_field_yields_one_record() {
    // "1" with no terminator stays buffered until ",2" arrives; only finish
    // releases the reassembled row.
    let (records, _) = decode_all(&["foo,bar\n", "1", ",2"]);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].get("foo"), Some(&text("1")));
    assert_eq!(records[0].get("bar"), Some(&text("2")));
}

#[test]
fn batches_concatenate_in_row_order() {
    let (records, _) = decode_all(&["k\n", "1\n2\n", "3\n", "4"]);
    let values: Vec<_> = records
        .iter()
        .map(|r| r.get("k").and_then(FieldValue::as_str).unwrap().to_string())
        .collect();
    assert_eq!(values, vec!["1", "2", "3", "4"]);
}

#[test]
fn fixed_size_chunks_of_larger_data() {
    let mut data = String::from("h1,h2,h3,h4,h5,h6,h7");
    for _ in 0..10_000 {
        data.push_str("\nfoo,bar,baz,qwerty,asdf,1234567890,aaaaaaaabbbbbbbbcccccccc");
    }

    let chunk_size = 16 * 1024;
    let chunks: Vec<&str> = data
        .as_bytes()
        .chunks(chunk_size)
        .map(|c| std::str::from_utf8(c).expect("ascii input"))
        .collect();

    let (records, _) = decode_all(&chunks);
    assert_eq!(records.len(), 10_000);
    assert_eq!(records[9_999].get("h1"), Some(&text("foo")));
}

#[test]
fn decoded_batch_survives_serde_roundtrip() {
    // Batches cross process boundaries as JSON; absent fields must come
    // back as absent, not as empty strings, or re-encoding would lie.
    let (records, header) = decode_all(&["a,b,c\n1,,3\n4"]);
    let json = serde_json::to_string(&records).expect("serialize");
    let back: Vec<Record> = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, records);
    assert_eq!(back[1].get("b"), Some(&FieldValue::Absent));

    let mut encoder = Encoder::new(header).expect("encoder");
    assert_eq!(encoder.feed(&back), "a,b,c\n1,,3\n4,,");
}

#[test]
fn encoder_fields_independent_of_decoder_header() {
    // Encoding with a wider field list than the records carry pads with
    // empty columns; the decoder's inferred header plays no part.
    let (records, _) = decode_all(&["id,v\nfoo,1"]);
    let mut encoder = Encoder::new(["id", "v", "foo"]).expect("encoder");
    assert_eq!(encoder.feed(&records), "id,v,foo\nfoo,1,");
}
