use dns_query_parser::{DnsMessage, Error, RESPONSE_NOT_SUPPORTED, UNKNOWN};
use std::convert::TryFrom;
use test_log::test;

const QUERY_HEADER: [u8; 12] = [
    0x00, 0x01, 0x01, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

fn header(flags: [u8; 2], qdcount: u16) -> Vec<u8> {
    let mut data = vec![0xAB, 0xCD, flags[0], flags[1]];
    data.extend_from_slice(&qdcount.to_be_bytes());
    data.extend_from_slice(&[0; 6]);
    data
}

fn question(name: &str, qtype: u16, qclass: u16) -> Vec<u8> {
    let mut data = Vec::new();
    for label in name.split('.').filter(|l| !l.is_empty()) {
        data.push(label.len() as u8);
        data.extend_from_slice(label.as_bytes());
    }
    data.push(0);
    data.extend_from_slice(&qtype.to_be_bytes());
    data.extend_from_slice(&qclass.to_be_bytes());
    data
}

/// This test covers the whole path:
/// header, flags, one question, mnemonics and rendering.
#[test]
fn decode_example_com() {
    let mut packet = QUERY_HEADER.to_vec();
    packet.extend(question("example.com", 1, 1));

    let msg = DnsMessage::parse(&packet).expect("valid query");
    assert_eq!(msg.id(), 1);
    assert!(msg.is_query());

    let flags = msg.header().flags();
    assert_eq!(flags.opcode(), 0);
    assert_eq!(flags.rd(), 1);
    assert_eq!(flags.aa(), 0);
    assert_eq!(flags.tc(), 0);
    assert_eq!(flags.ra(), 0);
    assert_eq!(flags.rcode(), 0);

    assert_eq!(msg.questions().len(), 1);
    let q = &msg.questions()[0];
    assert_eq!(q.name(), "example.com");
    assert_eq!(q.type_str(), "A");
    assert_eq!(q.class_str(), "IN");

    assert_eq!(msg.to_string(), "QUERY:\texample.com\tA\tIN");
}

#[test]
fn decode_multiple_questions() {
    // opcode 5 (UPDATE)
    let mut packet = header([0x28, 0x00], 3);
    packet.extend(question("example.com", 15, 1));
    packet.extend(question("", 2, 255));
    packet.extend(question("a.b.c", 999, 3));

    let msg = DnsMessage::try_from(&packet[..]).expect("valid query");
    assert_eq!(msg.questions().len(), 3);
    assert_eq!(
        msg.to_string(),
        format!(
            "UPDATE:\texample.com\tMX\tIN\nUPDATE:\t\tNS\tANY\nUPDATE:\ta.b.c\t{}\t{}",
            UNKNOWN, UNKNOWN
        )
    );
}

#[test]
fn unknown_opcode_renders_fallback() {
    // opcode 6
    let mut packet = header([0x30, 0x00], 1);
    packet.extend(question("example.org", 255, 1));

    let msg = DnsMessage::parse(&packet).unwrap();
    assert_eq!(msg.header().flags().opcode(), 6);
    assert_eq!(
        msg.to_string(),
        format!("{}:\texample.org\t*\tIN", UNKNOWN)
    );
}

#[test]
fn zero_questions_render_empty() {
    let packet = header([0x00, 0x00], 0);
    let msg = DnsMessage::parse(&packet).unwrap();
    assert!(msg.questions().is_empty());
    assert_eq!(msg.to_string(), "");
}

#[test]
fn response_always_renders_sentinel() {
    for qdcount in 0..3 {
        let mut packet = header([0x84, 0x03], qdcount);
        for _ in 0..qdcount {
            packet.extend(question("example.com", 1, 1));
        }
        let msg = DnsMessage::parse(&packet).unwrap();
        assert!(msg.is_response());
        assert_eq!(msg.header().flags().rcode_str(), "Name Error");
        assert_eq!(msg.questions().len(), qdcount as usize);
        assert_eq!(msg.to_string(), RESPONSE_NOT_SUPPORTED);
    }
}

#[test]
fn other_sections_are_ignored() {
    // ANCOUNT 1, ARCOUNT 2, with junk after the question.
    let mut packet = vec![0x00, 0x07, 0x01, 0x00, 0x00, 0x01, 0x00, 0x01, 0x00, 0x00, 0x00, 0x02];
    packet.extend(question("example.com", 1, 1));
    packet.extend_from_slice(&[0xC0, 0x0C, 0xDE, 0xAD]);

    let msg = DnsMessage::parse(&packet).unwrap();
    assert_eq!(msg.header().num_answers(), 1);
    assert_eq!(msg.header().num_additionals(), 2);
    assert_eq!(msg.questions().len(), 1);
}

#[test]
fn truncated_header_fails() {
    let result = DnsMessage::parse(&QUERY_HEADER[..7]);
    assert_eq!(
        result,
        Err(Error::OutOfBounds {
            offset: 0,
            len: 12,
            data_len: 7
        })
    );
    if let Err(e) = result {
        println!("{}", e);
    }
}

#[test]
fn truncated_label_fails() {
    let mut packet = QUERY_HEADER.to_vec();
    let full = question("example.com", 1, 1);
    // Cut in the middle of "example".
    packet.extend_from_slice(&full[..4]);

    assert!(matches!(
        DnsMessage::parse(&packet),
        Err(Error::OutOfBounds { offset: 13, len: 7, .. })
    ));
}

#[test]
fn missing_questions_fail() {
    // QDCOUNT says 2, only one is present.
    let mut packet = header([0x01, 0x00], 2);
    packet.extend(question("example.com", 1, 1));

    let len = packet.len();
    assert_eq!(
        DnsMessage::parse(&packet),
        Err(Error::OutOfBounds {
            offset: len,
            len: 1,
            data_len: len
        })
    );
}
