//! A small decoder for DNS query packets.
//!
//! Given the raw bytes of a DNS query, this library decodes the 12-byte
//! header (with its bit-packed flags) and the question section into a
//! [`DnsMessage`], and renders it as one readable line per question.
//!
//! # Usage
//!
//! ```rust
//! use dns_query_parser::DnsMessage;
//!
//! let packet = [
//!     0x00, 0x01, 0x01, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // header
//!     0x07, b'e', b'x', b'a', b'm', b'p', b'l', b'e', 0x03, b'c', b'o', b'm', 0x00, // name
//!     0x00, 0x01, 0x00, 0x01, // type A, class IN
//! ];
//!
//! let msg = DnsMessage::parse(&packet).expect("a valid query");
//! assert_eq!(msg.questions()[0].name(), "example.com");
//! assert_eq!(msg.to_string(), "QUERY:\texample.com\tA\tIN");
//! ```
//!
//! # Limitations
//!
//! This implementation follows [RFC 1035](https://tools.ietf.org/html/rfc1035)
//! for the message layout, and currently has the following limitations:
//! - Only the header and question section are decoded. Answer, authority
//!   and additional records are skipped even when their counts are nonzero.
//! - Name compression pointers are not followed. A length byte with the two
//!   high bits set is read as a plain label length.
//! - A response can be decoded, but it does not render as text.

#![forbid(unsafe_code)]

// log for logging (optional).
#[cfg(feature = "logging")]
use log;

#[cfg(not(feature = "logging"))]
#[macro_use]
mod log {
    macro_rules! trace {
        ($($arg:expr),*) => {
            {
                let _ = ($($arg),*); // avoid warnings about unused variables.
            }
        };
    }

    macro_rules! debug {
        ($($arg:expr),*) => {
            {
                let _ = ($($arg),*);
            }
        };
    }
}

mod dns_parser;
mod error;
mod mnemonic;

pub use dns_parser::{
    bit_field, DnsFlags, DnsHeader, DnsMessage, DnsQuestion, MSG_HEADER_LEN,
    RESPONSE_NOT_SUPPORTED,
};
pub use error::{Error, Result};
pub use mnemonic::{
    opcode_str, qclass_str, qtype_str, rcode_str, Opcode, RRType, ResponseCode, CLASS_ANY,
    CLASS_IN, UNKNOWN,
};
