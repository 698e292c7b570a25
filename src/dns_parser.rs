//! DNS parsing utility.
//!
//! [DnsMessage] is the logic representation of an incoming DNS query packet:
//! a [DnsHeader] with its [DnsFlags], followed by zero or more [DnsQuestion]s.
//! Answer, authority and additional records are not decoded.

#[cfg(feature = "logging")]
use crate::log::{debug, trace};
use crate::{
    error::{Error, Result},
    mnemonic::{opcode_str, qclass_str, qtype_str, rcode_str},
};
use std::{convert::TryFrom, fmt};

pub const MSG_HEADER_LEN: usize = 12;

const U16_SIZE: usize = 2;

// Definitions for DNS message header "flags" field
//
// The "flags" field is 16-bit long, in this format:
// (RFC 1035 section 4.1.1)
//
//   0  1  2  3  4  5  6  7  8  9  0  1  2  3  4  5
// |QR|   Opcode  |AA|TC|RD|RA|   Z    |   RCODE   |
//
// Each field is taken out of its byte with `bit_field`.

/// Rendering of a message that is a response, instead of its questions.
pub const RESPONSE_NOT_SUPPORTED: &str = "DNS Response message currently not supported";

// The two high bits of a label length byte mark a compression pointer.
// Pointers are not followed, see `DnsQuestion::parse`.
const LABEL_POINTER_MASK: u8 = 0xC0;

/// Returns the bits `[start, end)` of `byte` as a right-aligned value.
///
/// Bits are numbered from the most significant one: bit 0 is `0x80` and
/// bit 7 is `0x01`. For example, `bit_field(0b0111_1000, 1, 5)` is `0b1111`.
///
/// The caller must keep `start <= end <= 8`. Other ranges do not panic
/// but return an unspecified value.
pub const fn bit_field(byte: u8, start: u32, end: u32) -> u8 {
    let shifted = (byte as u32).wrapping_shr(8u32.wrapping_sub(end));
    let mask = 1u32.wrapping_shl(end.wrapping_sub(start)).wrapping_sub(1);
    (shifted & mask) as u8
}

/// The sub-byte fields of the header flags, each right-aligned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DnsFlags {
    qr: u8,
    opcode: u8,
    aa: u8,
    tc: u8,
    rd: u8,
    ra: u8,
    rcode: u8,
}

impl DnsFlags {
    /// Decodes the two flag bytes of a header.
    pub const fn from_bytes(bytes: [u8; 2]) -> Self {
        let [hi, lo] = bytes;
        Self {
            qr: bit_field(hi, 0, 1),
            opcode: bit_field(hi, 1, 5),
            aa: bit_field(hi, 5, 6),
            tc: bit_field(hi, 6, 7),
            rd: bit_field(hi, 7, 8),
            ra: bit_field(lo, 0, 1),
            rcode: bit_field(lo, 4, 8),
        }
    }

    /// Query (0) or response (1).
    pub const fn qr(&self) -> u8 {
        self.qr
    }

    pub const fn opcode(&self) -> u8 {
        self.opcode
    }

    /// Authoritative answer.
    pub const fn aa(&self) -> u8 {
        self.aa
    }

    /// Truncation.
    pub const fn tc(&self) -> u8 {
        self.tc
    }

    /// Recursion desired.
    pub const fn rd(&self) -> u8 {
        self.rd
    }

    /// Recursion available.
    pub const fn ra(&self) -> u8 {
        self.ra
    }

    pub const fn rcode(&self) -> u8 {
        self.rcode
    }

    pub const fn is_query(&self) -> bool {
        self.qr == 0
    }

    pub const fn is_response(&self) -> bool {
        self.qr != 0
    }

    pub const fn opcode_str(&self) -> &'static str {
        opcode_str(self.opcode)
    }

    pub const fn rcode_str(&self) -> &'static str {
        rcode_str(self.rcode)
    }
}

/// The fixed 12-byte header of a DNS message.
///
/// The record counts are kept as found on the wire. Only `num_questions`
/// drives decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DnsHeader {
    id: u16,
    flags: DnsFlags,
    num_questions: u16,
    num_answers: u16,
    num_authorities: u16,
    num_additionals: u16,
}

impl DnsHeader {
    /// Decodes the header at the start of `data`.
    ///
    /// Returns the header and the number of bytes consumed, which is
    /// always [MSG_HEADER_LEN].
    pub fn parse(data: &[u8]) -> Result<(Self, usize)> {
        let bytes = read_slice(data, 0, MSG_HEADER_LEN)?;

        let header = Self {
            id: u16_from_be_slice(&bytes[..2]),
            flags: DnsFlags::from_bytes([bytes[2], bytes[3]]),
            num_questions: u16_from_be_slice(&bytes[4..6]),
            num_answers: u16_from_be_slice(&bytes[6..8]),
            num_authorities: u16_from_be_slice(&bytes[8..10]),
            num_additionals: u16_from_be_slice(&bytes[10..12]),
        };

        trace!(
            "read_header: id {}, {} questions {} answers {} authorities {} additionals",
            header.id,
            header.num_questions,
            header.num_answers,
            header.num_authorities,
            header.num_additionals
        );
        Ok((header, MSG_HEADER_LEN))
    }

    pub const fn id(&self) -> u16 {
        self.id
    }

    pub const fn flags(&self) -> &DnsFlags {
        &self.flags
    }

    pub const fn num_questions(&self) -> u16 {
        self.num_questions
    }

    pub const fn num_answers(&self) -> u16 {
        self.num_answers
    }

    pub const fn num_authorities(&self) -> u16 {
        self.num_authorities
    }

    pub const fn num_additionals(&self) -> u16 {
        self.num_additionals
    }
}

/// One entry of the question section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsQuestion {
    name: String,
    qtype: u16,
    qclass: u16,
}

impl DnsQuestion {
    /// Decodes one question at the start of `data`.
    ///
    /// Returns the question and the number of bytes consumed: every label
    /// with its length byte, the terminating zero byte, and 4 bytes of
    /// type and class.
    ///
    /// Compressed names are not supported. A length byte with the two high
    /// bits set is read as a plain label length (192 to 255 bytes), which
    /// usually runs past the end of the data.
    pub fn parse(data: &[u8]) -> Result<(Self, usize)> {
        let mut offset = 0;
        let mut name = String::new();

        // See https://datatracker.ietf.org/doc/html/rfc1035#section-3.1 for
        // domain name encoding. Every iteration moves `offset` forward by at
        // least one byte, so the loop ends within `data.len()` rounds.
        loop {
            let length = read_slice(data, offset, 1)?[0];
            offset += 1;

            if length == 0 {
                break; // The end of the name
            }

            if length & LABEL_POINTER_MASK == LABEL_POINTER_MASK {
                debug!(
                    "read_name: length byte 0x{:x} at offset {} looks like a pointer, reading as a label",
                    length,
                    offset - 1
                );
            }

            let label = read_slice(data, offset, length as usize)?;
            if !name.is_empty() {
                name.push('.');
            }
            name.push_str(&String::from_utf8_lossy(label));
            offset += label.len();
        }

        let fixed = read_slice(data, offset, 2 * U16_SIZE)?;
        let qtype = u16_from_be_slice(&fixed[..2]);
        let qclass = u16_from_be_slice(&fixed[2..4]);
        offset += fixed.len();

        trace!(
            "read_question: name {:?} qtype {} qclass {}, {} bytes",
            &name,
            qtype,
            qclass,
            offset
        );
        Ok((
            Self {
                name,
                qtype,
                qclass,
            },
            offset,
        ))
    }

    /// The domain name with labels joined by dots. Empty for the root.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn qtype(&self) -> u16 {
        self.qtype
    }

    pub const fn qclass(&self) -> u16 {
        self.qclass
    }

    pub const fn type_str(&self) -> &'static str {
        qtype_str(self.qtype)
    }

    pub const fn class_str(&self) -> &'static str {
        qclass_str(self.qclass)
    }
}

/// A decoded DNS query message: the header and the question section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsMessage {
    header: DnsHeader,
    questions: Vec<DnsQuestion>,
}

impl DnsMessage {
    /// Decodes the header and exactly `num_questions` questions from `data`.
    ///
    /// Bytes after the question section are ignored, whatever the other
    /// record counts say.
    pub fn parse(data: &[u8]) -> Result<Self> {
        /*
        RFC 1035 section 4.1: https://datatracker.ietf.org/doc/html/rfc1035#section-4.1

            +---------------------+
            |        Header       |
            +---------------------+
            |       Question      | the question for the name server
            +---------------------+
            |        Answer       | not decoded
            +---------------------+
            |      Authority      | not decoded
            +---------------------+
            |      Additional     | not decoded
            +---------------------+
         */
        let (header, mut offset) = DnsHeader::parse(data)?;

        trace!("read_questions: {}", header.num_questions);
        let mut questions = Vec::new();
        for _ in 0..header.num_questions {
            // `offset` never exceeds `data.len()`: it only grows by lengths
            // that were read successfully.
            let (question, consumed) =
                DnsQuestion::parse(&data[offset..]).map_err(|e| e.rebase(offset))?;
            questions.push(question);
            offset += consumed;
        }

        Ok(Self { header, questions })
    }

    pub const fn header(&self) -> &DnsHeader {
        &self.header
    }

    pub fn questions(&self) -> &[DnsQuestion] {
        &self.questions
    }

    pub const fn id(&self) -> u16 {
        self.header.id
    }

    pub const fn is_query(&self) -> bool {
        self.header.flags.is_query()
    }

    pub const fn is_response(&self) -> bool {
        self.header.flags.is_response()
    }
}

impl TryFrom<&[u8]> for DnsMessage {
    type Error = Error;

    fn try_from(data: &[u8]) -> Result<Self> {
        Self::parse(data)
    }
}

/// One line per question: `<opcode>:\t<name>\t<type>\t<class>`.
///
/// A response renders as [RESPONSE_NOT_SUPPORTED] instead.
impl fmt::Display for DnsMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_response() {
            return f.write_str(RESPONSE_NOT_SUPPORTED);
        }

        let op = self.header.flags.opcode_str();
        for (i, q) in self.questions.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(
                f,
                "{}:\t{}\t{}\t{}",
                op,
                q.name,
                q.type_str(),
                q.class_str()
            )?;
        }
        Ok(())
    }
}

/// Returns `len` bytes of `data` starting at `offset`.
fn read_slice(data: &[u8], offset: usize, len: usize) -> Result<&[u8]> {
    offset
        .checked_add(len)
        .and_then(|end| data.get(offset..end))
        .ok_or(Error::OutOfBounds {
            offset,
            len,
            data_len: data.len(),
        })
}

const fn u16_from_be_slice(bytes: &[u8]) -> u16 {
    let u8_array: [u8; 2] = [bytes[0], bytes[1]];
    u16::from_be_bytes(u8_array)
}
