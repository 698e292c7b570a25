//! Mnemonic names for the numeric codes found in a DNS message.
//!
//! Every table is closed: a code not listed here renders as [UNKNOWN].

use std::fmt;

/// Fallback mnemonic for any code that is not in a table.
pub const UNKNOWN: &str = "UNKNOWN";

/// The class value for the Internet.
pub const CLASS_IN: u16 = 1;

/// The class value for any class (wildcard).
pub const CLASS_ANY: u16 = 255;

/// DNS opcodes, stored as `u8`. Can do `as u8` when needed.
///
/// See [RFC 1035 section 4.1.1](https://datatracker.ietf.org/doc/html/rfc1035#section-4.1.1)
/// and [RFC 6895 section 2.2](https://datatracker.ietf.org/doc/html/rfc6895#section-2.2)
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[non_exhaustive]
#[repr(u8)]
pub enum Opcode {
    /// A standard query
    Query = 0,

    /// An inverse query (obsolete)
    IQuery = 1,

    /// A server status request
    Status = 2,

    /// Zone change notification
    Notify = 4,

    /// Dynamic update
    Update = 5,
}

impl Opcode {
    /// Converts `u8` into `Opcode` if possible.
    pub const fn from_u8(value: u8) -> Option<Opcode> {
        match value {
            0 => Some(Opcode::Query),
            1 => Some(Opcode::IQuery),
            2 => Some(Opcode::Status),
            4 => Some(Opcode::Notify),
            5 => Some(Opcode::Update),
            _ => None,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Opcode::Query => "QUERY",
            Opcode::IQuery => "IQUERY",
            Opcode::Status => "STATUS",
            Opcode::Notify => "NOTIFY",
            Opcode::Update => "UPDATE",
        }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// DNS response codes (RCODE), stored as `u8`.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[non_exhaustive]
#[repr(u8)]
pub enum ResponseCode {
    NoError = 0,
    FormErr = 1,
    ServFail = 2,
    NXDomain = 3,
    NotImp = 4,
    Refused = 5,
    YXDomain = 6,
    YXRRSet = 7,
    NXRRSet = 8,
    NotAuth = 9,
    NotZone = 10,
}

impl ResponseCode {
    /// Converts `u8` into `ResponseCode` if possible.
    pub const fn from_u8(value: u8) -> Option<ResponseCode> {
        match value {
            0 => Some(ResponseCode::NoError),
            1 => Some(ResponseCode::FormErr),
            2 => Some(ResponseCode::ServFail),
            3 => Some(ResponseCode::NXDomain),
            4 => Some(ResponseCode::NotImp),
            5 => Some(ResponseCode::Refused),
            6 => Some(ResponseCode::YXDomain),
            7 => Some(ResponseCode::YXRRSet),
            8 => Some(ResponseCode::NXRRSet),
            9 => Some(ResponseCode::NotAuth),
            10 => Some(ResponseCode::NotZone),
            _ => None,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            ResponseCode::NoError => "No Error",
            ResponseCode::FormErr => "Format Error",
            ResponseCode::ServFail => "Server Failure",
            ResponseCode::NXDomain => "Name Error",
            ResponseCode::NotImp => "Not Implemented",
            ResponseCode::Refused => "Refused",
            ResponseCode::YXDomain => "YX Domain",
            ResponseCode::YXRRSet => "YX RR Set",
            ResponseCode::NXRRSet => "NX RR Set",
            ResponseCode::NotAuth => "Not Auth",
            ResponseCode::NotZone => "Not Zone",
        }
    }
}

impl fmt::Display for ResponseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// DNS question types (QTYPE), stored as `u16`. Can do `as u16` when needed.
///
/// See [RFC 1035 section 3.2.3](https://datatracker.ietf.org/doc/html/rfc1035#section-3.2.3)
#[derive(Debug, PartialEq, Eq, Clone, Copy, PartialOrd, Ord)]
#[non_exhaustive]
#[repr(u16)]
pub enum RRType {
    /// IPv4 host address
    A = 1,

    /// Authoritative name server
    NS = 2,

    /// Canonical name for an alias
    CNAME = 5,

    /// Start of a zone of authority
    SOA = 6,

    /// Domain name pointer
    PTR = 12,

    /// Mail exchange
    MX = 15,

    /// Text strings
    TXT = 16,

    /// Incremental zone transfer
    IXFR = 251,

    /// Transfer of an entire zone
    AXFR = 252,

    /// Mailbox-related records
    MAILB = 253,

    /// Mail agent records (obsolete)
    MAILA = 254,

    /// All records (wildcard)
    ANY = 255,
}

impl RRType {
    /// Converts `u16` into `RRType` if possible.
    pub const fn from_u16(value: u16) -> Option<RRType> {
        match value {
            1 => Some(RRType::A),
            2 => Some(RRType::NS),
            5 => Some(RRType::CNAME),
            6 => Some(RRType::SOA),
            12 => Some(RRType::PTR),
            15 => Some(RRType::MX),
            16 => Some(RRType::TXT),
            251 => Some(RRType::IXFR),
            252 => Some(RRType::AXFR),
            253 => Some(RRType::MAILB),
            254 => Some(RRType::MAILA),
            255 => Some(RRType::ANY),
            _ => None,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            RRType::A => "A",
            RRType::NS => "NS",
            RRType::CNAME => "CNAME",
            RRType::SOA => "SOA",
            RRType::PTR => "PTR",
            RRType::MX => "MX",
            RRType::TXT => "TXT",
            RRType::IXFR => "IXFR",
            RRType::AXFR => "AXFR",
            RRType::MAILB => "MAILB",
            RRType::MAILA => "MAILA",
            RRType::ANY => "*",
        }
    }
}

impl fmt::Display for RRType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub const fn opcode_str(opcode: u8) -> &'static str {
    match Opcode::from_u8(opcode) {
        Some(op) => op.as_str(),
        None => UNKNOWN,
    }
}

pub const fn rcode_str(rcode: u8) -> &'static str {
    match ResponseCode::from_u8(rcode) {
        Some(code) => code.as_str(),
        None => UNKNOWN,
    }
}

pub const fn qtype_str(qtype: u16) -> &'static str {
    match RRType::from_u16(qtype) {
        Some(ty) => ty.as_str(),
        None => UNKNOWN,
    }
}

pub const fn qclass_str(qclass: u16) -> &'static str {
    match qclass {
        CLASS_IN => "IN",
        CLASS_ANY => "ANY",
        _ => UNKNOWN,
    }
}

#[cfg(test)]
mod tests {
    use super::{opcode_str, qclass_str, qtype_str, rcode_str, Opcode, RRType, UNKNOWN};

    #[test]
    fn test_opcode_str() {
        assert_eq!(opcode_str(0), "QUERY");
        assert_eq!(opcode_str(1), "IQUERY");
        assert_eq!(opcode_str(2), "STATUS");
        assert_eq!(opcode_str(3), UNKNOWN);
        assert_eq!(opcode_str(4), "NOTIFY");
        assert_eq!(opcode_str(5), "UPDATE");
        assert_eq!(opcode_str(6), UNKNOWN);
        assert_eq!(opcode_str(15), UNKNOWN);
        assert_eq!(Opcode::Update as u8, 5);
    }

    #[test]
    fn test_rcode_str() {
        let names = [
            "No Error",
            "Format Error",
            "Server Failure",
            "Name Error",
            "Not Implemented",
            "Refused",
            "YX Domain",
            "YX RR Set",
            "NX RR Set",
            "Not Auth",
            "Not Zone",
        ];
        for (code, name) in names.iter().enumerate() {
            assert_eq!(rcode_str(code as u8), *name);
        }
        for code in 11..=15 {
            assert_eq!(rcode_str(code), UNKNOWN);
        }
    }

    #[test]
    fn test_qtype_str() {
        assert_eq!(qtype_str(1), "A");
        assert_eq!(qtype_str(5), "CNAME");
        assert_eq!(qtype_str(15), "MX");
        assert_eq!(qtype_str(252), "AXFR");
        assert_eq!(qtype_str(255), "*");
        // AAAA is not in the table.
        assert_eq!(qtype_str(28), UNKNOWN);
        assert_eq!(qtype_str(0), UNKNOWN);

        assert_eq!(RRType::from_u16(12), Some(RRType::PTR));
        assert_eq!(format!("{}", RRType::ANY), "*");
    }

    #[test]
    fn test_qclass_str() {
        assert_eq!(qclass_str(1), "IN");
        assert_eq!(qclass_str(255), "ANY");
        assert_eq!(qclass_str(3), UNKNOWN);
        assert_eq!(qclass_str(0x8001), UNKNOWN);
    }
}
