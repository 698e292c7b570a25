//! Decodes a DNS query packet given as hex.
//!
//! Run with:
//!
//!     cargo run --example decode <hex_bytes>
//!
//! Example:
//!
//!     cargo run --example decode 000101000001000000000000076578616d706c6503636f6d0000010001
//!
//! Whitespace between bytes is allowed. Set `RUST_LOG=trace` to see the
//! decoder's logs.

use dns_query_parser::DnsMessage;

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        print_usage();
        return;
    }

    let packet = match parse_hex(&args.concat()) {
        Some(bytes) => bytes,
        None => {
            println!("Invalid hex input");
            print_usage();
            return;
        }
    };

    let msg = match DnsMessage::parse(&packet) {
        Ok(msg) => msg,
        Err(e) => {
            println!("Failed to decode {} bytes: {}", packet.len(), e);
            return;
        }
    };

    let header = msg.header();
    let flags = header.flags();
    println!(
        "id: {} opcode: {} rcode: {} qr: {} aa: {} tc: {} rd: {} ra: {}",
        header.id(),
        flags.opcode_str(),
        flags.rcode_str(),
        flags.qr(),
        flags.aa(),
        flags.tc(),
        flags.rd(),
        flags.ra(),
    );
    println!(
        "questions: {} answers: {} authorities: {} additionals: {}",
        header.num_questions(),
        header.num_answers(),
        header.num_authorities(),
        header.num_additionals(),
    );
    println!("{}", msg);
}

fn parse_hex(input: &str) -> Option<Vec<u8>> {
    let digits: Vec<char> = input.chars().filter(|c| !c.is_whitespace()).collect();
    if digits.len() % 2 != 0 {
        return None;
    }
    digits
        .chunks(2)
        .map(|pair| {
            let s: String = pair.iter().collect();
            u8::from_str_radix(&s, 16).ok()
        })
        .collect()
}

fn print_usage() {
    println!("Usage: cargo run --example decode <hex_bytes>");
    println!("Example: ");
    println!("cargo run --example decode 000101000001000000000000076578616d706c6503636f6d0000010001");
}
