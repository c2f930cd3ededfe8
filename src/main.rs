use std::env;

use toyrc::{decode, encode, helpers::round_trip, symbols, Error, Mode, Result};

#[derive(Clone, Copy)]
enum Action {
    Encode,
    Decode,
    Test,
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 4 {
        return usage("Invocation doesn't match usage! Provide at least 3 arguments.");
    }
    let action = match args[1].as_str() {
        "e" => Action::Encode,
        "d" => Action::Decode,
        "t" => Action::Test,
        _ => return usage("Unrecognized option -> <action>!"),
    };
    let mode: Mode = args[2].parse()?;
    let input = &args[3];

    match action {
        Action::Encode => {
            let bits = symbols::parse(input)?;
            let encoded = encode(&bits, mode)?;
            println!("{}", String::from_utf8_lossy(&encoded.digits));
        }
        Action::Decode => {
            let Some(len) = args.get(4).and_then(|len| len.parse::<usize>().ok()) else {
                return usage("Decoding needs the number of symbols -> <len>!");
            };
            let decoded = decode(input.as_bytes(), len, mode)?;
            println!("{}", symbols::render(&decoded.bits));
        }
        Action::Test => {
            let bits = symbols::parse(input)?;
            let encoded = round_trip(&bits, mode)?;
            println!(
                "encoded (p = {}; len={:2}): «{}»",
                mode,
                bits.len(),
                String::from_utf8_lossy(&encoded.digits)
            );
        }
    }

    Ok(())
}

fn usage(msg: &str) -> Result<()> {
    println!("Usage: toyrc <Action> <Mode> <Input> [Len]");
    println!("<Action>: e (encode), d (decode), t (test = e + d)");
    println!("<Mode>: 1..15 (probability of 'b' in sixteenths) or adaptive");
    println!("<Input>: symbols ('b' and 'g') for e/t, digits for d");
    println!("<Len>: number of symbols to decode");
    Err(Error::Usage(msg.to_owned()))
}
