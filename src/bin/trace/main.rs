use std::io::{self, Write};

use toyrc::{
    decode, encode,
    symbols::{self, SAMPLE},
    trace::TextTrace,
    Mode, Options, Result,
};

fn main() -> Result<()> {
    let text = &SAMPLE[..16];
    let bits = symbols::parse(text)?;
    let mut trace = TextTrace::new(io::stdout().lock());

    writeln!(trace.get_mut(), "encode {text}")?;
    let options = Options::new(Mode::Adaptive).with_trace(&mut trace);
    let encoded = encode(&bits, options)?;
    let digits = String::from_utf8_lossy(&encoded.digits).into_owned();

    writeln!(trace.get_mut(), "\ndecode {digits}")?;
    let options = Options::new(Mode::Adaptive).with_trace(&mut trace);
    let decoded = decode(&encoded.digits, bits.len(), options)?;

    let mut out = trace.into_inner();
    writeln!(out, "\nencoded (p = {}; len={:2}): «{}»", Mode::Adaptive, bits.len(), digits)?;
    writeln!(out, "decoded: {} (final p: {})", symbols::render(&decoded.bits), decoded.prob)?;
    Ok(())
}
