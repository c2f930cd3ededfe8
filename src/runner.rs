//! One-call encode/decode on top of [`RangeCoder`].
//!
//! Every call owns its coder and probability model. The probability goes in
//! through [`Mode`] and the final (possibly adapted) value comes back in the
//! result, nothing is shared between calls.

use std::{fmt, str::FromStr};

use tracing::debug;

use crate::{
    entropy_coding::{
        io::{DigitReader, DigitWriter},
        range_coder::RangeCoder,
    },
    error::{Error, Result},
    models::{Fixed, Model, Nudge, Prob},
    trace::{LogTrace, Trace},
};

/// How the probability of the low symbol is chosen
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Fixed(Prob),
    /// Starts at 8/16 and nudges after every symbol
    Adaptive,
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "a" | "adaptive" => Ok(Mode::Adaptive),
            _ => {
                let p = s.parse::<u8>().map_err(|_| Error::InvalidMode(s.to_owned()))?;
                Ok(Mode::Fixed(Prob::new(p)?))
            }
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Fixed(p) => write!(f, "{p}"),
            Mode::Adaptive => f.write_str("adaptive"),
        }
    }
}

pub struct Options<'t> {
    pub mode: Mode,
    /// Receives every coder step, defaults to [`LogTrace`]
    pub trace: Option<&'t mut dyn Trace>,
}

impl<'t> Options<'t> {
    pub fn new(mode: Mode) -> Self {
        Self { mode, trace: None }
    }

    pub fn with_trace(mut self, trace: &'t mut dyn Trace) -> Self {
        self.trace = Some(trace);
        self
    }
}

impl From<Mode> for Options<'_> {
    fn from(mode: Mode) -> Self {
        Self::new(mode)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Encoded {
    /// ASCII digits, starting with the '0' marker
    pub digits: Vec<u8>,
    /// Probability after the last symbol
    pub prob: Prob,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Decoded {
    pub bits: Vec<u8>,
    /// Probability after the last symbol
    pub prob: Prob,
}

pub fn encode<'t>(bits: &[u8], options: impl Into<Options<'t>>) -> Result<Encoded> {
    let options = options.into();
    let mut log_trace = LogTrace;
    let trace = options.trace.unwrap_or(&mut log_trace);

    let encoded = match options.mode {
        Mode::Fixed(p) => encode_with(bits, Fixed::new(p), trace)?,
        Mode::Adaptive => encode_with(bits, Nudge::default(), trace)?,
    };
    debug!(
        mode = %options.mode,
        symbols = bits.len(),
        digits = encoded.digits.len(),
        "encoded"
    );
    Ok(encoded)
}

pub fn decode<'t>(
    digits: &[u8],
    len: usize,
    options: impl Into<Options<'t>>,
) -> Result<Decoded> {
    let options = options.into();
    let mut log_trace = LogTrace;
    let trace = options.trace.unwrap_or(&mut log_trace);

    let decoded = match options.mode {
        Mode::Fixed(p) => decode_with(digits, len, Fixed::new(p), trace)?,
        Mode::Adaptive => decode_with(digits, len, Nudge::default(), trace)?,
    };
    debug!(mode = %options.mode, digits = digits.len(), symbols = len, "decoded");
    Ok(decoded)
}

fn encode_with(bits: &[u8], mut model: impl Model, trace: &mut dyn Trace) -> Result<Encoded> {
    let mut rc = RangeCoder::new_coder();
    let mut writer = DigitWriter::new(Vec::new());

    for &bit in bits {
        let p = model.predict();
        model.update(bit);
        rc.encode(bit, p, &mut writer, trace)?;
    }
    rc.flush(&mut writer, trace)?;

    Ok(Encoded { digits: writer.into_inner(), prob: model.predict() })
}

fn decode_with(
    digits: &[u8],
    len: usize,
    mut model: impl Model,
    trace: &mut dyn Trace,
) -> Result<Decoded> {
    let mut reader = DigitReader::new(digits);
    let mut rc = RangeCoder::new_decoder(&mut reader, trace)?;

    let mut bits = Vec::with_capacity(len);
    for _ in 0..len {
        let p = model.predict();
        let bit = rc.decode(p, &mut reader, trace)?;
        model.update(bit);
        bits.push(bit);
    }

    Ok(Decoded { bits, prob: model.predict() })
}

#[cfg(test)]
mod tests {
    use super::{Mode, Options};
    use crate::{error::Error, models::Prob, trace::TextTrace};

    #[test]
    fn parse_mode() {
        assert_eq!("adaptive".parse::<Mode>().unwrap(), Mode::Adaptive);
        assert_eq!("a".parse::<Mode>().unwrap(), Mode::Adaptive);
        assert_eq!("12".parse::<Mode>().unwrap(), Mode::Fixed(Prob::new(12).unwrap()));
        assert!(matches!("0".parse::<Mode>(), Err(Error::InvalidProbability(0))));
        assert!(matches!("16".parse::<Mode>(), Err(Error::InvalidProbability(16))));
        assert!(matches!("half".parse::<Mode>(), Err(Error::InvalidMode(_))));
    }

    #[test]
    fn display_mode() {
        assert_eq!(Mode::Fixed(Prob::new(4).unwrap()).to_string(), " 4 / 16");
        assert_eq!(Mode::Adaptive.to_string(), "adaptive");
    }

    #[test]
    fn trace_stays_out_of_payload() {
        let bits: [u8; 4] = [0, 0, 1, 0];
        let plain = super::encode(&bits, Mode::Adaptive).unwrap();

        let mut trace = TextTrace::new(Vec::new());
        let options = Options::new(Mode::Adaptive).with_trace(&mut trace);
        let traced = super::encode(&bits, options).unwrap();
        assert_eq!(plain, traced);

        let text = String::from_utf8(trace.into_inner()).unwrap();
        assert_eq!(text.lines().filter(|line| line.contains("bym:")).count(), bits.len());
    }
}
