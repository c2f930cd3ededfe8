use crate::{
    entropy_coding::range_coder::{DigitWrite, RangeCoder},
    error::{Error, Result},
    models::Model,
    runner::{self, Encoded, Mode},
    trace::NoTrace,
};

/// Counts settled digits without keeping them
pub struct DigitStats {
    digit_count: u64,
    pending: u64,
}

impl DigitStats {
    pub fn new() -> Self {
        Self { digit_count: 0, pending: 0 }
    }

    /// Length of the encoded stream, marker included
    pub fn result(&self) -> u64 {
        self.digit_count
    }
}

impl Default for DigitStats {
    fn default() -> Self {
        Self::new()
    }
}

impl DigitWrite for DigitStats {
    fn write_digit(&mut self, _digit: u8) -> Result<()> {
        self.digit_count += 1 + self.pending;
        self.pending = 0;
        Ok(())
    }

    fn defer(&mut self) {
        self.pending += 1;
    }

    fn write_carry(&mut self, digit: u8) -> Result<()> {
        self.write_digit(digit)
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Encoded size of `bits` under `model`, without materializing the stream
pub fn encoded_len(bits: &[u8], mut model: impl Model) -> Result<u64> {
    let mut rc = RangeCoder::new_coder();
    let mut stats = DigitStats::new();

    for &bit in bits {
        let p = model.predict();
        model.update(bit);
        rc.encode(bit, p, &mut stats, &mut NoTrace)?;
    }
    rc.flush(&mut stats, &mut NoTrace)?;
    Ok(stats.result())
}

/// Encodes, decodes back and checks that nothing changed
pub fn round_trip(bits: &[u8], mode: Mode) -> Result<Encoded> {
    let encoded = runner::encode(bits, mode)?;
    let decoded = runner::decode(&encoded.digits, bits.len(), mode)?;

    let mismatch = bits
        .iter()
        .zip(&decoded.bits)
        .position(|(&a, &b)| (a == 0) != (b == 0));
    if let Some(position) = mismatch {
        return Err(Error::RoundTrip { position });
    }
    Ok(encoded)
}
