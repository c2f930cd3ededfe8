use std::marker::PhantomData;

use crate::{
    error::{Error, Result},
    models::{Prob, PROB_BITS},
    trace::{Event, Trace},
};

const BASE: u32 = 10;
const SCALE: u32 = 10_000; // 4 decimal digits of precision
const WIDTH_INIT: u32 = SCALE - 1; // 9999
const RENORM: u32 = SCALE / BASE; // 1000, shift out a digit below this width
const CARRY_FROM: u32 = SCALE - RENORM; // 9000, low in 9000..10000 may still carry
pub const HEAD_DIGITS: usize = 4;
const FLUSH_STEPS: usize = HEAD_DIGITS + 1;

/// The `RangeCoder` encodes/decodes bits into a stream of decimal digits
#[derive(Clone)]
pub struct RangeCoder<T> {
    low: u32,                // encoder interval offset
    width: u32,              // interval size
    bits: u32,               // decoder position within the interval
    _marker: PhantomData<T>, // use for io
}

pub trait DigitRead {
    /// Read the marker and the initial state digits
    fn read_head(&mut self) -> Result<u32>;
    /// Read the value (0..=9) of the next digit
    fn read_digit(&mut self) -> Result<u8>;
}

pub trait DigitWrite {
    /// Settles the pending head and pending 9s, then holds `digit` as the new head
    fn write_digit(&mut self, digit: u8) -> Result<()>;
    /// Holds one more 9 that a carry may still turn into 0
    fn defer(&mut self);
    /// Settles the pending head plus one and pending 0s, then holds `digit`
    fn write_carry(&mut self, digit: u8) -> Result<()>;
    /// Flushes the internal writer, the pending head is never written
    fn flush(&mut self) -> Result<()>;
}

impl<W: DigitWrite> RangeCoder<W> {
    pub fn new_coder() -> Self {
        Self { low: 0, width: WIDTH_INIT, bits: 0, _marker: PhantomData }
    }

    pub fn encode(&mut self, bit: u8, p: Prob, io: &mut W, trace: &mut dyn Trace) -> Result<()> {
        let t = threshold(self.width, p);
        trace.event(&Event::Encode { low: self.low, width: self.width, p, t, bit })?;

        match bit {
            0 => self.width = t,
            _ => {
                self.low += t;
                self.width -= t;
            }
        }

        while self.width < RENORM {
            self.shift_low(io, trace)?;
            self.width *= BASE;
        }
        Ok(())
    }

    fn shift_low(&mut self, io: &mut W, trace: &mut dyn Trace) -> Result<()> {
        let low = self.low;
        if low < CARRY_FROM {
            let digit = leading_digit(low);
            io.write_digit(digit)?;
            trace.event(&Event::Emit { low, digit })?;
        } else if low < SCALE {
            io.defer();
            trace.event(&Event::Defer { low })?;
        } else {
            let digit = leading_digit(low % SCALE);
            io.write_carry(digit)?;
            trace.event(&Event::Carry { low, digit })?;
        }
        self.low = (low * BASE) % SCALE;
        Ok(())
    }

    pub fn flush(&mut self, io: &mut W, trace: &mut dyn Trace) -> Result<()> {
        for _ in 0..FLUSH_STEPS {
            self.shift_low(io, trace)?;
        }
        io.flush()
    }
}

impl<R: DigitRead> RangeCoder<R> {
    pub fn new_decoder(io: &mut R, trace: &mut dyn Trace) -> Result<Self> {
        let bits = io.read_head()?;
        if bits >= WIDTH_INIT {
            return Err(Error::InvalidState { bits, width: WIDTH_INIT });
        }
        trace.event(&Event::Head { bits })?;
        Ok(Self { low: 0, width: WIDTH_INIT, bits, _marker: PhantomData })
    }

    pub fn decode(&mut self, p: Prob, io: &mut R, trace: &mut dyn Trace) -> Result<u8> {
        debug_assert!(self.bits < self.width);
        let t = threshold(self.width, p);
        let bit = u8::from(self.bits >= t);
        trace.event(&Event::Decode { bits: self.bits, width: self.width, p, t, bit })?;

        match bit {
            0 => self.width = t,
            _ => {
                self.bits -= t;
                self.width -= t;
            }
        }

        // Renormalize range -> read new digits from stream
        while self.width < RENORM {
            let digit = io.read_digit()?;
            self.bits = self.bits * BASE + u32::from(digit);
            self.width *= BASE;
            trace.event(&Event::Load { bits: self.bits, width: self.width, digit })?;
        }

        Ok(bit)
    }
}

#[inline(always)]
fn threshold(width: u32, p: Prob) -> u32 {
    // width >= 1000 between symbols, so t is never 0 and never the full width
    (width >> PROB_BITS) * u32::from(p.get())
}

#[inline(always)]
fn leading_digit(low: u32) -> u8 {
    debug_assert!(low < SCALE);
    // low < 10000, so the quotient is a single digit
    (low / RENORM) as u8
}
