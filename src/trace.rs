//! Optional side channel describing every step of the coder.
//!
//! Traces never end up in the encoded payload; they are only handed to a
//! [`Trace`] sink supplied by the caller.

use std::io::{self, Write};

use crate::{models::Prob, symbols};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    /// Encoder state before a bit is coded
    Encode { low: u32, width: u32, p: Prob, t: u32, bit: u8 },
    /// Decoder state before a bit is decoded
    Decode { bits: u32, width: u32, p: Prob, t: u32, bit: u8 },
    /// Pending digits were settled and `digit` is the new pending head
    Emit { low: u32, digit: u8 },
    /// A pending 9 was deferred, it may still roll over to 0
    Defer { low: u32 },
    /// A carry was propagated and `digit` is the new pending head
    Carry { low: u32, digit: u8 },
    /// Initial decoder state read from the head of the stream
    Head { bits: u32 },
    /// Decoder consumed a digit during renormalization
    Load { bits: u32, width: u32, digit: u8 },
}

pub trait Trace {
    fn event(&mut self, event: &Event) -> io::Result<()>;
}

/// Discards all events
pub struct NoTrace;

impl Trace for NoTrace {
    fn event(&mut self, _event: &Event) -> io::Result<()> {
        Ok(())
    }
}

/// Forwards events to `tracing` at trace level
pub struct LogTrace;

impl Trace for LogTrace {
    fn event(&mut self, event: &Event) -> io::Result<()> {
        tracing::trace!(?event, "range coder");
        Ok(())
    }
}

/// Writes one line per event in fixed columns
pub struct TextTrace<W> {
    inner: W,
}

impl<W: Write> TextTrace<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn get_mut(&mut self) -> &mut W {
        &mut self.inner
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> Trace for TextTrace<W> {
    fn event(&mut self, event: &Event) -> io::Result<()> {
        let w = &mut self.inner;
        match *event {
            Event::Encode { low, width, p, t, bit } => writeln!(
                w,
                "low:  {low:5}   width: {width:4}   p: {:2}   t: {t:4}   bym: {}",
                p.get(),
                symbols::to_char(bit)
            ),
            Event::Decode { bits, width, p, t, bit } => writeln!(
                w,
                "bits: {bits:5}   width: {width:4}   p: {:2}   t: {t:4}   bym: {}",
                p.get(),
                symbols::to_char(bit)
            ),
            Event::Emit { low, digit } => writeln!(w, "low:  {low:5}{:40}emit: {digit}", ""),
            Event::Defer { low } => writeln!(w, "low:  {low:5}{:40}emit: 9", ""),
            Event::Carry { low, digit } => {
                writeln!(w, "low:  {low:5}{:40}emit: carry", "")?;
                writeln!(w, "low:  {:5}{:40}emit: {digit}", low % 10000, "")
            }
            Event::Head { bits } => writeln!(w, "{:51}head: {bits:04}", ""),
            Event::Load { bits, width, digit } => {
                writeln!(w, "bits: {bits:5}   width: {width:4}{:22}load: {digit}", "")
            }
        }
    }
}
