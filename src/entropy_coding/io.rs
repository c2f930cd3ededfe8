use core::slice::from_mut as into_slice;
use std::io::{ErrorKind, Read, Write};

use super::range_coder::{DigitRead, DigitWrite, HEAD_DIGITS};
use crate::error::{Error, Result};

/// First byte of every stream, the encoder's initial pending head
pub const MARKER: u8 = b'0';

/// Range coder read io for `io::Read` types
pub struct DigitReader<R> {
    inner: R,
}

impl<R: Read> DigitReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    fn read_byte(&mut self) -> Result<u8> {
        let mut byte = 0;
        match self.inner.read_exact(into_slice(&mut byte)) {
            Ok(()) => Ok(byte),
            Err(err) if err.kind() == ErrorKind::UnexpectedEof => Err(Error::UnexpectedEof),
            Err(err) => Err(err.into()),
        }
    }
}

impl<R: Read> DigitRead for DigitReader<R> {
    fn read_head(&mut self) -> Result<u32> {
        let marker = self.read_byte()?;
        if marker != MARKER {
            return Err(Error::BadMarker(marker));
        }

        let mut bits = 0;
        for _ in 0..HEAD_DIGITS {
            bits = bits * 10 + u32::from(self.read_digit()?);
        }
        Ok(bits)
    }

    fn read_digit(&mut self) -> Result<u8> {
        match self.read_byte()? {
            byte @ b'0'..=b'9' => Ok(byte - b'0'),
            byte => Err(Error::InvalidDigit(byte)),
        }
    }
}

/// Range coder write io for `io::Write` types
pub struct DigitWriter<W> {
    inner: W,
    head: u8,
    pending: u64,
}

impl<W: Write> DigitWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner, head: MARKER - b'0', pending: 0 }
    }

    pub fn into_inner(self) -> W {
        self.inner
    }

    fn settle(&mut self, head: u8, fill: u8, digit: u8) -> Result<()> {
        debug_assert!(head <= 9 && digit <= 9, "Tried to write invalid digit");
        self.inner.write_all(&[b'0' + head])?;
        while self.pending > 0 {
            self.pending -= 1;
            self.inner.write_all(&[fill])?;
        }
        self.head = digit;
        Ok(())
    }
}

impl<W: Write> DigitWrite for DigitWriter<W> {
    fn write_digit(&mut self, digit: u8) -> Result<()> {
        self.settle(self.head, b'9', digit)
    }

    fn defer(&mut self) {
        self.pending += 1;
    }

    fn write_carry(&mut self, digit: u8) -> Result<()> {
        self.settle(self.head + 1, b'0', digit)
    }

    fn flush(&mut self) -> Result<()> {
        self.inner.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{DigitRead, DigitReader, DigitWrite, DigitWriter};
    use crate::error::Error;

    #[test]
    fn read_head_and_digits() {
        let mut reader = DigitReader::new(b"0123456".as_ref());
        assert_eq!(reader.read_head().unwrap(), 1234);
        assert_eq!(reader.read_digit().unwrap(), 5);
        assert_eq!(reader.read_digit().unwrap(), 6);
        // read past EOF
        assert!(matches!(reader.read_digit(), Err(Error::UnexpectedEof)));
    }

    #[test]
    fn read_bad_marker() {
        let mut reader = DigitReader::new(b"11234".as_ref());
        assert!(matches!(reader.read_head(), Err(Error::BadMarker(b'1'))));
    }

    #[test]
    fn read_short_head() {
        let mut reader = DigitReader::new(b"012".as_ref());
        assert!(matches!(reader.read_head(), Err(Error::UnexpectedEof)));
        let mut reader = DigitReader::new(b"".as_ref());
        assert!(matches!(reader.read_head(), Err(Error::UnexpectedEof)));
    }

    #[test]
    fn read_non_digit() {
        let mut reader = DigitReader::new(b"012a4".as_ref());
        assert!(matches!(reader.read_head(), Err(Error::InvalidDigit(b'a'))));
    }

    #[test]
    fn write_marker_first() {
        let mut writer = DigitWriter::new(Vec::new());
        writer.write_digit(4).unwrap();
        writer.write_digit(2).unwrap();
        writer.flush().unwrap();
        // 2 is still pending
        assert_eq!(writer.into_inner(), b"04");
    }

    #[test]
    fn write_deferred_nines() {
        let mut writer = DigitWriter::new(Vec::new());
        writer.write_digit(3).unwrap();
        (0..3).for_each(|_| writer.defer());
        writer.write_digit(1).unwrap();
        assert_eq!(writer.into_inner(), b"03999");
    }

    #[test]
    fn write_carry_rolls_nines_over() {
        let mut writer = DigitWriter::new(Vec::new());
        writer.write_digit(3).unwrap();
        (0..3).for_each(|_| writer.defer());
        writer.write_carry(5).unwrap();
        writer.write_digit(0).unwrap();
        assert_eq!(writer.into_inner(), b"040005");
    }
}
