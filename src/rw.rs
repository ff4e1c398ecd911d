use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::{I2c, SevenBitAddress};

use crate::{Cy8c201a0, Error, Reg};

impl<I, E, D> Cy8c201a0<I, D>
where
  I: I2c<SevenBitAddress, Error = E>,
  D: DelayNs,
{
  /// Read a single register in one `write_read` transaction.
  ///
  /// Nothing is cached: every call goes to the chip.
  pub fn read_register(&mut self, reg: Reg) -> Result<u8, Error<E>> {
    let mut buf = [0u8; 1];
    self.i2c.write_read(self.address, &[u8::from(reg)], &mut buf).map_err(Error::I2c)?;
    Ok(buf[0])
  }

  /// Write a single register in one `write` transaction.
  pub fn write_register(&mut self, reg: Reg, value: u8) -> Result<(), Error<E>> {
    self.write_bytes(reg, &[value])
  }

  pub(crate) fn read_pair(&mut self, reg: Reg) -> Result<[u8; 2], Error<E>> {
    let mut buf = [0u8; 2];
    self.i2c.write_read(self.address, &[u8::from(reg)], &mut buf).map_err(Error::I2c)?;
    Ok(buf)
  }

  pub(crate) fn write_bytes(&mut self, reg: Reg, data: &[u8]) -> Result<(), Error<E>> {
    let len = data.len();
    let mut buf = [0u8; 4];
    if len >= buf.len() {
      return Err(Error::InvalidArgument);
    }
    buf[0] = reg.into();
    buf[1..=len].copy_from_slice(data);
    self.i2c.write(self.address, &buf[..=len]).map_err(Error::I2c)
  }
}
