use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::{I2c, SevenBitAddress};

use crate::reg::{LOCK_SEQUENCE, UNLOCK_SEQUENCE};
use crate::{Cy8c201a0, Error, Reg};

impl<I, E, D> Cy8c201a0<I, D>
where
  I: I2c<SevenBitAddress, Error = E>,
  D: DelayNs,
{
  /// Move the chip to `new_address`.
  ///
  /// Runs unlock, stage and lock in that order, all sent to the current
  /// address; the chip only starts answering on `new_address` once the lock
  /// is back in place. On success the driver targets `new_address` from then
  /// on.
  ///
  /// # Preconditions
  ///
  /// `new_address` is **not validated**. Passing the general-call address, a
  /// reserved address or one already used on the bus is accepted and
  /// written as-is; check it before calling.
  ///
  /// # Errors
  ///
  /// On a bus error the chip may answer on the old address, on the new one,
  /// or still be unlocked with nothing staged. The driver keeps the old
  /// address; probe both before retrying.
  pub fn reprogram_address(&mut self, new_address: SevenBitAddress) -> Result<(), Error<E>> {
    #[cfg(feature = "defmt")]
    defmt::debug!("cy8c201a0: moving {=u8:#x} -> {=u8:#x}", self.address, new_address);

    self.unlock_address()?;
    self.stage_address(new_address)?;
    self.lock_address()?;

    self.address = new_address;
    Ok(())
  }

  /// Send the unlock sequence that opens the address register for writing.
  pub fn unlock_address(&mut self) -> Result<(), Error<E>> {
    self.write_bytes(Reg::I2cLock, &UNLOCK_SEQUENCE)
  }

  /// Write `new_address` to the address register. Only takes effect with
  /// [`Self::lock_address`], and is discarded unless [`Self::unlock_address`]
  /// came first.
  pub fn stage_address(&mut self, new_address: SevenBitAddress) -> Result<(), Error<E>> {
    self.write_register(Reg::I2cAddress, new_address)
  }

  /// Send the lock sequence. The chip adopts any staged address afterwards.
  ///
  /// When driving the steps by hand, follow up with a new driver built with
  /// [`Cy8c201a0::with_address`], since this call leaves the driver's address alone.
  pub fn lock_address(&mut self) -> Result<(), Error<E>> {
    self.write_bytes(Reg::I2cLock, &LOCK_SEQUENCE)
  }
}
