use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::{I2c, SevenBitAddress};

use crate::{Capsense0, Capsense1, Cy8c201a0, Error, Reg};

impl<I, E, D> Cy8c201a0<I, D>
where
  I: I2c<SevenBitAddress, Error = E>,
  D: DelayNs,
{
  /// Read the device id register.
  pub fn device_id(&mut self) -> Result<u8, Error<E>> {
    self.read_register(Reg::DeviceId)
  }

  /// Raw pin state of both ports.
  pub fn inputs(&mut self) -> Result<Inputs, Error<E>> {
    let [port0, port1] = self.read_pair(Reg::Input0)?;
    Ok(Inputs { port0, port1 })
  }

  /// Touch results of both ports in one transaction. Normal mode only.
  pub fn capsense_status(&mut self) -> Result<TouchStatus, Error<E>> {
    let [port0, port1] = self.read_pair(Reg::CapsenseStatus0)?;
    Ok(TouchStatus::new(Capsense0::from_bits(port0), Capsense1::from_bits(port1)))
  }

  /// Touch results of the top and bottom pads.
  pub fn capsense0_status(&mut self) -> Result<Capsense0, Error<E>> {
    self.read_register(Reg::CapsenseStatus0).map(Capsense0::from_bits)
  }

  /// Touch results of the middle pads.
  pub fn capsense1_status(&mut self) -> Result<Capsense1, Error<E>> {
    self.read_register(Reg::CapsenseStatus1).map(Capsense1::from_bits)
  }
}

/// Raw pin levels, one byte per port.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Inputs {
  pub port0: u8,
  pub port1: u8,
}

/// Snapshot of both capsense status registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TouchStatus {
  pub port0: Capsense0,
  pub port1: Capsense1,
}

impl TouchStatus {
  pub const fn new(port0: Capsense0, port1: Capsense1) -> Self {
    Self { port0, port1 }
  }

  pub const fn top(&self) -> bool {
    self.port0.top()
  }

  pub const fn bottom(&self) -> bool {
    self.port0.bottom()
  }

  /// Bitmask of touched middle pads, bit 0 first.
  pub const fn slider_pads(&self) -> u8 {
    self.port1.pads()
  }

  pub const fn is_touched(&self) -> bool {
    self.top() || self.bottom() || self.slider_pads() != 0
  }
}
