#![cfg_attr(not(test), no_std)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! Blocking, `no_std` driver for the Cypress CY8C201A0 CapSense controller.
//!
//! The CY8C201A0 exposes ten general purpose pins that can act as capacitive
//! touch pads, five of which can be combined into a 5 or 10 segment slider.
//! Configuration happens through a small register map and a command register;
//! every command needs a fixed settle time before the chip accepts the next
//! transaction. This crate wraps that protocol:
//!
//! - Bringing the chip from power-on to a stored, applied configuration in
//!   normal mode with [`Cy8c201a0::initialize`]
//! - Switching between setup and normal mode, storing, applying and factory
//!   restoring the configuration
//! - Moving the chip to another bus address with the lock-guarded
//!   [`Cy8c201a0::reprogram_address`] sequence
//! - Reading the device id, raw pin state and touch status
//! - Using `embedded-hal` 1.0 traits so the driver works across MCU families
//!
//! ```no_run
//! use embedded_hal::{delay::DelayNs, i2c::{I2c, SevenBitAddress}};
//! use cy8c201a0::{Capsense0, Capsense1, Config, Cy8c201a0};
//!
//! fn example<I2C, D, E>(i2c: I2C, delay: D) -> Result<(), cy8c201a0::Error<E>>
//! where
//!   I2C: I2c<SevenBitAddress, Error = E>,
//!   D: DelayNs,
//! {
//!   let config = Config::default()
//!     .with_capsense0(Capsense0::new().with_top(true).with_bottom(true))
//!     .with_capsense1(Capsense1::ALL)
//!     .with_slider(10, 0x02);
//!
//!   let mut touch = Cy8c201a0::new(i2c, delay);
//!   touch.initialize(&config)?;
//!   let status = touch.capsense_status()?;
//!   let _ = status.is_touched();
//!   Ok(())
//! }
//! ```
//!
//! # Bus ownership
//!
//! The chip has no transactional isolation: a register write from another
//! caller between two steps of [`Cy8c201a0::initialize`] or
//! [`Cy8c201a0::reprogram_address`] corrupts the sequence. Every operation
//! takes `&mut self`, so one driver value is exclusive for the whole
//! sequence. When the bus is shared with other devices, hand the driver a
//! per-device bus handle and keep the driver itself behind one lock.
mod address;
mod config;
mod control;
#[cfg(test)]
mod mock;
mod reg;
mod rw;
mod status;

use core::fmt;

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::{I2c, SevenBitAddress};

pub use config::*;
pub use control::OperatingMode;
pub use reg::{Command, Reg, COMMAND_SETTLE_MS, CUSTOM_ADDRESS, FACTORY_ADDRESS};
pub use status::*;

/// Errors that can occur while interacting with the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error<E> {
  /// I²C bus transaction failed with the underlying driver error.
  I2c(E),
  /// A caller supplied value the chip cannot represent. Raised before any
  /// bus traffic.
  InvalidArgument,
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self {
      Error::I2c(e) => write!(f, "I2C error: {:?}", e),
      Error::InvalidArgument => write!(f, "Invalid argument"),
    }
  }
}

#[cfg(feature = "defmt")]
impl<E: defmt::Format> defmt::Format for Error<E> {
  fn format(&self, f: defmt::Formatter) {
    match self {
      Error::I2c(e) => defmt::write!(f, "I2C error: {}", e),
      Error::InvalidArgument => defmt::write!(f, "Invalid argument"),
    }
  }
}

/// Driver for one CY8C201A0 on an I²C bus.
///
/// The driver owns the bus and a delay provider used for the command settle
/// time. It remembers the chip's current 7-bit address and nothing else: the
/// operating mode is the caller's to track, and every read goes to the chip.
pub struct Cy8c201a0<I, D> {
  i2c: I,
  delay: D,
  address: SevenBitAddress,
}

impl<I, E, D> Cy8c201a0<I, D>
where
  I: I2c<SevenBitAddress, Error = E>,
  D: DelayNs,
{
  /// Create a driver for a chip still on its [`FACTORY_ADDRESS`].
  pub fn new(i2c: I, delay: D) -> Self {
    Self::with_address(i2c, delay, FACTORY_ADDRESS)
  }

  /// Create a driver for a chip answering on `address`.
  pub fn with_address(i2c: I, delay: D, address: SevenBitAddress) -> Self {
    Self { i2c, delay, address }
  }

  /// The address every transaction is currently sent to.
  pub fn address(&self) -> SevenBitAddress {
    self.address
  }

  /// Give the bus and delay provider back.
  pub fn release(self) -> (I, D) {
    (self.i2c, self.delay)
  }
}
