/******************************************************************************
 * Refer to the CY8C201xx register reference guide for more information.      *
 * ========================================================================== *
 *                       CY8C201A0 - Registers & Commands                     *
*******************************************************************************/

/// Address the chip answers on straight from the factory (the general-call address).
pub const FACTORY_ADDRESS: u8 = 0x00;

/// Address conventionally assigned to the chip after the first reprogramming.
pub const CUSTOM_ADDRESS: u8 = 0x23;

/// Time the chip needs to process any command written to [`Reg::Command`].
pub const COMMAND_SETTLE_MS: u32 = 125;

/// Written to [`Reg::I2cLock`] to open [`Reg::I2cAddress`] for writing.
pub(crate) const UNLOCK_SEQUENCE: [u8; 3] = [0x3c, 0xa5, 0x69];

/// Written to [`Reg::I2cLock`] to close [`Reg::I2cAddress`] and adopt the staged address.
pub(crate) const LOCK_SEQUENCE: [u8; 3] = [0x96, 0x5a, 0xc3];

/// Register map.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Reg {
  // Raw pin state
  Input0 = 0x00,
  Input1 = 0x01,

  // Pad enable masks
  CapsenseEnable0 = 0x06,
  CapsenseEnable1 = 0x07,

  // Slider
  SliderConfig = 0x75,
  SliderResolution0 = 0x77,
  SliderResolution1 = 0x78,

  // Address protection and identity
  I2cLock = 0x79,
  DeviceId = 0x7a,
  I2cAddress = 0x7c,

  // Touch results
  CapsenseStatus0 = 0x88,
  CapsenseStatus1 = 0x89,

  Command = 0xa0,
}

impl From<Reg> for u8 {
  #[inline]
  fn from(r: Reg) -> Self {
    r as u8
  }
}

/// Opcodes accepted by [`Reg::Command`].
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
  /// Persist the current register state to flash.
  StoreConfig = 0x01,
  /// Replace the flash configuration with factory defaults.
  FactoryRestore = 0x02,
  /// Reload the registers from the stored configuration.
  ApplyConfig = 0x06,
  /// Switch to normal mode, where the status registers report live sensing.
  NormalMode = 0x07,
  /// Switch to setup mode, where the configuration registers are writable.
  SetupMode = 0x08,
}

impl From<Command> for u8 {
  #[inline]
  fn from(c: Command) -> Self {
    c as u8
  }
}
