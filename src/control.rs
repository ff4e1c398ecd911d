use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::{I2c, SevenBitAddress};

use crate::reg::COMMAND_SETTLE_MS;
use crate::{Command, Cy8c201a0, Error, Reg};

/// Operating modes of the chip.
///
/// The chip has no readable mode bit, so the driver never knows which mode it
/// is in. Track it on the caller side. After a failed transition the mode is
/// unknown; start over from [`Cy8c201a0::enter_setup_mode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OperatingMode {
  /// Configuration registers are writable.
  Setup,
  /// Status registers reflect live sensing.
  Normal,
}

impl From<OperatingMode> for Command {
  fn from(mode: OperatingMode) -> Self {
    match mode {
      OperatingMode::Setup => Command::SetupMode,
      OperatingMode::Normal => Command::NormalMode,
    }
  }
}

impl<I, E, D> Cy8c201a0<I, D>
where
  I: I2c<SevenBitAddress, Error = E>,
  D: DelayNs,
{
  /// Write `command` to the command register and block for
  /// [`COMMAND_SETTLE_MS`](crate::COMMAND_SETTLE_MS).
  ///
  /// The delay only runs once the write was acknowledged. A failed write
  /// returns straight away. The delay cannot be interrupted: returning early
  /// would hand control back before the chip has processed the command.
  pub fn send_command(&mut self, command: Command) -> Result<(), Error<E>> {
    self.write_register(Reg::Command, command.into())?;

    #[cfg(feature = "defmt")]
    defmt::trace!("cy8c201a0: {} sent, settling {} ms", command, COMMAND_SETTLE_MS);

    self.delay.delay_ms(COMMAND_SETTLE_MS);
    Ok(())
  }

  /// Switch the chip to `mode`.
  pub fn set_mode(&mut self, mode: OperatingMode) -> Result<(), Error<E>> {
    self.send_command(mode.into())
  }

  /// Make the configuration registers writable.
  pub fn enter_setup_mode(&mut self) -> Result<(), Error<E>> {
    self.set_mode(OperatingMode::Setup)
  }

  /// Resume touch sensing.
  pub fn enter_normal_mode(&mut self) -> Result<(), Error<E>> {
    self.set_mode(OperatingMode::Normal)
  }

  /// Re-load the registers from the configuration stored in flash.
  pub fn apply_config(&mut self) -> Result<(), Error<E>> {
    self.send_command(Command::ApplyConfig)
  }

  /// Persist the current register contents to flash.
  pub fn store_config(&mut self) -> Result<(), Error<E>> {
    self.send_command(Command::StoreConfig)
  }

  /// Overwrite the stored configuration with the factory defaults.
  ///
  /// The running registers keep their values until [`Self::apply_config`].
  pub fn factory_restore(&mut self) -> Result<(), Error<E>> {
    self.send_command(Command::FactoryRestore)
  }
}
