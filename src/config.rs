use bitfield_struct::bitfield;
use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::{I2c, SevenBitAddress};

use crate::{Cy8c201a0, Error, Reg};

impl<I, E, D> Cy8c201a0<I, D>
where
  I: I2c<SevenBitAddress, Error = E>,
  D: DelayNs,
{
  /// Bring the chip from any mode to a stored, applied configuration in
  /// normal mode.
  ///
  /// Steps, each one only after the previous succeeded:
  /// setup mode, capsense 0 mask, capsense 1 mask, slider config and
  /// resolution (when `slider_pads` is not zero), store, apply, normal mode.
  ///
  /// A slider pad count other than 0, 5 or 10 fails with
  /// [`Error::InvalidArgument`] before anything is sent. A bus error aborts
  /// at the failing step and nothing is rolled back, since the previous
  /// register contents are unknown. Calling `initialize` again with the same
  /// config is the way to recover and ends in the same chip state.
  pub fn initialize(&mut self, config: &Config) -> Result<(), Error<E>> {
    let slider = match config.slider_pads {
      0 => None,
      pads => Some(SliderConfig::for_pads(pads).ok_or(Error::InvalidArgument)?),
    };

    #[cfg(feature = "defmt")]
    defmt::debug!("cy8c201a0: initializing at {=u8:#x} with {}", self.address, config);

    self.enter_setup_mode()?;
    self.set_capsense0(config.capsense0)?;
    self.set_capsense1(config.capsense1)?;

    if let Some(slider) = slider {
      self.write_register(Reg::SliderConfig, slider.into())?;
      self.set_slider_resolution(config.slider_resolution)?;
    }

    self.store_config()?;
    self.apply_config()?;
    self.enter_normal_mode()?;

    #[cfg(feature = "defmt")]
    defmt::debug!("cy8c201a0: configuration stored, normal mode");

    Ok(())
  }

  /// Enable the top and bottom pads. Setup mode only.
  pub fn set_capsense0(&mut self, pads: Capsense0) -> Result<(), Error<E>> {
    self.write_register(Reg::CapsenseEnable0, pads.into())
  }

  /// Enable the middle pads. Setup mode only.
  pub fn set_capsense1(&mut self, pads: Capsense1) -> Result<(), Error<E>> {
    self.write_register(Reg::CapsenseEnable1, pads.into())
  }

  /// Turn the middle pads into a slider of 5 or 10 segments. Setup mode only.
  pub fn enable_slider(&mut self, pads: u8) -> Result<(), Error<E>> {
    let slider = SliderConfig::for_pads(pads).ok_or(Error::InvalidArgument)?;
    self.write_register(Reg::SliderConfig, slider.into())
  }

  /// Set the granularity of the reported slider position. Setup mode only.
  pub fn set_slider_resolution(&mut self, resolution: u8) -> Result<(), Error<E>> {
    self.write_register(Reg::SliderResolution0, resolution)
  }
}

/// Configuration pushed by [`Cy8c201a0::initialize`].
///
/// # Example
/// ```no_run
/// use cy8c201a0::{Capsense0, Capsense1, Config};
///
/// let config = Config::default()
///   .with_capsense0(Capsense0::TOP_AND_BOTTOM)
///   .with_capsense1(Capsense1::ALL)
///   .with_slider(10, 0x02);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
  pub capsense0: Capsense0,
  pub capsense1: Capsense1,
  /// 0 leaves the slider registers untouched, otherwise 5 or 10.
  pub slider_pads: u8,
  pub slider_resolution: u8,
}

impl Config {
  /// Build a config from raw register values.
  pub const fn new(capsense0: u8, capsense1: u8, slider_pads: u8, slider_resolution: u8) -> Self {
    Self {
      capsense0: Capsense0::from_bits(capsense0),
      capsense1: Capsense1::from_bits(capsense1),
      slider_pads,
      slider_resolution,
    }
  }

  pub const fn with_capsense0(mut self, capsense0: Capsense0) -> Self {
    self.capsense0 = capsense0;
    self
  }

  pub const fn with_capsense1(mut self, capsense1: Capsense1) -> Self {
    self.capsense1 = capsense1;
    self
  }

  /// Enable the slider. `pads` is checked by [`Cy8c201a0::initialize`].
  pub const fn with_slider(mut self, pads: u8, resolution: u8) -> Self {
    self.slider_pads = pads;
    self.slider_resolution = resolution;
    self
  }

  pub const fn without_slider(mut self) -> Self {
    self.slider_pads = 0;
    self
  }
}

impl Default for Config {
  fn default() -> Self {
    Self {
      capsense0: Capsense0::TOP_AND_BOTTOM,
      capsense1: Capsense1::ALL,
      slider_pads: 0,
      slider_resolution: 0,
    }
  }
}

/// Capsense port 0: the top and bottom pads.
///
/// Used both as the enable mask and as the touch status layout.
#[bitfield(u8, defmt = cfg(feature = "defmt"))]
#[derive(PartialEq, Eq)]
pub struct Capsense0 {
  #[bits(3)]
  __: u8,
  pub top: bool,
  pub bottom: bool,
  #[bits(3)]
  ___: u8,
}

impl Capsense0 {
  pub const TOP_AND_BOTTOM: Self = Self::new().with_top(true).with_bottom(true);
}

/// Capsense port 1: up to five middle pads, bit 0 first.
#[bitfield(u8, defmt = cfg(feature = "defmt"))]
#[derive(PartialEq, Eq)]
pub struct Capsense1 {
  #[bits(5)]
  pub pads: u8,
  #[bits(3)]
  __: u8,
}

impl Capsense1 {
  pub const ALL: Self = Self::new().with_pads(0x1f);

  /// Whether middle pad `index` (0..5) is set.
  pub const fn pad(&self, index: u8) -> bool {
    index < 5 && self.pads() & (1 << index) != 0
  }
}

/// Value of the slider config register.
#[bitfield(u8, defmt = cfg(feature = "defmt"))]
#[derive(PartialEq, Eq)]
pub struct SliderConfig {
  pub enable: bool,
  #[bits(2)]
  __: u8,
  /// Diplexed slider spreading 5 pins over 10 segments.
  pub ten_pads: bool,
  #[bits(4)]
  ___: u8,
}

impl SliderConfig {
  /// Enabled slider for `pads` segments; `None` unless 5 or 10.
  pub const fn for_pads(pads: u8) -> Option<Self> {
    match pads {
      5 => Some(Self::new().with_enable(true)),
      10 => Some(Self::new().with_enable(true).with_ten_pads(true)),
      _ => None,
    }
  }
}
