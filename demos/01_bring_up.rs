//! First bring-up: configure pads and slider, store and enter normal mode.
#![allow(unused)]
use cy8c201a0::{Capsense0, Capsense1, Config, Cy8c201a0};
use embedded_hal::{
  delay::DelayNs,
  i2c::{I2c, SevenBitAddress},
};

#[allow(dead_code)]
fn bring_up<I2C, D, E>(i2c: I2C, delay: D) -> Result<(), cy8c201a0::Error<E>>
where
  I2C: I2c<SevenBitAddress, Error = E>,
  D: DelayNs,
{
  let config = Config::default()
    .with_capsense0(Capsense0::TOP_AND_BOTTOM)
    .with_capsense1(Capsense1::ALL)
    .with_slider(10, 0x02);

  let mut dev = Cy8c201a0::with_address(i2c, delay, cy8c201a0::CUSTOM_ADDRESS);
  dev.initialize(&config)?;
  Ok(())
}

fn main() {}
