//! Move a factory-fresh chip off the general-call address.
#![allow(unused)]
use cy8c201a0::{Cy8c201a0, CUSTOM_ADDRESS};
use embedded_hal::{
  delay::DelayNs,
  i2c::{I2c, SevenBitAddress},
};

#[allow(dead_code)]
fn change_address<I2C, D, E>(i2c: I2C, delay: D) -> Result<(I2C, D), cy8c201a0::Error<E>>
where
  I2C: I2c<SevenBitAddress, Error = E>,
  D: DelayNs,
{
  let mut dev = Cy8c201a0::new(i2c, delay);
  // The new address is written as-is; make sure nothing else uses it.
  dev.reprogram_address(CUSTOM_ADDRESS)?;

  let _id = dev.device_id()?;
  Ok(dev.release())
}

fn main() {}
