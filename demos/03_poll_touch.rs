//! Poll touch status once the chip runs in normal mode.
#![allow(unused)]
use cy8c201a0::{Cy8c201a0, CUSTOM_ADDRESS};
use embedded_hal::{
  delay::DelayNs,
  i2c::{I2c, SevenBitAddress},
};

#[allow(dead_code)]
fn poll<I2C, D, E>(i2c: I2C, delay: D) -> Result<(), cy8c201a0::Error<E>>
where
  I2C: I2c<SevenBitAddress, Error = E>,
  D: DelayNs,
{
  let mut dev = Cy8c201a0::with_address(i2c, delay, CUSTOM_ADDRESS);

  loop {
    let status = dev.capsense_status()?;
    if status.top() {
      // handle top pad
    }
    if status.bottom() {
      // handle bottom pad
    }
    for pad in 0..5 {
      let _ = status.port1.pad(pad);
    }
  }
}

fn main() {}
