//! Recording register-file chip used by the unit tests.

use std::cell::RefCell;
use std::rc::Rc;
use std::vec::Vec;

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::{ErrorKind, ErrorType, I2c, NoAcknowledgeSource, Operation};

use crate::Cy8c201a0;

/// One observed interaction, in bus order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Op {
  /// Address and payload (register first).
  Write(u8, Vec<u8>),
  /// Address, starting register and byte count.
  Read(u8, u8, usize),
  DelayMs(u32),
}

impl Op {
  pub(crate) fn write(address: u8, bytes: &[u8]) -> Self {
    Op::Write(address, bytes.to_vec())
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct MockError;

impl embedded_hal::i2c::Error for MockError {
  fn kind(&self) -> ErrorKind {
    ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address)
  }
}

struct State {
  regs: [u8; 256],
  ops: Vec<Op>,
  attempts: usize,
  fail_at: Option<usize>,
}

/// Shared view of the chip's registers and the interaction log.
#[derive(Clone)]
pub(crate) struct Log(Rc<RefCell<State>>);

impl Log {
  pub(crate) fn ops(&self) -> Vec<Op> {
    self.0.borrow().ops.clone()
  }

  /// Number of bus transactions attempted, failed ones included.
  pub(crate) fn attempts(&self) -> usize {
    self.0.borrow().attempts
  }

  /// Make the `n`-th transaction (zero based) fail with a NACK.
  pub(crate) fn fail_at(&self, n: usize) {
    self.0.borrow_mut().fail_at = Some(n);
  }

  pub(crate) fn set_register(&self, reg: u8, value: u8) {
    self.0.borrow_mut().regs[reg as usize] = value;
  }

  pub(crate) fn register(&self, reg: u8) -> u8 {
    self.0.borrow().regs[reg as usize]
  }

  pub(crate) fn delays(&self) -> usize {
    self.0.borrow().ops.iter().filter(|op| matches!(op, Op::DelayMs(_))).count()
  }
}

pub(crate) struct MockI2c(Log);

impl ErrorType for MockI2c {
  type Error = MockError;
}

impl I2c for MockI2c {
  fn transaction(&mut self, address: u8, operations: &mut [Operation<'_>]) -> Result<(), Self::Error> {
    let mut state = self.0 .0.borrow_mut();
    let n = state.attempts;
    state.attempts += 1;
    if state.fail_at == Some(n) {
      return Err(MockError);
    }

    let mut pointer = 0u8;
    for op in operations.iter_mut() {
      match op {
        Operation::Write(bytes) => {
          let Some((&reg, data)) = bytes.split_first() else { continue };
          pointer = reg;
          // A bare register pointer only prepares the following read.
          if data.is_empty() {
            continue;
          }
          state.ops.push(Op::write(address, bytes));
          for (i, &b) in data.iter().enumerate() {
            state.regs[reg.wrapping_add(i as u8) as usize] = b;
          }
        }
        Operation::Read(buf) => {
          state.ops.push(Op::Read(address, pointer, buf.len()));
          for (i, b) in buf.iter_mut().enumerate() {
            *b = state.regs[pointer.wrapping_add(i as u8) as usize];
          }
        }
      }
    }
    Ok(())
  }
}

pub(crate) struct MockDelay(Log);

impl DelayNs for MockDelay {
  fn delay_ns(&mut self, ns: u32) {
    self.0 .0.borrow_mut().ops.push(Op::DelayMs(ns / 1_000_000));
  }

  fn delay_ms(&mut self, ms: u32) {
    self.0 .0.borrow_mut().ops.push(Op::DelayMs(ms));
  }
}

/// A driver talking to a chip that acknowledges everything at `address`.
pub(crate) fn chip(address: u8) -> (Cy8c201a0<MockI2c, MockDelay>, Log) {
  let log = Log(Rc::new(RefCell::new(State { regs: [0; 256], ops: Vec::new(), attempts: 0, fail_at: None })));
  let dev = Cy8c201a0::with_address(MockI2c(log.clone()), MockDelay(log.clone()), address);
  (dev, log)
}
