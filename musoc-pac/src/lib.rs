#![cfg_attr(not(test), no_std)]

//! Register map for the MUSoC GPIO ports and serial buffer.
//!
//! Every register is a fixed-address byte with eight independently named bits.
//! Registers can be reached two ways:
//!
//! * through a [`MemoryInterface`], using the [`Register`] and [`Bit`]
//!   descriptors exported by each peripheral module (`gpio::PTAD`,
//!   `gpio::PTAD_PTAD3`, `uart::BUFFER`, ...), or
//! * through a peripheral [`gpio::Instance`]/[`uart::Instance`] obtained with
//!   `take()`, which dereferences to a `RegisterBlock` overlaid on the hardware.
//!
//! ```no_run
//! use musoc_pac::{gpio, MemoryInterface, Mmio};
//!
//! let mut mmio = unsafe { Mmio::new() };
//! mmio.write_byte(gpio::PTADD, 0xff);
//! mmio.write_bit(gpio::PTAD_PTAD0, true);
//! ```
//!
//! Names outside the map do not resolve:
//!
//! ```compile_fail
//! use musoc_pac::{gpio, MemoryInterface, SimulatedSoc};
//!
//! let mut soc = SimulatedSoc::new();
//! soc.write_byte(gpio::PTED, 0xff);
//! ```
//!
//! ```compile_fail
//! use musoc_pac::{gpio, read_reg};
//!
//! let port = gpio::GPIO::take().unwrap();
//! let _ = read_reg!(gpio, port, PTAD, B8);
//! ```

#[macro_use]
mod fmt;

pub mod register;
pub use crate::register::{Bit, Error, MemoryInterface, Mmio, RWRegister, Register};

mod soc;
pub use soc::*;
