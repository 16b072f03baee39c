//! Names and lookups over the whole register map.

use crate::{gpio, uart, Bit, Error, Register};

pub const PERIPHERAL_MODULES: &[&str] = &[
    "gpio",
    "uart",
];

pub const INSTANCE_MODULES: &[&str] = &[
    "gpio",
    "uart",
];

pub const INSTANCE_NAMES: &[&str] = &[
    "GPIO",
    "UART",
];

/// Register lists of every peripheral block, in address order.
pub const BLOCKS: &[&[Register]] = &[gpio::REGISTERS, uart::REGISTERS];

/// Every register of the SoC, in address order.
pub fn registers() -> impl Iterator<Item = Register> {
    BLOCKS.iter().flat_map(|block| block.iter().copied())
}

/// Resolves a register by its symbolic name, e.g. `"PTCDD"` or `"RX_COUNT_H"`.
pub fn lookup(name: &str) -> Result<Register, Error> {
    registers()
        .find(|register| register.name() == name)
        .ok_or(Error::UnknownRegister)
}

/// Resolves a bit by its symbolic name, e.g. `"PTAD_PTAD3"` or `"BUFFER_B7"`.
pub fn lookup_bit(name: &str) -> Result<Bit, Error> {
    registers()
        .flat_map(|register| register.bits())
        .find(|bit| bit.name() == name)
        .ok_or(Error::UnknownBit)
}

/// The register at `address`, if any.
pub fn find(address: u32) -> Option<Register> {
    registers().find(|register| register.address() == address)
}
