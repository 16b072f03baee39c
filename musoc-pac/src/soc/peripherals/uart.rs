#![allow(non_snake_case)]
//! UART
//!
//! A single byte buffer shared by transmit and receive, plus 16-bit TX and RX
//! buffer counters split into low and high bytes.

use crate::{MemoryInterface, Register};

register_block! {
    base: 0x1100_0000;
    /// TX/RX Serial Buffer (in & out)
    BUFFER @ 0x0 => [
        BUFFER_B0, BUFFER_B1, BUFFER_B2, BUFFER_B3,
        BUFFER_B4, BUFFER_B5, BUFFER_B6, BUFFER_B7,
    ],
    /// TX buffer counter LOW
    TX_COUNT_L @ 0x1 => [
        TX_COUNT_L_B0, TX_COUNT_L_B1, TX_COUNT_L_B2, TX_COUNT_L_B3,
        TX_COUNT_L_B4, TX_COUNT_L_B5, TX_COUNT_L_B6, TX_COUNT_L_B7,
    ],
    /// TX buffer counter HIGH
    TX_COUNT_H @ 0x2 => [
        TX_COUNT_H_B0, TX_COUNT_H_B1, TX_COUNT_H_B2, TX_COUNT_H_B3,
        TX_COUNT_H_B4, TX_COUNT_H_B5, TX_COUNT_H_B6, TX_COUNT_H_B7,
    ],
    /// RX buffer counter LOW
    RX_COUNT_L @ 0x3 => [
        RX_COUNT_L_B0, RX_COUNT_L_B1, RX_COUNT_L_B2, RX_COUNT_L_B3,
        RX_COUNT_L_B4, RX_COUNT_L_B5, RX_COUNT_L_B6, RX_COUNT_L_B7,
    ],
    /// RX buffer counter HIGH
    RX_COUNT_H @ 0x4 => [
        RX_COUNT_H_B0, RX_COUNT_H_B1, RX_COUNT_H_B2, RX_COUNT_H_B3,
        RX_COUNT_H_B4, RX_COUNT_H_B5, RX_COUNT_H_B6, RX_COUNT_H_B7,
    ],
}

/// A 16-bit counter held in a low/high register pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Counter {
    pub low: Register,
    pub high: Register,
}

impl Counter {
    /// Reads the low byte, then the high byte. The pair is not latched, so a
    /// counter that moves between the two loads can read torn.
    pub fn read<M: MemoryInterface + ?Sized>(&self, mem: &mut M) -> u16 {
        let low = mem.read_byte(self.low);
        let high = mem.read_byte(self.high);
        u16::from_le_bytes([low, high])
    }

    /// Writes the low byte, then the high byte.
    pub fn write<M: MemoryInterface + ?Sized>(&self, mem: &mut M, value: u16) {
        let [low, high] = value.to_le_bytes();
        mem.write_byte(self.low, low);
        mem.write_byte(self.high, high);
    }
}

/// TX buffer counter.
pub const TX_COUNT: Counter = Counter {
    low: TX_COUNT_L,
    high: TX_COUNT_H,
};

/// RX buffer counter.
pub const RX_COUNT: Counter = Counter {
    low: RX_COUNT_L,
    high: RX_COUNT_H,
};
