
/// Peripherals shared by multiple devices
pub mod peripherals;

/// Peripheral instances shared by multiple devices
pub(crate) mod instances;

/// Metadata
pub mod metadata;

/// Host-side model of the register windows
pub mod sim;

pub use self::instances::gpio;
pub use self::instances::uart;
pub use self::metadata::{find, lookup, lookup_bit};
pub use self::sim::SimulatedSoc;

/// Whether `address` falls inside the GPIO or UART register window.
pub const fn is_mapped(address: u32) -> bool {
    in_window(address, gpio::BASE_ADDRESS, gpio::REGISTERS.len())
        || in_window(address, uart::BASE_ADDRESS, uart::REGISTERS.len())
}

const fn in_window(address: u32, base: u32, len: usize) -> bool {
    address >= base && address - base < len as u32
}
