//! In-memory stand-in for the SoC's register windows, for running firmware
//! logic on a host.

use crate::{gpio, uart, MemoryInterface, Register};

const GPIO_LEN: usize = gpio::REGISTERS.len();
const UART_LEN: usize = uart::REGISTERS.len();

/// Plain memory behind the GPIO and UART windows. All registers reset to zero
/// and behave as ordinary bytes. Touching an address outside both windows
/// panics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimulatedSoc {
    gpio: [u8; GPIO_LEN],
    uart: [u8; UART_LEN],
}

impl SimulatedSoc {
    pub const fn new() -> SimulatedSoc {
        SimulatedSoc {
            gpio: [0; GPIO_LEN],
            uart: [0; UART_LEN],
        }
    }

    /// Current value of `register`, without going through [`MemoryInterface`].
    pub fn peek(&self, register: Register) -> u8 {
        match Self::locate(register.address()) {
            Slot::Gpio(i) => self.gpio[i],
            Slot::Uart(i) => self.uart[i],
        }
    }

    fn locate(address: u32) -> Slot {
        if let Some(i) = window_index(address, gpio::BASE_ADDRESS, GPIO_LEN) {
            Slot::Gpio(i)
        } else if let Some(i) = window_index(address, uart::BASE_ADDRESS, UART_LEN) {
            Slot::Uart(i)
        } else {
            panic!("access to unmapped address {:#010x}", address)
        }
    }

    fn slot(&mut self, address: u32) -> &mut u8 {
        match Self::locate(address) {
            Slot::Gpio(i) => &mut self.gpio[i],
            Slot::Uart(i) => &mut self.uart[i],
        }
    }
}

impl Default for SimulatedSoc {
    fn default() -> SimulatedSoc {
        SimulatedSoc::new()
    }
}

impl MemoryInterface for SimulatedSoc {
    fn read8(&mut self, address: u32) -> u8 {
        *self.slot(address)
    }

    fn write8(&mut self, address: u32, value: u8) {
        *self.slot(address) = value;
    }
}

enum Slot {
    Gpio(usize),
    Uart(usize),
}

fn window_index(address: u32, base: u32, len: usize) -> Option<usize> {
    let index = address.checked_sub(base)? as usize;
    (index < len).then_some(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resets_to_zero() {
        let mut soc = SimulatedSoc::default();
        for register in crate::metadata::registers() {
            assert_eq!(soc.read_byte(register), 0, "{}", register);
        }
    }

    #[test]
    fn windows_are_independent() {
        let mut soc = SimulatedSoc::new();
        soc.write_byte(gpio::PTAD, 0x11);
        soc.write_byte(uart::BUFFER, 0x22);
        assert_eq!(soc.peek(gpio::PTAD), 0x11);
        assert_eq!(soc.peek(uart::BUFFER), 0x22);
        assert_eq!(soc.peek(gpio::PTBD), 0x00);
    }

    #[test]
    #[should_panic(expected = "unmapped address 0x10000014")]
    fn past_gpio_window_faults() {
        SimulatedSoc::new().read8(0x1000_0014);
    }

    #[test]
    #[should_panic(expected = "unmapped address 0x11000005")]
    fn past_uart_window_faults() {
        SimulatedSoc::new().write8(0x1100_0005, 0);
    }

    #[test]
    #[should_panic(expected = "unmapped address 0x0fffffff")]
    fn below_gpio_window_faults() {
        SimulatedSoc::new().read8(0x0fff_ffff);
    }
}
