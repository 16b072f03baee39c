//! Blinks port A of a simulated MUSoC and checks every write by reading it back.
//!
//! Usage: `example-sim [--verbose] [--iterations N]`

use anyhow::{bail, Context, Result};
use musoc_pac::{gpio, uart, MemoryInterface, SimulatedSoc};

/// Forwards every access to `inner`, printing it first when `verbose` is set.
struct TracingMemoryInterface<M> {
    inner: M,
    verbose: bool,
}

impl<M: MemoryInterface> MemoryInterface for TracingMemoryInterface<M> {
    fn read8(&mut self, address: u32) -> u8 {
        let value = self.inner.read8(address);
        if self.verbose {
            eprintln!("rd {:<10} -> {:#04x}", describe(address), value);
        }
        value
    }

    fn write8(&mut self, address: u32, value: u8) {
        if self.verbose {
            eprintln!("wr {:<10} <- {:#04x}", describe(address), value);
        }
        self.inner.write8(address, value);
    }
}

fn describe(address: u32) -> String {
    match musoc_pac::find(address) {
        Some(register) => register.name().to_string(),
        None => format!("{:#010x}", address),
    }
}

fn setup<M: MemoryInterface>(mem: &mut M) {
    // Port A drives the LEDs, PTB7 is a button interrupting on its rising edge.
    mem.write_byte(gpio::PTADD, 0xff);
    mem.write_bit(gpio::PTBDD_PTBDD7, false);
    mem.write_bit(gpio::PTBEP_PTBEP7, true);
    mem.write_bit(gpio::PTBIE_PTBIE7, true);
}

fn blink<M: MemoryInterface>(mem: &mut M, iterations: u32) -> Result<u32> {
    let mut counter = 0u32;
    for _ in 0..iterations {
        counter = counter.wrapping_add(1);

        // The PTB7 handler may touch port A too, so the read-modify-writes of
        // PTAD run with interrupts masked.
        critical_section::with(|_| {
            mem.write_bit(gpio::PTAD_PTAD0, counter & 1 != 0);
            mem.modify_byte(gpio::PTAD, |leds| (leds & 0x01) | ((counter as u8) << 1));
        });

        let expected = (counter as u8) << 1 | (counter & 1) as u8;
        let value = mem.read_byte(gpio::PTAD);
        if value != expected {
            bail!("Values mismatch: {:#04x} => {:#04x}", expected, value);
        }
    }
    Ok(counter)
}

fn run(iterations: u32, verbose: bool) -> Result<()> {
    // Own the GPIO block for the whole run, as firmware would before driving it.
    let port = gpio::GPIO::take().context("GPIO is already taken")?;

    let mut mem = TracingMemoryInterface {
        inner: SimulatedSoc::new(),
        verbose,
    };
    setup(&mut mem);
    let counter = blink(&mut mem, iterations);
    gpio::GPIO::release(port);
    let counter = counter?;
    println!("{} iterations, TX count {}", counter, uart::TX_COUNT.read(&mut mem));

    for register in musoc_pac::metadata::registers() {
        println!(
            "{:<10} {:#010x} {:#04x}",
            register.name(),
            register.address(),
            mem.inner.peek(register)
        );
    }
    Ok(())
}

fn main() -> Result<()> {
    let mut iterations = 8u32;
    let mut verbose = false;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-v" | "--verbose" => verbose = true,
            "-n" | "--iterations" => {
                let value = args.next().context("missing value for --iterations")?;
                iterations = value
                    .parse()
                    .with_context(|| format!("invalid iteration count {:?}", value))?;
            }
            other => bail!("unknown argument {:?}", other),
        }
    }

    run(iterations, verbose)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blink_reads_back_every_write() {
        let mut soc = SimulatedSoc::new();
        setup(&mut soc);
        assert_eq!(blink(&mut soc, 5).unwrap(), 5);
        assert_eq!(soc.peek(gpio::PTADD), 0xff);
        assert_eq!(soc.peek(gpio::PTAD), 0b0000_1011);
        assert_eq!(soc.peek(gpio::PTBIE), 0x80);
        assert_eq!(soc.peek(gpio::PTBEP), 0x80);
        assert_eq!(soc.peek(gpio::PTBDD), 0x00);
    }

    #[test]
    fn run_releases_the_gpio_block() {
        run(3, false).unwrap();
        run(3, false).unwrap();

        let port = gpio::GPIO::take().unwrap();
        let err = run(3, false).unwrap_err();
        assert_eq!(err.to_string(), "GPIO is already taken");
        gpio::GPIO::release(port);
    }

    #[test]
    fn tracing_interface_forwards() {
        let mut mem = TracingMemoryInterface {
            inner: SimulatedSoc::new(),
            verbose: false,
        };
        mem.write_byte(uart::BUFFER, b'A');
        assert_eq!(mem.inner.peek(uart::BUFFER), b'A');
        assert_eq!(describe(0x1100_0000), "BUFFER");
        assert_eq!(describe(0x2000_0000), "0x20000000");
    }
}
