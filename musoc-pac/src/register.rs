//! Register and bit descriptors, and the interfaces used to reach them.
//!
//! A [`Register`] names one byte-wide hardware location and a [`Bit`] names one
//! bit inside it. Descriptors carry no state; all accesses go through a
//! [`MemoryInterface`] (volatile [`Mmio`] on the target, anything else on a host)
//! or through the [`RWRegister`] fields of a peripheral `RegisterBlock`.
//!
//! Bit indices are checked when a [`Bit`] is built, never when it is used:
//!
//! ```compile_fail
//! use musoc_pac::{gpio, Bit};
//!
//! const BEYOND_MSB: Bit = gpio::PTAD.bit::<8>();
//! let _ = BEYOND_MSB.mask();
//! ```
//!
//! Registers only come from the peripheral tables, so a name outside the map
//! cannot be given an address from user code:
//!
//! ```compile_fail
//! use musoc_pac::Register;
//!
//! const PTED: Register = Register::new("PTED", 0x1000_0003, &["PTED_PTED0"; 8]);
//! ```

use core::cell::UnsafeCell;
use core::fmt;
use core::ptr;

/// A byte-wide register at a fixed physical address.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Register {
    name: &'static str,
    address: u32,
    bits: &'static [&'static str; 8],
}

impl Register {
    /// Width of every MUSoC register, in bits.
    pub const WIDTH: u8 = 8;

    /// Declares a register. Only the peripheral tables call this.
    pub(crate) const fn new(name: &'static str, address: u32, bits: &'static [&'static str; 8]) -> Register {
        Register { name, address, bits }
    }

    /// Symbolic name, e.g. `"PTAD"`.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Physical address of the register.
    #[inline]
    pub const fn address(&self) -> u32 {
        self.address
    }

    /// Symbolic name of bit `index`, or `None` if `index` is not in `0..8`.
    pub const fn bit_name(&self, index: u8) -> Option<&'static str> {
        if index < Self::WIDTH {
            Some(self.bits[index as usize])
        } else {
            None
        }
    }

    /// Bit `INDEX` of this register. `INDEX >= 8` does not compile.
    #[inline]
    pub const fn bit<const INDEX: u8>(self) -> Bit {
        const { assert!(INDEX < Register::WIDTH, "bit index out of range for an 8-bit register") };
        Bit { register: self, index: INDEX }
    }

    /// Bit `index` of this register, for indices only known at runtime.
    pub const fn try_bit(self, index: u8) -> Result<Bit, Error> {
        if index < Self::WIDTH {
            Ok(Bit { register: self, index })
        } else {
            Err(Error::InvalidBitIndex(index))
        }
    }

    /// All eight bits, least significant first.
    pub const fn bits(self) -> [Bit; 8] {
        [
            self.bit::<0>(),
            self.bit::<1>(),
            self.bit::<2>(),
            self.bit::<3>(),
            self.bit::<4>(),
            self.bit::<5>(),
            self.bit::<6>(),
            self.bit::<7>(),
        ]
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Register {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{}@{=u32:#x}", self.name, self.address)
    }
}

/// A single bit of a [`Register`]. Bit 0 is the least significant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bit {
    register: Register,
    index: u8,
}

impl Bit {
    #[inline]
    pub const fn register(&self) -> Register {
        self.register
    }

    #[inline]
    pub const fn index(&self) -> u8 {
        self.index
    }

    /// Symbolic name, e.g. `"PTAD_PTAD3"` or `"BUFFER_B3"`.
    pub const fn name(&self) -> &'static str {
        self.register.bits[self.index as usize]
    }

    /// Mask (1 bit: 0x1 << index)
    #[inline]
    pub const fn mask(&self) -> u8 {
        1 << self.index
    }

    /// Value of this bit within `byte`.
    #[inline]
    pub const fn extract(&self, byte: u8) -> bool {
        byte & self.mask() != 0
    }

    /// `byte` with this bit set to `value` and every other bit untouched.
    #[inline]
    pub const fn apply(&self, byte: u8, value: bool) -> u8 {
        if value {
            byte | self.mask()
        } else {
            byte & !self.mask()
        }
    }
}

impl fmt::Display for Bit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Bit {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{}", self.name())
    }
}

/// Errors from looking up registers or bits at runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// No register with the given name exists in the map.
    UnknownRegister,
    /// No bit with the given name exists in the map.
    UnknownBit,
    /// Bit index outside `0..8`.
    InvalidBitIndex(u8),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownRegister => f.write_str("unknown register name"),
            Error::UnknownBit => f.write_str("unknown bit name"),
            Error::InvalidBitIndex(index) => write!(f, "bit index {} out of range 0..8", index),
        }
    }
}

impl core::error::Error for Error {}

/// Byte-granular access to the register address space.
///
/// Implementations must perform every call as a genuine access: no caching,
/// merging or elision. A bit write is a read-modify-write of the whole byte and
/// holds `&mut self` throughout, so two bit writes issued through the same
/// interface never tear each other. Nothing here serializes accesses made from
/// different execution contexts (e.g. main loop and interrupt handler) to the
/// same byte; callers must do that themselves, for instance inside
/// `critical_section::with`.
pub trait MemoryInterface {
    fn read8(&mut self, address: u32) -> u8;

    fn write8(&mut self, address: u32, value: u8);

    #[inline]
    fn read_byte(&mut self, register: Register) -> u8 {
        self.read8(register.address())
    }

    #[inline]
    fn write_byte(&mut self, register: Register, value: u8) {
        self.write8(register.address(), value)
    }

    #[inline]
    fn read_bit(&mut self, bit: Bit) -> bool {
        bit.extract(self.read_byte(bit.register()))
    }

    #[inline]
    fn write_bit(&mut self, bit: Bit, value: bool) {
        let byte = self.read_byte(bit.register());
        self.write_byte(bit.register(), bit.apply(byte, value))
    }

    #[inline]
    fn modify_byte<F>(&mut self, register: Register, f: F)
    where
        Self: Sized,
        F: FnOnce(u8) -> u8,
    {
        let byte = self.read_byte(register);
        self.write_byte(register, f(byte))
    }
}

impl<M: MemoryInterface + ?Sized> MemoryInterface for &mut M {
    #[inline]
    fn read8(&mut self, address: u32) -> u8 {
        (**self).read8(address)
    }

    #[inline]
    fn write8(&mut self, address: u32, value: u8) {
        (**self).write8(address, value)
    }
}

/// Volatile loads and stores at the physical register addresses.
pub struct Mmio {
    _private: (),
}

impl Mmio {
    /// # Safety
    /// The MUSoC GPIO and UART blocks must be mapped at their physical addresses
    /// in the current address space (i.e. the code runs on the SoC itself).
    pub const unsafe fn new() -> Mmio {
        Mmio { _private: () }
    }
}

impl MemoryInterface for Mmio {
    #[inline(always)]
    fn read8(&mut self, address: u32) -> u8 {
        assert!(crate::is_mapped(address), "read of unmapped address {:#010x}", address);
        // Safety: `Mmio::new` guarantees the register windows are mapped, and the
        // address was checked to fall inside one of them.
        unsafe { ptr::read_volatile(address as usize as *const u8) }
    }

    #[inline(always)]
    fn write8(&mut self, address: u32, value: u8) {
        assert!(crate::is_mapped(address), "write to unmapped address {:#010x}", address);
        // Safety: see `read8`.
        unsafe { ptr::write_volatile(address as usize as *mut u8, value) }
    }
}

/// Read-write register cell, the field type of every `RegisterBlock`.
#[repr(transparent)]
pub struct RWRegister<T> {
    register: UnsafeCell<T>,
}

impl<T: Copy> RWRegister<T> {
    /// Reads the value of the register.
    #[inline(always)]
    pub fn read(&self) -> T {
        // Safety: a `RWRegister` only exists overlaid on a live register.
        unsafe { ptr::read_volatile(self.register.get()) }
    }

    /// Writes a new value to the register.
    #[inline(always)]
    pub fn write(&self, value: T) {
        // Safety: a `RWRegister` only exists overlaid on a live register.
        unsafe { ptr::write_volatile(self.register.get(), value) }
    }

    /// Reads the register, passes the value through `f` and writes the result.
    #[inline(always)]
    pub fn modify<F: FnOnce(T) -> T>(&self, f: F) {
        self.write(f(self.read()))
    }
}

unsafe impl<T: Send> Send for RWRegister<T> {}
unsafe impl<T: Send> Sync for RWRegister<T> {}

/// Reads a register (or one named bit of it) through a peripheral instance.
///
/// ```no_run
/// use musoc_pac::{gpio, read_reg};
///
/// let port = gpio::GPIO::take().unwrap();
/// let pins: u8 = read_reg!(gpio, port, PTAD);
/// let pin3: bool = read_reg!(gpio, port, PTAD, B3);
/// ```
#[macro_export]
macro_rules! read_reg {
    ( $periph:ident, $instance:expr, $reg:ident, $bit:ident ) => {
        $crate::$periph::$reg::$bit.extract((*$instance).$reg.read())
    };
    ( $periph:ident, $instance:expr, $reg:ident ) => {
        (*$instance).$reg.read()
    };
}

/// Writes a whole register through a peripheral instance, either as a byte or
/// as a list of named bits (bits not listed are written as zero).
///
/// ```no_run
/// use musoc_pac::{gpio, write_reg};
///
/// let port = gpio::GPIO::take().unwrap();
/// write_reg!(gpio, port, PTADD, 0x0f);
/// write_reg!(gpio, port, PTAD, B0: true, B2: true);
/// ```
#[macro_export]
macro_rules! write_reg {
    ( $periph:ident, $instance:expr, $reg:ident, $( $bit:ident : $value:expr ),+ $(,)? ) => {{
        let mut byte = 0u8;
        $( byte = $crate::$periph::$reg::$bit.apply(byte, $value); )+
        (*$instance).$reg.write(byte)
    }};
    ( $periph:ident, $instance:expr, $reg:ident, $value:expr ) => {
        (*$instance).$reg.write($value)
    };
}

/// Read-modify-writes a register through a peripheral instance, either setting
/// a list of named bits or passing the byte through a closure.
///
/// ```no_run
/// use musoc_pac::{gpio, modify_reg};
///
/// let port = gpio::GPIO::take().unwrap();
/// modify_reg!(gpio, port, PTAD, B7: false);
/// modify_reg!(gpio, port, PTBD, |pins| !pins);
/// ```
#[macro_export]
macro_rules! modify_reg {
    ( $periph:ident, $instance:expr, $reg:ident, $( $bit:ident : $value:expr ),+ $(,)? ) => {
        (*$instance).$reg.modify(|byte| {
            let mut byte = byte;
            $( byte = $crate::$periph::$reg::$bit.apply(byte, $value); )+
            byte
        })
    };
    ( $periph:ident, $instance:expr, $reg:ident, $f:expr ) => {
        (*$instance).$reg.modify($f)
    };
}
