#![allow(non_snake_case, non_upper_case_globals)]
//! UART

pub use super::super::peripherals::uart::*;

instance!(UART);
