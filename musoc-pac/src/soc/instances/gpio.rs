#![allow(non_snake_case, non_upper_case_globals)]
//! GPIO

pub use super::super::peripherals::gpio::*;

instance!(GPIO);
