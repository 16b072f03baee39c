#![allow(non_snake_case)]
//! GPIO
//!
//! Four byte-wide ports, A to D. Each port has one register per function, and
//! the block is laid out function-major: the four data registers first, then
//! the four data-direction registers, and so on, one byte apart.

use crate::Register;

/// A GPIO port.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Port {
    A,
    B,
    C,
    D,
}

impl Port {
    pub const ALL: [Port; 4] = [Port::A, Port::B, Port::C, Port::D];
}

/// Per-port register function.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Function {
    /// Pin levels.
    Data,
    /// Pin direction, 1 = output.
    DataDirection,
    /// Per-pin interrupt enable.
    InterruptEnable,
    /// Edge that triggers the pin interrupt.
    EdgePolarity,
    /// Per-pin interrupt clear.
    InterruptClear,
}

impl Function {
    pub const ALL: [Function; 5] = [
        Function::Data,
        Function::DataDirection,
        Function::InterruptEnable,
        Function::EdgePolarity,
        Function::InterruptClear,
    ];
}

/// Offset of the `function` register of `port` from [`BASE_ADDRESS`].
pub const fn offset(port: Port, function: Function) -> u32 {
    function as u32 * Port::ALL.len() as u32 + port as u32
}

/// The `function` register of `port`.
pub const fn register(port: Port, function: Function) -> Register {
    REGISTERS[offset(port, function) as usize]
}

register_block! {
    base: 0x1000_0000;
    /// Port A Data Register
    PTAD @ offset(Port::A, Function::Data) => [
        PTAD_PTAD0, PTAD_PTAD1, PTAD_PTAD2, PTAD_PTAD3,
        PTAD_PTAD4, PTAD_PTAD5, PTAD_PTAD6, PTAD_PTAD7,
    ],
    /// Port B Data Register
    PTBD @ offset(Port::B, Function::Data) => [
        PTBD_PTBD0, PTBD_PTBD1, PTBD_PTBD2, PTBD_PTBD3,
        PTBD_PTBD4, PTBD_PTBD5, PTBD_PTBD6, PTBD_PTBD7,
    ],
    /// Port C Data Register
    PTCD @ offset(Port::C, Function::Data) => [
        PTCD_PTCD0, PTCD_PTCD1, PTCD_PTCD2, PTCD_PTCD3,
        PTCD_PTCD4, PTCD_PTCD5, PTCD_PTCD6, PTCD_PTCD7,
    ],
    /// Port D Data Register
    PTDD @ offset(Port::D, Function::Data) => [
        PTDD_PTDD0, PTDD_PTDD1, PTDD_PTDD2, PTDD_PTDD3,
        PTDD_PTDD4, PTDD_PTDD5, PTDD_PTDD6, PTDD_PTDD7,
    ],
    /// Port A Data Direction Register
    PTADD @ offset(Port::A, Function::DataDirection) => [
        PTADD_PTADD0, PTADD_PTADD1, PTADD_PTADD2, PTADD_PTADD3,
        PTADD_PTADD4, PTADD_PTADD5, PTADD_PTADD6, PTADD_PTADD7,
    ],
    /// Port B Data Direction Register
    PTBDD @ offset(Port::B, Function::DataDirection) => [
        PTBDD_PTBDD0, PTBDD_PTBDD1, PTBDD_PTBDD2, PTBDD_PTBDD3,
        PTBDD_PTBDD4, PTBDD_PTBDD5, PTBDD_PTBDD6, PTBDD_PTBDD7,
    ],
    /// Port C Data Direction Register
    PTCDD @ offset(Port::C, Function::DataDirection) => [
        PTCDD_PTCDD0, PTCDD_PTCDD1, PTCDD_PTCDD2, PTCDD_PTCDD3,
        PTCDD_PTCDD4, PTCDD_PTCDD5, PTCDD_PTCDD6, PTCDD_PTCDD7,
    ],
    /// Port D Data Direction Register
    PTDDD @ offset(Port::D, Function::DataDirection) => [
        PTDDD_PTDDD0, PTDDD_PTDDD1, PTDDD_PTDDD2, PTDDD_PTDDD3,
        PTDDD_PTDDD4, PTDDD_PTDDD5, PTDDD_PTDDD6, PTDDD_PTDDD7,
    ],
    /// Port A Interrupt Enable Register
    PTAIE @ offset(Port::A, Function::InterruptEnable) => [
        PTAIE_PTAIE0, PTAIE_PTAIE1, PTAIE_PTAIE2, PTAIE_PTAIE3,
        PTAIE_PTAIE4, PTAIE_PTAIE5, PTAIE_PTAIE6, PTAIE_PTAIE7,
    ],
    /// Port B Interrupt Enable Register
    PTBIE @ offset(Port::B, Function::InterruptEnable) => [
        PTBIE_PTBIE0, PTBIE_PTBIE1, PTBIE_PTBIE2, PTBIE_PTBIE3,
        PTBIE_PTBIE4, PTBIE_PTBIE5, PTBIE_PTBIE6, PTBIE_PTBIE7,
    ],
    /// Port C Interrupt Enable Register
    PTCIE @ offset(Port::C, Function::InterruptEnable) => [
        PTCIE_PTCIE0, PTCIE_PTCIE1, PTCIE_PTCIE2, PTCIE_PTCIE3,
        PTCIE_PTCIE4, PTCIE_PTCIE5, PTCIE_PTCIE6, PTCIE_PTCIE7,
    ],
    /// Port D Interrupt Enable Register
    PTDIE @ offset(Port::D, Function::InterruptEnable) => [
        PTDIE_PTDIE0, PTDIE_PTDIE1, PTDIE_PTDIE2, PTDIE_PTDIE3,
        PTDIE_PTDIE4, PTDIE_PTDIE5, PTDIE_PTDIE6, PTDIE_PTDIE7,
    ],
    /// Port A Edge Polarity Register
    PTAEP @ offset(Port::A, Function::EdgePolarity) => [
        PTAEP_PTAEP0, PTAEP_PTAEP1, PTAEP_PTAEP2, PTAEP_PTAEP3,
        PTAEP_PTAEP4, PTAEP_PTAEP5, PTAEP_PTAEP6, PTAEP_PTAEP7,
    ],
    /// Port B Edge Polarity Register
    PTBEP @ offset(Port::B, Function::EdgePolarity) => [
        PTBEP_PTBEP0, PTBEP_PTBEP1, PTBEP_PTBEP2, PTBEP_PTBEP3,
        PTBEP_PTBEP4, PTBEP_PTBEP5, PTBEP_PTBEP6, PTBEP_PTBEP7,
    ],
    /// Port C Edge Polarity Register
    PTCEP @ offset(Port::C, Function::EdgePolarity) => [
        PTCEP_PTCEP0, PTCEP_PTCEP1, PTCEP_PTCEP2, PTCEP_PTCEP3,
        PTCEP_PTCEP4, PTCEP_PTCEP5, PTCEP_PTCEP6, PTCEP_PTCEP7,
    ],
    /// Port D Edge Polarity Register
    PTDEP @ offset(Port::D, Function::EdgePolarity) => [
        PTDEP_PTDEP0, PTDEP_PTDEP1, PTDEP_PTDEP2, PTDEP_PTDEP3,
        PTDEP_PTDEP4, PTDEP_PTDEP5, PTDEP_PTDEP6, PTDEP_PTDEP7,
    ],
    /// Port A Interrupt Clear Register
    PTAIC @ offset(Port::A, Function::InterruptClear) => [
        PTAIC_PTAIC0, PTAIC_PTAIC1, PTAIC_PTAIC2, PTAIC_PTAIC3,
        PTAIC_PTAIC4, PTAIC_PTAIC5, PTAIC_PTAIC6, PTAIC_PTAIC7,
    ],
    /// Port B Interrupt Clear Register
    PTBIC @ offset(Port::B, Function::InterruptClear) => [
        PTBIC_PTBIC0, PTBIC_PTBIC1, PTBIC_PTBIC2, PTBIC_PTBIC3,
        PTBIC_PTBIC4, PTBIC_PTBIC5, PTBIC_PTBIC6, PTBIC_PTBIC7,
    ],
    /// Port C Interrupt Clear Register
    PTCIC @ offset(Port::C, Function::InterruptClear) => [
        PTCIC_PTCIC0, PTCIC_PTCIC1, PTCIC_PTCIC2, PTCIC_PTCIC3,
        PTCIC_PTCIC4, PTCIC_PTCIC5, PTCIC_PTCIC6, PTCIC_PTCIC7,
    ],
    /// Port D Interrupt Clear Register
    PTDIC @ offset(Port::D, Function::InterruptClear) => [
        PTDIC_PTDIC0, PTDIC_PTDIC1, PTDIC_PTDIC2, PTDIC_PTDIC3,
        PTDIC_PTDIC4, PTDIC_PTDIC5, PTDIC_PTDIC6, PTDIC_PTDIC7,
    ],
}
