// Declares one peripheral block from a table of `NAME @ offset => [bit names]`
// entries. Per entry it emits the register descriptor, a module holding its bits
// as `B0`..`B7`, and the flat bit constants under their symbolic names. The
// block gets its `REGISTERS` list, a `#[repr(C)]` overlay whose field offsets
// are checked against the table at compile time, and the `Instance` handle.
macro_rules! register_block {
    (
        base: $base:expr;
        $(
            $(#[$attr:meta])*
            $name:ident @ $offset:expr => [
                $b0:ident, $b1:ident, $b2:ident, $b3:ident,
                $b4:ident, $b5:ident, $b6:ident, $b7:ident $(,)?
            ]
        ),+ $(,)?
    ) => {
        /// Physical address of the first register of this block.
        pub const BASE_ADDRESS: u32 = $base;

        $(
            $(#[$attr])*
            pub const $name: $crate::Register = $crate::Register::new(
                stringify!($name),
                BASE_ADDRESS + $offset,
                &[
                    stringify!($b0), stringify!($b1), stringify!($b2), stringify!($b3),
                    stringify!($b4), stringify!($b5), stringify!($b6), stringify!($b7),
                ],
            );

            $(#[$attr])*
            pub mod $name {
                use $crate::Bit;

                pub const B0: Bit = super::$name.bit::<0>();
                pub const B1: Bit = super::$name.bit::<1>();
                pub const B2: Bit = super::$name.bit::<2>();
                pub const B3: Bit = super::$name.bit::<3>();
                pub const B4: Bit = super::$name.bit::<4>();
                pub const B5: Bit = super::$name.bit::<5>();
                pub const B6: Bit = super::$name.bit::<6>();
                pub const B7: Bit = super::$name.bit::<7>();
            }

            pub const $b0: $crate::Bit = $name::B0;
            pub const $b1: $crate::Bit = $name::B1;
            pub const $b2: $crate::Bit = $name::B2;
            pub const $b3: $crate::Bit = $name::B3;
            pub const $b4: $crate::Bit = $name::B4;
            pub const $b5: $crate::Bit = $name::B5;
            pub const $b6: $crate::Bit = $name::B6;
            pub const $b7: $crate::Bit = $name::B7;
        )+

        /// Registers of this block, in address order.
        pub const REGISTERS: &[$crate::Register] = &[$($name),+];

        #[repr(C)]
        pub struct RegisterBlock {
            $(
                $(#[$attr])*
                pub $name: $crate::RWRegister<u8>,
            )+
        }

        const _: () = assert!(::core::mem::size_of::<RegisterBlock>() == REGISTERS.len());
        $(
            const _: () = assert!(::core::mem::offset_of!(RegisterBlock, $name) as u32 == $offset);
        )+

        pub struct Instance {
            pub(crate) addr: u32,
            pub(crate) _marker: ::core::marker::PhantomData<*const RegisterBlock>,
        }

        impl ::core::ops::Deref for Instance {
            type Target = RegisterBlock;
            #[inline(always)]
            fn deref(&self) -> &RegisterBlock {
                unsafe { &*(self.addr as *const _) }
            }
        }
    };
}

pub mod gpio;
pub mod uart;
