// Access functions and raw pointer for one peripheral instance. Expects
// `Instance`, `RegisterBlock` and `BASE_ADDRESS` in the invoking module.
macro_rules! instance {
    ($name:ident) => {
        #[doc = concat!("Access functions for the ", stringify!($name), " peripheral instance")]
        pub mod $name {
            use super::{Instance, BASE_ADDRESS};
            use core::cell::Cell;
            use critical_section::Mutex;

            const INSTANCE: Instance = Instance {
                addr: BASE_ADDRESS,
                _marker: ::core::marker::PhantomData,
            };

            static TAKEN: Mutex<Cell<bool>> = Mutex::new(Cell::new(false));

            #[doc = concat!("Safe access to ", stringify!($name))]
            ///
            /// This function returns `Some(Instance)` if this instance is not
            /// currently taken, and `None` if it is. This ensures that if you
            /// do get `Some(Instance)`, you are ensured unique access to
            /// the peripheral and there cannot be data races (unless other
            /// code uses `unsafe`, of course). You can then pass the
            /// `Instance` around to other functions as required. When you're
            /// done with it, you can call `release(instance)` to return it.
            ///
            /// `Instance` itself dereferences to a `RegisterBlock`, which
            /// provides access to the peripheral's registers.
            #[inline]
            pub fn take() -> Option<Instance> {
                let taken = critical_section::with(|cs| TAKEN.borrow(cs).replace(true));
                if taken {
                    None
                } else {
                    trace!("{} taken", stringify!($name));
                    Some(INSTANCE)
                }
            }

            #[doc = concat!("Release exclusive access to ", stringify!($name))]
            ///
            /// This function allows you to return an `Instance` so that it
            /// is available to `take()` again. This function will panic if
            /// you return a different `Instance` or if this instance is not
            /// already taken.
            #[inline]
            pub fn release(inst: Instance) {
                let released = critical_section::with(|cs| {
                    let taken = TAKEN.borrow(cs);
                    if taken.get() && inst.addr == INSTANCE.addr {
                        taken.set(false);
                        true
                    } else {
                        false
                    }
                });
                if !released {
                    panic!("Released a peripheral which was not taken");
                }
                debug!("{} released", stringify!($name));
            }

            #[doc = concat!("Unsafely steal ", stringify!($name))]
            ///
            /// This function is similar to take() but forcibly takes the
            /// Instance, marking it as taken irregardless of its previous
            /// state.
            ///
            /// # Safety
            /// Any other live `Instance` of this peripheral now aliases the
            /// returned one.
            #[inline]
            pub unsafe fn steal() -> Instance {
                critical_section::with(|cs| TAKEN.borrow(cs).set(true));
                trace!("{} stolen", stringify!($name));
                INSTANCE
            }

            #[doc = concat!("Unsafely obtains an instance of ", stringify!($name))]
            ///
            /// This will not check if `take()` or `steal()` have already been called
            /// before. It is the caller's responsibility to use the returned instance
            /// in a safe way that does not conflict with other instances.
            ///
            /// # Safety
            /// See above.
            #[inline]
            pub unsafe fn conjure() -> Instance {
                INSTANCE
            }
        }

        #[doc = concat!("Raw pointer to ", stringify!($name))]
        ///
        /// Dereferencing this is unsafe because you are not ensured unique
        /// access to the peripheral, so you may encounter data races with
        /// other users of this peripheral. It is up to you to ensure you
        /// will not cause data races.
        pub const $name: *const RegisterBlock = BASE_ADDRESS as *const _;
    };
}

pub mod gpio;
pub mod uart;
