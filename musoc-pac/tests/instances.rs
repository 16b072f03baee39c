use core::mem::offset_of;
use musoc_pac::{gpio, uart};

#[test]
fn take_is_exclusive_until_released() {
    let port = gpio::GPIO::take().expect("first take");
    assert!(gpio::GPIO::take().is_none());
    gpio::GPIO::release(port);

    let port = gpio::GPIO::take().expect("take after release");
    gpio::GPIO::release(port);

    let stolen = unsafe { gpio::GPIO::steal() };
    assert!(gpio::GPIO::take().is_none());
    gpio::GPIO::release(stolen);
    assert!(gpio::GPIO::take().is_some());
}

#[test]
#[should_panic(expected = "Released a peripheral which was not taken")]
fn releasing_an_untaken_instance_panics() {
    uart::UART::release(unsafe { uart::UART::conjure() });
}

#[test]
fn raw_pointers_point_at_the_blocks() {
    assert_eq!(gpio::GPIO as usize, 0x1000_0000);
    assert_eq!(uart::UART as usize, 0x1100_0000);
}

#[test]
fn register_block_fields_line_up_with_descriptors() {
    let gpio_fields = [
        (offset_of!(gpio::RegisterBlock, PTAD), gpio::PTAD),
        (offset_of!(gpio::RegisterBlock, PTCDD), gpio::PTCDD),
        (offset_of!(gpio::RegisterBlock, PTBIE), gpio::PTBIE),
        (offset_of!(gpio::RegisterBlock, PTDEP), gpio::PTDEP),
        (offset_of!(gpio::RegisterBlock, PTDIC), gpio::PTDIC),
    ];
    for (offset, register) in gpio_fields {
        assert_eq!(gpio::BASE_ADDRESS + offset as u32, register.address(), "{}", register);
    }

    let uart_fields = [
        (offset_of!(uart::RegisterBlock, BUFFER), uart::BUFFER),
        (offset_of!(uart::RegisterBlock, TX_COUNT_L), uart::TX_COUNT_L),
        (offset_of!(uart::RegisterBlock, RX_COUNT_H), uart::RX_COUNT_H),
    ];
    for (offset, register) in uart_fields {
        assert_eq!(uart::BASE_ADDRESS + offset as u32, register.address(), "{}", register);
    }

    assert_eq!(core::mem::size_of::<gpio::RegisterBlock>(), 20);
    assert_eq!(core::mem::size_of::<uart::RegisterBlock>(), 5);
}
