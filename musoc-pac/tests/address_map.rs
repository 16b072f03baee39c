use musoc_pac::{gpio, lookup, metadata, uart, Register};

const EXPECTED: &[(&str, u32)] = &[
    ("PTAD", 0x1000_0000),
    ("PTBD", 0x1000_0001),
    ("PTCD", 0x1000_0002),
    ("PTDD", 0x1000_0003),
    ("PTADD", 0x1000_0004),
    ("PTBDD", 0x1000_0005),
    ("PTCDD", 0x1000_0006),
    ("PTDDD", 0x1000_0007),
    ("PTAIE", 0x1000_0008),
    ("PTBIE", 0x1000_0009),
    ("PTCIE", 0x1000_000a),
    ("PTDIE", 0x1000_000b),
    ("PTAEP", 0x1000_000c),
    ("PTBEP", 0x1000_000d),
    ("PTCEP", 0x1000_000e),
    ("PTDEP", 0x1000_000f),
    ("PTAIC", 0x1000_0010),
    ("PTBIC", 0x1000_0011),
    ("PTCIC", 0x1000_0012),
    ("PTDIC", 0x1000_0013),
    ("BUFFER", 0x1100_0000),
    ("TX_COUNT_L", 0x1100_0001),
    ("TX_COUNT_H", 0x1100_0002),
    ("RX_COUNT_L", 0x1100_0003),
    ("RX_COUNT_H", 0x1100_0004),
];

#[test]
fn every_register_at_its_documented_address() {
    let all: Vec<Register> = metadata::registers().collect();
    assert_eq!(all.len(), EXPECTED.len());
    for (register, &(name, address)) in all.iter().zip(EXPECTED) {
        assert_eq!(register.name(), name);
        assert_eq!(register.address(), address, "{}", name);
        assert_eq!(lookup(name), Ok(*register));
    }
}

#[test]
fn named_constants() {
    assert_eq!(gpio::PTAD.address(), 0x1000_0000);
    assert_eq!(gpio::PTDDD.address(), 0x1000_0007);
    assert_eq!(gpio::PTCIE.address(), 0x1000_000a);
    assert_eq!(gpio::PTAEP.address(), 0x1000_000c);
    assert_eq!(gpio::PTBIC.address(), 0x1000_0011);
    assert_eq!(uart::BUFFER.address(), 0x1100_0000);
    assert_eq!(uart::TX_COUNT_H.address(), 0x1100_0002);
    assert_eq!(uart::RX_COUNT_H.address(), 0x1100_0004);
    assert_eq!(gpio::BASE_ADDRESS, 0x1000_0000);
    assert_eq!(uart::BASE_ADDRESS, 0x1100_0000);
}

#[test]
fn addresses_and_names_are_unique() {
    let all: Vec<Register> = metadata::registers().collect();
    for (i, a) in all.iter().enumerate() {
        for b in &all[i + 1..] {
            assert_ne!(a.address(), b.address(), "{} aliases {}", a, b);
            assert_ne!(a.name(), b.name());
        }
    }
}

#[test]
fn blocks_are_contiguous_and_disjoint() {
    for block in metadata::BLOCKS {
        let base = block[0].address();
        for (i, register) in block.iter().enumerate() {
            assert_eq!(register.address(), base + i as u32);
        }
    }
    assert_eq!(gpio::REGISTERS.len(), 20);
    assert_eq!(uart::REGISTERS.len(), 5);
    assert!(gpio::REGISTERS.iter().all(|r| !uart::REGISTERS.contains(r)));
}

#[test]
fn mapped_windows() {
    assert!(musoc_pac::is_mapped(0x1000_0000));
    assert!(musoc_pac::is_mapped(0x1000_0013));
    assert!(!musoc_pac::is_mapped(0x1000_0014));
    assert!(musoc_pac::is_mapped(0x1100_0004));
    assert!(!musoc_pac::is_mapped(0x1100_0005));
    assert!(!musoc_pac::is_mapped(0x0fff_ffff));
    assert!(!musoc_pac::is_mapped(0));
}

#[test]
fn off_table_names_never_alias_a_register() {
    for name in ["PTED", "PTEDD", "PTAD8", "TX_COUNT", "STATUS"] {
        assert_eq!(lookup(name), Err(musoc_pac::Error::UnknownRegister), "{}", name);
    }
    assert_eq!(musoc_pac::lookup_bit("PTED_PTED0"), Err(musoc_pac::Error::UnknownBit));
    assert_eq!(musoc_pac::lookup_bit("PTAD_PTAD8"), Err(musoc_pac::Error::UnknownBit));

    // Each mapped address resolves to exactly its declared register.
    for &(name, address) in EXPECTED {
        let register: Register = musoc_pac::find(address).expect(name);
        assert_eq!(register.name(), name);
    }
    assert_eq!(musoc_pac::find(0x1000_0014), None);
}

#[test]
fn every_bit_name_follows_its_register() {
    for register in gpio::REGISTERS {
        for bit in register.bits() {
            let expected = format!("{0}_{0}{1}", register.name(), bit.index());
            assert_eq!(bit.name(), expected);
            assert_eq!(musoc_pac::lookup_bit(&expected), Ok(bit));
        }
    }
    for register in uart::REGISTERS {
        for bit in register.bits() {
            let expected = format!("{}_B{}", register.name(), bit.index());
            assert_eq!(bit.name(), expected);
            assert_eq!(musoc_pac::lookup_bit(&expected), Ok(bit));
        }
    }
}
