use lights_out::{Coord, CoordError};
use proptest::prelude::*;

#[test]
fn test_key_format() {
    assert_eq!(Coord::new(0, 0).key(), "0-0");
    assert_eq!(Coord::new(3, 12).key(), "3-12");
    assert_eq!(Coord::new(10, 4).to_string(), "10-4");
}

#[test]
fn test_parse_valid() {
    assert_eq!("2-4".parse::<Coord>(), Ok(Coord::new(2, 4)));
    assert_eq!("0-10".parse::<Coord>(), Ok(Coord::new(0, 10)));
}

#[test]
fn test_parse_rejects_malformed() {
    assert_eq!("24".parse::<Coord>(), Err(CoordError::MissingSeparator));
    assert_eq!("-4".parse::<Coord>(), Err(CoordError::Empty));
    assert_eq!("2-".parse::<Coord>(), Err(CoordError::Empty));
    assert_eq!("+2-4".parse::<Coord>(), Err(CoordError::InvalidDigit));
    assert_eq!("2--4".parse::<Coord>(), Err(CoordError::InvalidDigit));
    assert_eq!(" 2-4".parse::<Coord>(), Err(CoordError::InvalidDigit));
    assert_eq!("a-b".parse::<Coord>(), Err(CoordError::InvalidDigit));
    assert_eq!("02-4".parse::<Coord>(), Err(CoordError::LeadingZero));
    assert_eq!("2-00".parse::<Coord>(), Err(CoordError::LeadingZero));
    assert_eq!(
        "99999999999999999999999-1".parse::<Coord>(),
        Err(CoordError::Overflow)
    );
}

#[test]
fn test_tuple_conversions() {
    let c: Coord = (3, 1).into();
    assert_eq!(c, Coord::new(3, 1));
    let t: (usize, usize) = c.into();
    assert_eq!(t, (3, 1));
}

proptest! {
    #[test]
    fn key_roundtrip(row in 0usize..1000, col in 0usize..1000) {
        let key = Coord::new(row, col).key();
        let decoded: Coord = key.parse().unwrap();
        prop_assert_eq!(decoded, Coord::new(row, col));
        prop_assert_eq!(decoded.key(), key);
    }
}
