use efcodec::bitvec::BitVector;
use efcodec::{EliasFano, Error};
use proptest::prelude::*;

/// Sorted values plus a universe no smaller than the largest one.
fn sorted_sequence() -> impl Strategy<Value = (Vec<u64>, u64)> {
    (prop::collection::vec(0..10_000u64, 1..120), 0..5_000u64).prop_map(|(mut values, slack)| {
        values.sort_unstable();
        let universe = values.last().copied().unwrap_or(0) + slack;
        (values, universe)
    })
}

proptest! {
    #[test]
    fn test_next_round_trip((values, universe) in sorted_sequence()) {
        let mut ef = EliasFano::from_sorted(universe, &values).unwrap();
        ef.reset();

        let mut decoded = vec![ef.value()];
        while let Ok(v) = ef.next() {
            decoded.push(v);
        }
        prop_assert_eq!(&decoded, &values);
        prop_assert_eq!(ef.next(), Err(Error::EndReached));
        prop_assert_eq!(ef.position(), values.len() as u64 - 1);
    }

    #[test]
    fn test_move_from_every_position((values, universe) in sorted_sequence()) {
        let mut ef = EliasFano::from_sorted(universe, &values).unwrap();
        let n = values.len() as u64;

        for from in 0..n {
            for (target, &expected) in values.iter().enumerate() {
                ef.move_to(from).unwrap();
                prop_assert_eq!(ef.move_to(target as u64), Ok(expected));
                prop_assert_eq!(ef.value(), expected);
                prop_assert_eq!(ef.position(), target as u64);
            }
        }
    }

    #[test]
    fn test_idempotence((values, universe) in sorted_sequence(), pick in any::<prop::sample::Index>()) {
        let mut ef = EliasFano::from_sorted(universe, &values).unwrap();
        let target = pick.index(values.len()) as u64;

        ef.move_to(target).unwrap();
        let (value, position) = (ef.value(), ef.position());
        prop_assert_eq!(ef.move_to(ef.position()), Ok(value));
        prop_assert_eq!(ef.position(), position);

        ef.reset();
        ef.reset();
        prop_assert_eq!(ef.position(), 0);
        prop_assert_eq!(ef.value(), values[0]);
    }

    #[test]
    fn test_boundaries((values, universe) in sorted_sequence()) {
        let mut ef = EliasFano::from_sorted(universe, &values).unwrap();
        let n = values.len() as u64;
        let last = values[values.len() - 1];

        prop_assert_eq!(ef.move_to(n - 1), Ok(last));
        prop_assert_eq!(ef.next(), Err(Error::EndReached));
        prop_assert_eq!(ef.value(), last);
        prop_assert_eq!(ef.position(), n - 1);

        prop_assert_eq!(ef.move_to(n), Err(Error::IndexOutOfBounds { index: n, len: n }));
        prop_assert_eq!(ef.value(), last);
        prop_assert_eq!(ef.position(), n - 1);
    }

    #[test]
    fn test_cursor_and_get_agree((values, universe) in sorted_sequence()) {
        let ef = EliasFano::from_sorted(universe, &values).unwrap();
        prop_assert_eq!(ef.iter().collect::<Vec<_>>(), values.clone());

        let mut cursor = ef.cursor().unwrap();
        for (i, &expected) in values.iter().enumerate().rev() {
            prop_assert_eq!(cursor.move_to(i as u64), Ok(expected));
            prop_assert_eq!(ef.get(i as u64), Ok(expected));
        }
    }

    #[test]
    fn test_rejects_decreasing_input(mut values in prop::collection::vec(0..1000u64, 2..50)) {
        values.sort_unstable();
        let i = values.len() / 2;
        prop_assume!(values[i] > 0);
        values[i - 1] = values[i];
        values[i] -= 1;

        let mut ef = EliasFano::new(1000, values.len() as u64).unwrap();
        let err = ef.compress(&values).unwrap_err();
        let is_not_sorted = matches!(err, Error::NotSorted { .. });
        prop_assert!(is_not_sorted);
        prop_assert!(!ef.is_encoded());
    }

    #[test]
    fn test_select_matches_linear_scan(
        bits in prop::collection::vec(any::<bool>(), 1..400),
        from_raw in any::<prop::sample::Index>(),
        k in 0..20u64,
    ) {
        let mut bv = BitVector::new(bits.len() as u64);
        for (i, &b) in bits.iter().enumerate() {
            if b {
                bv.set(i as u64);
            }
        }
        let from = from_raw.index(bits.len());

        let expected = bits
            .iter()
            .enumerate()
            .skip(from)
            .filter(|&(_, &b)| b)
            .nth(k as usize)
            .map(|(i, _)| i as u64);
        prop_assert_eq!(bv.select_from(from as u64, k), expected);
        prop_assert_eq!(bv.count_ones(), bits.iter().filter(|&&b| b).count() as u64);
    }
}
