use efcodec::{EliasFano, Error};

#[test]
fn dense_identity_sequence() {
    let values: Vec<u64> = (0..1000).collect();
    let mut ef = EliasFano::new(1000, 1000).unwrap();
    ef.compress(&values).unwrap();
    assert_eq!(ef.value(), 0);

    for expected in 1..1000u64 {
        assert_eq!(ef.next(), Ok(expected));
    }
    assert_eq!(ef.next(), Err(Error::EndReached));
    assert_eq!(ef.value(), 999);
}

#[test]
fn sparse_sequence_navigation() {
    let mut ef = EliasFano::new(1000, 5).unwrap();
    ef.compress(&[0, 5, 9, 800, 1000]).unwrap();
    assert_eq!(ef.value(), 0);

    assert_eq!(ef.move_to(4), Ok(1000));
    ef.reset();
    assert_eq!(ef.next(), Ok(5));
    assert_eq!(ef.next(), Ok(9));
    assert_eq!(ef.move_to(1), Ok(5));
    assert_eq!(ef.position(), 1);
}

#[test]
fn unsorted_input_is_reported() {
    let mut ef = EliasFano::new(10, 2).unwrap();
    let err = ef.compress(&[5, 3]).unwrap_err();
    assert!(matches!(err, Error::NotSorted { index: 1, .. }));
    assert!(!ef.is_encoded());
    assert_eq!(ef.move_to(0), Err(Error::NotEncoded));

    // The codec is still usable with valid input.
    ef.compress(&[3, 5]).unwrap();
    assert_eq!(ef.iter().collect::<Vec<_>>(), vec![3, 5]);
}

#[test]
fn repeated_values_share_a_bucket() {
    let values = [100u64; 64];
    let mut ef = EliasFano::from_sorted(100, &values).unwrap();
    assert_eq!(ef.move_to(63), Ok(100));
    assert_eq!(ef.move_to(0), Ok(100));
    assert_eq!((&ef).into_iter().count(), 64);
}

#[test]
fn parallel_cursors_over_shared_storage() {
    let values: Vec<u64> = (0..5000u64).map(|i| i * 7 + i % 3).collect();
    let universe = *values.last().unwrap();
    let ef = EliasFano::from_sorted(universe, &values).unwrap();

    std::thread::scope(|s| {
        for t in 0..4u64 {
            let ef = &ef;
            let values = &values;
            s.spawn(move || {
                let mut cursor = ef.cursor().unwrap();
                let mut i = t;
                while i < values.len() as u64 {
                    assert_eq!(cursor.move_to(i), Ok(values[i as usize]));
                    i += 4;
                }
                cursor.reset();
                assert_eq!(cursor.value(), values[0]);
            });
        }
    });
}

#[test]
fn describe_parameters() {
    let ef = EliasFano::from_sorted(1000, &[0, 5, 9, 800, 1000]).unwrap();
    ef.describe();
    let layout = ef.layout();
    assert_eq!(layout.universe(), 1000);
    assert_eq!(layout.n(), 5);
    assert_eq!(layout.lower_bits(), 8);
    assert_eq!(layout.mask(), 0xFF);
    assert_eq!(layout.lower_bits_offset(), layout.higher_bits_length());
    assert_eq!(ef.size(), 5);
}
