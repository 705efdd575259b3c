#![no_main]
use efcodec::{EliasFano, Error};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (Vec<u64>, u64, Vec<u16>)| {
    let (mut values, slack, moves) = data;
    if values.is_empty() {
        return;
    }
    values.sort_unstable();
    let universe = values[values.len() - 1].saturating_add(slack % 1024);

    let mut ef = match EliasFano::from_sorted(universe, &values) {
        Ok(ef) => ef,
        Err(Error::CapacityOverflow { .. }) => return,
        Err(e) => panic!("valid input rejected: {e}"),
    };

    let n = values.len() as u64;
    for m in moves {
        let target = m as u64;
        let before = (ef.position(), ef.value());
        match ef.move_to(target) {
            Ok(v) => {
                assert_eq!(v, values[target as usize]);
                assert_eq!(ef.position(), target);
            }
            Err(Error::IndexOutOfBounds { .. }) => {
                assert!(target >= n);
                assert_eq!((ef.position(), ef.value()), before);
            }
            Err(e) => panic!("unexpected error: {e}"),
        }
    }

    ef.reset();
    let decoded: Vec<u64> = ef.iter().collect();
    assert_eq!(decoded, values);
});
