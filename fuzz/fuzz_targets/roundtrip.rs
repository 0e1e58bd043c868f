#![no_main]
use libfuzzer_sys::fuzz_target;
use nahc::{CurveOrder, Point};

fuzz_target!(|data: &[u8]| {
    let Some((&order, data)) = data.split_first() else {
        return;
    };
    let Ok(order) = CurveOrder::new(order % 32 + 1) else {
        return;
    };
    let max = order.max_coordinate();
    let points = data
        .chunks_exact(8)
        .map(|chunk| {
            let (x, y) = chunk.split_at(4);
            let x = u32::from_le_bytes(x.try_into().expect("4 bytes"));
            let y = u32::from_le_bytes(y.try_into().expect("4 bytes"));
            Point::new(x & max, y & max)
        })
        .collect::<Vec<_>>();

    let codes = nahc::encode(order.get(), points.iter().copied())
        .collect::<Result<Vec<_>, _>>()
        .expect("valid points");
    for (point, code) in points.iter().zip(&codes) {
        assert_eq!(nahc::encode_point(order, *point), Ok(*code));
    }

    let result = nahc::decode(order.get(), codes)
        .collect::<Result<Vec<_>, _>>()
        .expect("valid codes");
    assert_eq!(result, points);
});
