mod common;

use pretty_assertions::assert_eq;
use rangekit::capabilities;
use rangekit::range::{
    all, any, arange, constify, enumerate, filter, longzip, map, product, range, range_step,
    range_to, reduce, reverse, sum, zip, ArrayRange, Capabilities, FiniteRange, ForwardRange,
    Map, NumberRange, RandomAccessRange, RangeExt, Reverse, Tier,
};
use rangekit::Error;

#[test]
fn iteration_visits_exactly_len_elements() {
    common::init_tracing();
    let data = [5, 8, 13, 21, 34];
    let r = map(|x: &i32| x * 2, arange(&data));
    let expected = r.len();
    let mut visited = 0;
    for _ in r {
        visited += 1;
    }
    assert_eq!(visited, expected);

    let mut numbers = range_step(0, 100, 7).unwrap();
    let len = numbers.len();
    assert_eq!(numbers.cursor().count(), len);
    assert!(numbers.is_empty());
}

#[test]
fn double_reverse_is_identity() {
    common::init_tracing();
    let data = ["a", "b", "c", "d"];
    let forward: Vec<_> = arange(&data).into_cursor().collect();
    let twice: Vec<_> = reverse(reverse(arange(&data))).into_cursor().collect();
    assert_eq!(forward, twice);

    let mapped = map(|x: i32| x * x, range(-3, 3));
    let back_and_forth: Vec<_> = reverse(reverse(mapped.clone())).into_cursor().collect();
    assert_eq!(back_and_forth, mapped.into_cursor().collect::<Vec<_>>());
}

#[test]
fn zip_and_longzip_lengths() {
    common::init_tracing();
    let short = range_to(3);
    let long = range(10, 15);

    let zipped: Vec<_> = zip((short.clone(), long.clone())).into_cursor().collect();
    assert_eq!(zipped.len(), short.len().min(long.len()));

    let padded: Vec<_> = longzip(0, (short.clone(), long.clone()))
        .into_cursor()
        .collect();
    assert_eq!(padded.len(), short.len().max(long.len()));
    assert_eq!(padded[3..].to_vec(), vec![(0, 13), (0, 14)]);
}

#[test]
fn sum_and_product() {
    common::init_tracing();
    assert_eq!(sum(range(1, 10)), Ok(45));
    assert_eq!(product(range(1, 10)), Ok(362880));
    assert_eq!(sum(range(1.0, 4.0)), Ok(6.0));
}

#[test]
fn reducing_nothing_fails() {
    common::init_tracing();
    assert_eq!(reduce(|a, b| a.max(b), range_to(0i32)), Err(Error::EmptyRange));
    let nothing: [u8; 0] = [];
    assert_eq!(
        reduce(|a, _| a, arange(&nothing)).unwrap_err().to_string(),
        "cannot reduce an empty range"
    );
    let odd_evens = filter(|x: &i32| x % 2 == 0, range_step(1, 10, 2).unwrap());
    assert_eq!(sum(odd_evens), Err(Error::EmptyRange));
}

#[test]
fn pipelines_compose() {
    common::init_tracing();
    let words = ["range", "tuple", "variant", "expr", "property"];
    let long_words = filter(|(_, w): &(usize, &&str)| w.len() > 5, enumerate(arange(&words), 1));
    let found: Vec<_> = map(|(i, w): (usize, &&str)| format!("{i}:{w}"), long_words)
        .into_cursor()
        .collect();
    assert_eq!(found, vec!["3:variant", "5:property"]);

    assert!(any(map(|w: &&str| w.contains('x'), arange(&words))));
    assert!(!all(map(|w: &&str| w.len() == 5, arange(&words))));
    assert!(all(constify(map(|w: &&str| !w.is_empty(), arange(&words)))));
}

#[test]
fn random_access_through_adapters() {
    common::init_tracing();
    let r = reverse(enumerate(range_step(0, 50, 10).unwrap(), 0));
    assert_eq!(r.len(), 5);
    assert_eq!(r.at(0), Ok((4, 40)));
    assert_eq!(r.at(4), Ok((0, 0)));
    assert_eq!(r.at(5), Err(Error::OutOfBounds { index: 5, len: 5 }));
}

#[test]
fn array_ranges_are_views() {
    common::init_tracing();
    let mut storage = vec![1, 2, 3, 4];
    {
        let mut r = ArrayRange::new(&storage[1..]);
        r.pop_front();
        assert_eq!(r.as_slice(), &[3, 4]);
    }
    storage.push(5);
    assert_eq!(ArrayRange::new(&storage).len(), 5);
}

#[test]
fn capabilities_follow_the_input() {
    type Numbers = NumberRange<i64>;
    type Squares = Map<fn(i64) -> i64, Numbers>;
    type Evens = rangekit::range::Filter<fn(&i64) -> bool, Numbers>;

    assert_eq!(capabilities!(Numbers), Capabilities::ALL);
    assert_eq!(capabilities!(Squares), Capabilities::ALL);
    assert_eq!(capabilities!(Reverse<Squares>), Capabilities::ALL);
    assert_eq!(capabilities!(Evens).tiers(), vec![Tier::Forward]);
    assert!(!capabilities!(String).is_range());
    assert_eq!(capabilities!(String).to_string(), "not a range");
    assert_eq!(
        capabilities!(ArrayRange<'static, u8>).to_string(),
        "forward + bidirectional + random-access + finite"
    );
}
