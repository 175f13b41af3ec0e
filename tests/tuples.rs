mod common;

use std::fmt::Display;

use pretty_assertions::assert_eq;
use rangekit::tuple::{
    display, get, get_mut, DynTuple, Folder, Mapper, Tuple, TupleFold, TupleForEach, TupleMap,
    Visitor,
};
use rangekit::variant::Variant;
use rangekit::Error;

#[test]
fn get_returns_each_element() {
    common::init_tracing();
    let t = (10u8, 'b', "c", 4.5f32, String::from("e"));
    assert_eq!(*get::<0, _>(&t), 10);
    assert_eq!(*get::<1, _>(&t), 'b');
    assert_eq!(*get::<2, _>(&t), "c");
    assert_eq!(*get::<3, _>(&t), 4.5);
    assert_eq!(get::<4, _>(&t), "e");
    assert_eq!(<(u8, char, &str, f32, String)>::ARITY, 5);
}

#[test]
fn runtime_index_at_arity_is_out_of_range() {
    common::init_tracing();
    let t = (1, 2.0, 'c');
    for i in 0..3 {
        assert!(t.element(i).is_ok());
    }
    assert_eq!(
        t.element(3).unwrap_err(),
        Error::OutOfBounds { index: 3, len: 3 }
    );
    assert_eq!(t.element(0).unwrap().cast::<i32>(), Ok(&1));
    assert!(t.element(1).unwrap().cast::<i32>().is_err());
}

#[test]
fn largest_arity() {
    common::init_tracing();
    let mut t = (0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11);
    *get_mut::<11, _>(&mut t) += 100;
    assert_eq!(t.11, 111);
    assert_eq!(t.elements().count(), 12);
    assert_eq!(
        display(&t).to_string(),
        "tuple(0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 111)"
    );
}

struct Stringify;

impl<T: Display> Mapper<T> for Stringify {
    type Output = String;

    fn map(&mut self, value: T) -> String {
        value.to_string()
    }
}

struct Count<'a>(&'a mut usize);

impl<T> Visitor<T> for Count<'_> {
    fn visit(&mut self, _: &T) {
        *self.0 += 1;
    }
}

struct Join;

impl<T: Display> Folder<String, T> for Join {
    fn fold(&mut self, mut acc: String, value: &T) -> String {
        if !acc.is_empty() {
            acc.push('|');
        }
        acc.push_str(&value.to_string());
        acc
    }
}

#[test]
fn traversals_preserve_order() {
    common::init_tracing();
    let t = ("x", 2, false);
    assert_eq!(t.fold_elements(String::new(), Join), "x|2|false");

    let mut seen = 0;
    t.for_each_element(&mut Count(&mut seen));
    assert_eq!(seen, 3);

    let strings = t.map_elements(Stringify);
    assert_eq!(
        strings,
        ("x".to_string(), "2".to_string(), "false".to_string())
    );
}

#[test]
fn variants_from_tuples_are_copies() {
    common::init_tracing();
    let t = (String::from("owned"), 7u64);
    let mut first: Variant = t.element(0).unwrap();
    first.cast_mut::<String>().unwrap().push('!');
    assert_eq!(t.0, "owned");
    assert_eq!(first.to_string(), "variant(owned!)");
    assert_eq!(first.clone().into_inner::<String>(), Ok("owned!".to_string()));
    assert_eq!(
        first.into_inner::<u64>(),
        Err(Error::TypeMismatch {
            expected: "u64",
            found: "alloc::string::String"
        })
    );
}

#[test]
fn variant_round_trip() {
    common::init_tracing();
    let v = Variant::new(42);
    assert_eq!(v.cast::<i32>(), Ok(&42));
    assert_eq!(
        v.cast::<f64>(),
        Err(Error::TypeMismatch {
            expected: "f64",
            found: "i32"
        })
    );
    assert_eq!(format!("{v}"), "variant(42)");
}
