//! Property tests driving the tree with random sequences of operations and
//! comparing it against a `BTreeSet`.

mod layout;
mod tree;

use quickcheck::{Arbitrary, Gen};

/// An enum for the various kinds of "things" to do to
/// the tree in a quicktest.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Op {
    /// Insert the key into the tree
    Insert(i64),
    /// Delete the key from the tree
    Delete(i64),
}

impl Arbitrary for Op {
    /// Tells quickcheck how to randomly choose an operation. Keys come from
    /// a small range so deletes regularly hit keys that are present.
    fn arbitrary(g: &mut Gen) -> Self {
        let key = i64::from(i8::arbitrary(g));
        if bool::arbitrary(g) {
            Op::Insert(key)
        } else {
            Op::Delete(key)
        }
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        match *self {
            Op::Insert(k) => Box::new(k.shrink().map(Op::Insert)),
            Op::Delete(k) => Box::new(k.shrink().map(Op::Delete)),
        }
    }
}
