use quickcheck::{Arbitrary, Gen};

mod arena;

/// The things a quicktest can do to a tree through its public API.
#[derive(Copy, Clone, Debug)]
pub enum Op<V> {
    /// Insert the V
    Insert(V),
    /// Delete a node holding V
    Remove(V),
}

impl<V> Arbitrary for Op<V>
where
    V: Arbitrary,
{
    fn arbitrary(g: &mut Gen) -> Self {
        if bool::arbitrary(g) {
            Op::Insert(V::arbitrary(g))
        } else {
            Op::Remove(V::arbitrary(g))
        }
    }
}
