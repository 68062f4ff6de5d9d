/// Which child slot of a node is meant. Most navigation in the tree comes in mirrored pairs
/// (`minimum`/`maximum`, `successor`/`predecessor`) so they're written once in terms of a `Side`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}

impl Side {
    pub(crate) fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}
