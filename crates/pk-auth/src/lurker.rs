use pk_core::Unique;
use pk_core::ID;

/// An unauthenticated connection: assigned an id so spectator traffic can
/// still be addressed, but never persisted.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Lurker {
    id: ID<Lurker>,
}

impl Unique for Lurker {
    fn id(&self) -> ID<Lurker> {
        self.id
    }
}
