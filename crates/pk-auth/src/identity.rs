use crate::Lurker;
use crate::Member;
use pk_core::Unique;
use pk_core::ID;

/// A connection's authentication state: anonymous until LOGIN succeeds.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum User {
    Anon(Lurker),
    Auth(Member),
}

impl User {
    pub fn id(&self) -> Option<ID<Member>> {
        match self {
            Self::Auth(m) => Some(m.id()),
            Self::Anon(_) => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Auth(_))
    }

    pub fn username(&self) -> Option<&str> {
        match self {
            Self::Auth(m) => Some(m.username()),
            Self::Anon(_) => None,
        }
    }
}

impl From<Lurker> for User {
    fn from(lurker: Lurker) -> Self {
        Self::Anon(lurker)
    }
}

impl From<Member> for User {
    fn from(member: Member) -> Self {
        Self::Auth(member)
    }
}

impl Default for User {
    fn default() -> Self {
        Self::Anon(Lurker::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anonymous_user_has_no_member_id() {
        let user = User::default();
        assert!(!user.is_authenticated());
        assert_eq!(user.id(), None);
        assert_eq!(user.username(), None);
    }

    #[test]
    fn authenticated_user_exposes_member_id_and_username() {
        let member = Member::new(ID::default(), "alice".into(), "alice@example.com".into());
        let user: User = member.clone().into();
        assert!(user.is_authenticated());
        assert_eq!(user.id(), Some(member.id()));
        assert_eq!(user.username(), Some("alice"));
    }
}
