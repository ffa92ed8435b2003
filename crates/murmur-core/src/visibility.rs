use murmur_types::models::{FriendEdge, User};

/// Whether `viewer` may read `target`'s profile and posts.
///
/// `target_edges` are the target's outgoing friend edges. Only the target's
/// own list matters: a viewer who added a private target gains nothing.
pub fn can_view(viewer: &str, target: &User, target_edges: &[FriendEdge]) -> bool {
    if viewer == target.login {
        return true;
    }
    if target.is_public {
        return true;
    }
    target_edges
        .iter()
        .any(|edge| edge.login == target.login && edge.friend == viewer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn user(login: &str, is_public: bool) -> User {
        User {
            login: login.into(),
            password_hash: String::new(),
            email: format!("{login}@example.com"),
            country_code: "RU".into(),
            is_public,
            phone: None,
            image: None,
        }
    }

    fn edge(login: &str, friend: &str) -> FriendEdge {
        FriendEdge {
            login: login.into(),
            friend: friend.into(),
            added_at: Utc::now(),
        }
    }

    #[test]
    fn self_always_visible() {
        let alice = user("alice", false);
        assert!(can_view("alice", &alice, &[]));
    }

    #[test]
    fn public_visible_to_anyone() {
        let alice = user("alice", true);
        assert!(can_view("bob", &alice, &[]));
    }

    #[test]
    fn private_requires_edge_from_target() {
        let alice = user("alice", false);
        assert!(!can_view("bob", &alice, &[]));
        assert!(can_view("bob", &alice, &[edge("alice", "bob")]));
    }

    #[test]
    fn viewer_edge_does_not_grant() {
        let alice = user("alice", false);
        // bob listing alice is the wrong direction
        assert!(!can_view("bob", &alice, &[edge("bob", "alice")]));
        assert!(!can_view("bob", &alice, &[edge("alice", "carol")]));
    }
}
