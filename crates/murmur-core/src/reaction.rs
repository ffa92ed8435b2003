use murmur_types::models::{Direction, Mark};

/// Reaction state of one viewer on one post.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkState {
    NoMark,
    Liked,
    Disliked,
}

/// What has to happen to the stored mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkChange {
    Unchanged,
    Create { liked: bool },
    Flip { liked: bool },
}

/// Result of feeding one reaction into [`MarkState::apply`]. The deltas are
/// added to the post's counters in the same transaction as the mark change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub next: MarkState,
    pub change: MarkChange,
    pub likes_delta: i64,
    pub dislikes_delta: i64,
}

impl MarkState {
    pub fn of(mark: Option<&Mark>) -> Self {
        match mark {
            None => Self::NoMark,
            Some(m) if m.liked => Self::Liked,
            Some(_) => Self::Disliked,
        }
    }

    /// There is no way back to `NoMark`: once a viewer reacted they can only
    /// switch sides.
    pub fn apply(self, direction: Direction) -> Transition {
        use Direction::*;
        use MarkState::*;

        match (self, direction) {
            (NoMark, Like) => Transition {
                next: Liked,
                change: MarkChange::Create { liked: true },
                likes_delta: 1,
                dislikes_delta: 0,
            },
            (NoMark, Dislike) => Transition {
                next: Disliked,
                change: MarkChange::Create { liked: false },
                likes_delta: 0,
                dislikes_delta: 1,
            },
            (Liked, Like) | (Disliked, Dislike) => Transition {
                next: self,
                change: MarkChange::Unchanged,
                likes_delta: 0,
                dislikes_delta: 0,
            },
            (Liked, Dislike) => Transition {
                next: Disliked,
                change: MarkChange::Flip { liked: false },
                likes_delta: -1,
                dislikes_delta: 1,
            },
            (Disliked, Like) => Transition {
                next: Liked,
                change: MarkChange::Flip { liked: true },
                likes_delta: 1,
                dislikes_delta: -1,
            },
        }
    }
}

impl Transition {
    pub fn is_noop(&self) -> bool {
        self.change == MarkChange::Unchanged
    }
}
