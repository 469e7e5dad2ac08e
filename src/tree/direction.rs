use core::fmt::Display;

/// Number of quadrant directions. Direction arithmetic is taken modulo this.
pub const DIRECTION_COUNT: usize = 4;

/// One of the four diagonal quadrants around a node, in clockwise order.
///
/// The discriminants are significant: rotating by `k` steps adds `k` modulo
/// [`DIRECTION_COUNT`], so `opposite` is two steps away and `next`/`prev` are
/// the neighbouring quadrants.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[repr(u8)]
pub enum Direction {
    UpLeft = 0,
    UpRight = 1,
    DownRight = 2,
    DownLeft = 3,
}

impl Direction {
    pub const ALL: [Direction; DIRECTION_COUNT] = [
        Direction::UpLeft,
        Direction::UpRight,
        Direction::DownRight,
        Direction::DownLeft,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn from_index(i: usize) -> Self {
        Self::ALL[i % DIRECTION_COUNT]
    }

    /// Rotate clockwise by `steps` quadrants.
    pub const fn rotate(self, steps: usize) -> Self {
        // reduce first so adding can't overflow for huge `steps`
        Self::from_index(self.index() + steps % DIRECTION_COUNT)
    }

    pub const fn opposite(self) -> Self {
        self.rotate(2)
    }

    pub const fn next(self) -> Self {
        self.rotate(1)
    }

    pub const fn prev(self) -> Self {
        self.rotate(DIRECTION_COUNT - 1)
    }

    pub const fn is_up(self) -> bool {
        matches!(self, Direction::UpLeft | Direction::UpRight)
    }

    pub const fn is_left(self) -> bool {
        matches!(self, Direction::UpLeft | Direction::DownLeft)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Direction::UpLeft => "LU",
            Direction::UpRight => "RU",
            Direction::DownRight => "RD",
            Direction::DownLeft => "LD",
        }
    }

    /// First child slot a walk looks at when it has entered a node via `incoming`.
    ///
    /// That is the slot straight ahead. The root has no incoming direction and behaves as if it
    /// had been entered through the slot one past the last direction.
    pub const fn walk_start(incoming: Option<Direction>) -> Self {
        match incoming {
            Some(dir) => dir.opposite(),
            None => Self::from_index(DIRECTION_COUNT + 2),
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
