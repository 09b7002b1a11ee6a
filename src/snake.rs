use crate::input::Direction;

/// Grid position in logical cell coordinates.
///
/// Signed so the head can hold an out-of-bounds coordinate for the one
/// instant between moving and the wall check resolving it.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

/// Heading every snake starts a session with.
pub const INITIAL_DIRECTION: Direction = Direction::Right;

/// Mutable snake state: ordered body segments plus the current heading.
///
/// Index 0 is the head; the body is never empty. The start cell is kept
/// so `reset` can restore the initial single-segment body.
#[derive(Debug, Clone)]
pub struct Snake {
    parts: Vec<Position>,
    direction: Direction,
    start: Position,
}

impl Snake {
    /// Creates a one-cell snake at `start` with the default heading.
    #[must_use]
    pub fn new(start: Position) -> Self {
        Self {
            parts: vec![start],
            direction: INITIAL_DIRECTION,
            start,
        }
    }

    /// Creates a snake from explicit body segments (index 0 is the head).
    ///
    /// The first segment doubles as the reset anchor.
    ///
    /// # Panics
    ///
    /// Panics when `segments` is empty.
    #[must_use]
    pub fn from_segments(segments: Vec<Position>, direction: Direction) -> Self {
        assert!(!segments.is_empty(), "snake body must not be empty");
        let start = segments[0];

        Self {
            parts: segments,
            direction,
            start,
        }
    }

    /// Moves the head one cell along the current heading.
    ///
    /// Deliberately no bounds clamping: an out-of-range head is valid
    /// transient state that the wall check resolves on the same tick.
    /// `shift_parts` has to run first so the trail follows the pre-move
    /// head position.
    pub fn advance_head(&mut self) {
        let head = &mut self.parts[0];
        match self.direction {
            Direction::Up => head.y -= 1,
            Direction::Down => head.y += 1,
            Direction::Left => head.x -= 1,
            Direction::Right => head.x += 1,
        }
    }

    /// Copies each segment's predecessor position into it, tail first.
    ///
    /// Running tail-to-head is the contract: the head's pre-move position
    /// becomes segment 1, segment 1's becomes segment 2, and so on.
    /// Reversing the order would smear the head over the whole trail.
    pub fn shift_parts(&mut self) {
        for i in (1..self.parts.len()).rev() {
            self.parts[i] = self.parts[i - 1];
        }
    }

    /// Appends a new tail segment coincident with the current head.
    ///
    /// The new segment is shifted into its own cell starting next tick.
    pub fn grow(&mut self) {
        self.parts.push(self.parts[0]);
    }

    /// Restores the initial heading and single-segment body.
    pub fn reset(&mut self) {
        self.direction = INITIAL_DIRECTION;
        self.parts.clear();
        self.parts.push(self.start);
    }

    /// Commits a new heading, rejecting immediate reversals.
    ///
    /// A snake of length >= 2 turning into its own neck would die on the
    /// spot, so the exact opposite of the current heading is ignored.
    /// A one-cell snake has no neck and may turn anywhere.
    pub fn set_direction(&mut self, direction: Direction) {
        if self.parts.len() >= 2 && direction == self.direction.opposite() {
            return;
        }

        self.direction = direction;
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        self.parts[0]
    }

    /// Returns all body segments, head first.
    #[must_use]
    pub fn segments(&self) -> &[Position] {
        &self.parts
    }

    /// Returns every segment except the head.
    #[must_use]
    pub fn trailing_segments(&self) -> &[Position] {
        &self.parts[1..]
    }

    /// Returns the current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Always false; the body invariantly holds at least one segment.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Returns the current heading.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }
}
