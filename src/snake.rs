use std::collections::VecDeque;

use crate::{Coords, GridInt};
use Direction::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right
}

impl Direction {
    pub fn opposite(self) -> Direction {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }

    pub fn delta(self) -> (GridInt, GridInt) {
        match self {
            Up => (0, -1),
            Down => (0, 1),
            Left => (-1, 0),
            Right => (1, 0),
        }
    }
}

/// The head is tracked on its own; `body` holds previous head positions,
/// oldest at the front.
#[derive(Clone, Debug)]
pub struct Snake {
    head: Coords,
    body: VecDeque<Coords>,
    direction: Direction,
}

impl Snake {
    pub fn new(head: Coords, direction: Direction) -> Self {
        Snake { head, body: VecDeque::new(), direction }
    }

    pub fn head(&self) -> Coords {
        self.head
    }

    pub fn body(&self) -> &VecDeque<Coords> {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// The old head becomes the newest body segment.
    pub fn advance(&mut self, direction: Direction) {
        self.body.push_back(self.head);

        let (dx, dy) = direction.delta();
        self.head = (self.head.0 + dx, self.head.1 + dy);
    }

    /// Drops the oldest segment if the body is longer than `max_len`.
    /// Returns the freed cell so it can be erased from the screen.
    pub fn trim_to_length(&mut self, max_len: usize) -> Option<Coords> {
        if self.body.len() > max_len {
            self.body.pop_front()
        } else {
            None
        }
    }

    pub fn collides_with_self(&self) -> bool {
        self.body.contains(&self.head)
    }

    pub fn is_out_of_bounds(&self, width: GridInt, height: GridInt) -> bool {
        let (x, y) = self.head;
        x < 1 || x >= width - 1 || y < 1 || y >= height - 1
    }

    pub fn occupies(&self, pos: Coords) -> bool {
        self.head == pos || self.body.contains(&pos)
    }

    /// Returns false, leaving the heading alone, on a 180° turn.
    pub fn set_direction(&mut self, new_direction: Direction) -> bool {
        if new_direction == self.direction.opposite() {
            return false;
        }

        self.direction = new_direction;
        true
    }

    pub fn head_char(&self) -> char {
        match self.direction {
            Up => '^',
            Down => 'v',
            Left => '<',
            Right => '>',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_moves_old_head_into_body() {
        let mut snake = Snake::new((5, 5), Right);
        snake.advance(Right);
        snake.advance(Down);

        assert_eq!(snake.head(), (6, 6));
        assert_eq!(snake.body().iter().copied().collect::<Vec<_>>(), vec![(5, 5), (6, 5)]);
        assert!(!snake.body().contains(&snake.head()));
    }

    #[test]
    fn trim_removes_only_the_oldest_segment() {
        let mut snake = Snake::new((5, 5), Right);
        for _ in 0..3 {
            snake.advance(Right);
        }

        assert_eq!(snake.trim_to_length(3), None);
        assert_eq!(snake.trim_to_length(1), Some((5, 5)));
        assert_eq!(snake.len(), 2);
        assert_eq!(snake.body().front(), Some(&(6, 5)));
    }

    #[test]
    fn reversal_is_rejected_and_turns_are_accepted() {
        let mut snake = Snake::new((5, 5), Right);

        assert!(!snake.set_direction(Left));
        assert_eq!(snake.direction(), Right);
        assert!(snake.set_direction(Right));
        assert!(snake.set_direction(Up));
        assert_eq!(snake.direction(), Up);
        assert!(!snake.set_direction(Down));
        assert!(snake.set_direction(Left));
        assert_eq!(snake.head_char(), '<');
    }

    #[test]
    fn opposite_is_an_involution() {
        for dir in [Up, Down, Left, Right].iter() {
            assert_ne!(dir.opposite(), *dir);
            assert_eq!(dir.opposite().opposite(), *dir);
        }
    }

    #[test]
    fn out_of_bounds_exactly_on_the_border_ring() {
        let (w, h) = (32, 16);
        let at = |x, y| Snake::new((x, y), Right);

        assert!(at(0, 8).is_out_of_bounds(w, h));
        assert!(at(31, 8).is_out_of_bounds(w, h));
        assert!(at(16, 0).is_out_of_bounds(w, h));
        assert!(at(16, 15).is_out_of_bounds(w, h));
        assert!(at(-1, 8).is_out_of_bounds(w, h));
        assert!(at(40, 20).is_out_of_bounds(w, h));

        assert!(!at(1, 1).is_out_of_bounds(w, h));
        assert!(!at(30, 14).is_out_of_bounds(w, h));
        assert!(!at(16, 8).is_out_of_bounds(w, h));
    }

    #[test]
    fn self_collision_after_a_loop() {
        let mut snake = Snake::new((10, 10), Right);
        for &dir in [Right, Right, Up, Left].iter() {
            snake.advance(dir);
            snake.trim_to_length(5);
            assert!(!snake.collides_with_self());
        }

        snake.advance(Down);
        snake.trim_to_length(5);
        assert_eq!(snake.head(), (11, 10));
        assert!(snake.collides_with_self());
    }

    #[test]
    fn occupies_includes_the_head() {
        let mut snake = Snake::new((3, 3), Down);
        snake.advance(Down);

        assert!(snake.occupies((3, 3)));
        assert!(snake.occupies((3, 4)));
        assert!(!snake.occupies((3, 5)));
    }
}
