/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

use serde::{Deserialize, Serialize};

/// Slide cursor for a looping carousel.
///
/// Stepping past either end wraps around. An empty carousel stays at 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn next(self) -> Self {
        if self.is_empty() {
            return self;
        }
        Self {
            index: (self.index + 1) % self.len,
            ..self
        }
    }

    pub fn prev(self) -> Self {
        if self.is_empty() {
            return self;
        }
        Self {
            index: (self.index + self.len - 1) % self.len,
            ..self
        }
    }

    /// Jump to `index`; out-of-range targets are ignored.
    pub fn go_to(self, index: usize) -> Self {
        if index < self.len {
            Self { index, ..self }
        } else {
            self
        }
    }

    /// `"i / n"` with a 1-based `i`, or `None` when there is nothing to show.
    pub fn counter(&self) -> Option<String> {
        (!self.is_empty()).then(|| format!("{} / {}", self.index + 1, self.len))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_at_last_slide_wraps_to_first() {
        let carousel = Carousel::new(3).go_to(2);
        assert_eq!(carousel.next().index(), 0);
    }

    #[test]
    fn prev_at_first_slide_wraps_to_last() {
        assert_eq!(Carousel::new(4).prev().index(), 3);
    }

    #[test]
    fn go_to_ignores_out_of_range() {
        let carousel = Carousel::new(2).go_to(1);
        assert_eq!(carousel.go_to(5).index(), 1);
    }

    #[test]
    fn counter_is_one_based() {
        assert_eq!(Carousel::new(5).next().counter().as_deref(), Some("2 / 5"));
        assert_eq!(Carousel::new(0).counter(), None);
    }

    #[test]
    fn empty_carousel_does_not_move() {
        let empty = Carousel::new(0);
        assert_eq!(empty.next(), empty);
        assert_eq!(empty.prev(), empty);
    }
}
