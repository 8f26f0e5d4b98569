//! Character cursor over a zone's text
//!
//! Text is a borrowed byte slice that ends at the first NUL byte or at the
//! end of the slice, whichever comes first.

/// Direction of travel through the text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Traversal {
    /// First character to last
    #[default]
    Forward,
    /// Last character to first
    Backward,
}

/// Number of characters before the terminator
pub fn text_len(text: &[u8]) -> usize {
    text.iter().position(|&c| c == 0).unwrap_or(text.len())
}

/// Position in the text with one-step end-of-text lookahead
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CharCursor {
    pos: usize,
    end_of_text: bool,
    traversal: Traversal,
}

impl Default for CharCursor {
    fn default() -> Self {
        Self::new()
    }
}

impl CharCursor {
    /// Create a cursor that has not started
    pub const fn new() -> Self {
        Self {
            pos: 0,
            end_of_text: true,
            traversal: Traversal::Forward,
        }
    }

    /// Check if the last character has been consumed
    pub fn is_end_of_text(&self) -> bool {
        self.end_of_text
    }

    /// Current direction of travel
    pub fn traversal(&self) -> Traversal {
        self.traversal
    }

    /// Restart at the first character in the direction of travel
    ///
    /// Returns `None` and flags end of text when the text is empty.
    pub fn first(&mut self, text: &[u8], traversal: Traversal) -> Option<u8> {
        self.traversal = traversal;
        let len = text_len(text);
        if len == 0 {
            self.end_of_text = true;
            return None;
        }

        self.pos = match traversal {
            Traversal::Forward => 0,
            Traversal::Backward => len - 1,
        };
        self.end_of_text = false;
        self.advance(text)
    }

    /// Consume the next character
    ///
    /// Returns `None` once the end of text was flagged.
    pub fn next(&mut self, text: &[u8]) -> Option<u8> {
        if self.end_of_text {
            return None;
        }
        self.advance(text)
    }

    fn advance(&mut self, text: &[u8]) -> Option<u8> {
        let code = match text.get(self.pos) {
            Some(&c) if c != 0 => c,
            _ => {
                self.end_of_text = true;
                return None;
            }
        };

        match self.traversal {
            Traversal::Forward => {
                self.pos += 1;
                self.end_of_text = text.get(self.pos).map_or(true, |&c| c == 0);
            }
            Traversal::Backward => {
                if self.pos == 0 {
                    self.end_of_text = true;
                } else {
                    self.pos -= 1;
                }
            }
        }
        Some(code)
    }
}
