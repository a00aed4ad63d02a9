//! Matching-bracket search across line boundaries
//!
//! Looks at the character just before a position. Opening brackets are
//! matched by scanning forward, closing brackets by scanning backward, with a
//! nesting depth that only counts brackets of the same kind. The scan stops
//! at either end of the document; it never wraps.

use crate::core::lines::LineStore;
use crate::core::position::Position;

/// One of the three recognised bracket pairs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bracket {
    /// `(` and `)`
    Paren,
    /// `[` and `]`
    Square,
    /// `{` and `}`
    Curly,
}

impl Bracket {
    /// Classify `ch`, returning the pair and whether it is the opening side
    #[must_use]
    pub const fn classify(ch: char) -> Option<(Self, bool)> {
        match ch {
            '(' => Some((Self::Paren, true)),
            ')' => Some((Self::Paren, false)),
            '[' => Some((Self::Square, true)),
            ']' => Some((Self::Square, false)),
            '{' => Some((Self::Curly, true)),
            '}' => Some((Self::Curly, false)),
            _ => None,
        }
    }

    /// Opening character of the pair
    #[must_use]
    pub const fn open(self) -> char {
        match self {
            Self::Paren => '(',
            Self::Square => '[',
            Self::Curly => '{',
        }
    }

    /// Closing character of the pair
    #[must_use]
    pub const fn close(self) -> char {
        match self {
            Self::Paren => ')',
            Self::Square => ']',
            Self::Curly => '}',
        }
    }
}

/// Find the bracket matching the one immediately before `position`
///
/// Returns `None` at column 0, past the end of the line, for non-bracket
/// characters, and when the scan runs off either end of the document.
#[must_use]
pub fn find_matching_bracket(lines: &LineStore, position: Position) -> Option<Position> {
    if position.column == 0 {
        return None;
    }

    let before = lines.line(position.row).chars().nth(position.column - 1)?;
    let (bracket, opening) = Bracket::classify(before)?;

    if opening {
        find_closing(lines, bracket, position)
    } else {
        find_opening(lines, bracket, position)
    }
}

/// Forward scan starting at `position.column` on the bracket's row
fn find_closing(lines: &LineStore, bracket: Bracket, position: Position) -> Option<Position> {
    let mut depth = 1usize;
    let mut row = position.row;
    let mut skip = position.column;

    while row < lines.len() {
        for (column, ch) in lines.line(row).chars().enumerate().skip(skip) {
            if ch == bracket.close() {
                depth -= 1;
                if depth == 0 {
                    return Some(Position::new(row, column));
                }
            } else if ch == bracket.open() {
                depth += 1;
            }
        }
        row += 1;
        skip = 0;
    }
    None
}

/// Backward scan starting just before the closing bracket
fn find_opening(lines: &LineStore, bracket: Bracket, position: Position) -> Option<Position> {
    let mut depth = 1usize;
    let mut row = position.row;
    // Columns strictly below this bound are scanned on the current row
    let mut bound = position.column - 1;

    loop {
        let chars: Vec<char> = lines.line(row).chars().take(bound).collect();
        for (column, &ch) in chars.iter().enumerate().rev() {
            if ch == bracket.open() {
                depth -= 1;
                if depth == 0 {
                    return Some(Position::new(row, column));
                }
            } else if ch == bracket.close() {
                depth += 1;
            }
        }

        row = row.checked_sub(1)?;
        bound = usize::MAX;
    }
}
