//! Constants for board dimensions, opponent parameters, and file locations.
//!
//! The board dimension is chosen at runtime (see the `--size` flag), so only
//! the defaults and hard limits live here.

// =============================================================================
// Board Geometry
// =============================================================================

/// Default board dimension (an n×n×n cube with n = 3).
pub const DEFAULT_DIMENSION: usize = 3;

/// Largest accepted board dimension. Keeps `n³` and the text dump reasonable.
pub const MAX_DIMENSION: usize = 16;

// =============================================================================
// Computer Opponent
// =============================================================================

/// Random coordinate samples tried before falling back to a scan of empty cells.
pub const MAX_RANDOM_TRIES: usize = 64;

// =============================================================================
// Cell Glyphs
// =============================================================================

/// Empty cell.
pub const GLYPH_EMPTY: char = '.';

/// Reserved (permanently unplayable) center cell.
pub const GLYPH_RESERVED: char = '#';

/// Player one's mark.
pub const GLYPH_PLAYER_ONE: char = 'X';

/// Player two's mark.
pub const GLYPH_PLAYER_TWO: char = 'O';

// =============================================================================
// Winner History
// =============================================================================

/// Default location of the newline-delimited winners list.
pub const DEFAULT_WINNERS_FILE: &str = "winners.txt";
