//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Playable board dimensions (the stored grid adds a one-cell border)
pub const BOARD_WIDTH: usize = 12;
pub const BOARD_HEIGHT: usize = 20;

/// Difficulty level range
pub const LEVEL_MIN: u32 = 1;
pub const LEVEL_MAX: u32 = 25;

/// Bounded wait for one input event (milliseconds)
pub const INPUT_TIMEOUT_MS: u64 = 1000;

/// Tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    O,
    I,
    T,
    Z,
    S,
    L,
    J,
}

impl PieceKind {
    pub const ALL: [PieceKind; 7] = [
        PieceKind::O,
        PieceKind::I,
        PieceKind::T,
        PieceKind::Z,
        PieceKind::S,
        PieceKind::L,
        PieceKind::J,
    ];
}

/// Rotation states (North = 0 degrees, advancing clockwise)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    pub const ALL: [Rotation; 4] = [
        Rotation::North,
        Rotation::East,
        Rotation::South,
        Rotation::West,
    ];

    /// Rotate clockwise
    pub fn rotate_cw(&self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }

    /// Rotate counter-clockwise
    pub fn rotate_ccw(&self) -> Self {
        match self {
            Rotation::North => Rotation::West,
            Rotation::West => Rotation::South,
            Rotation::South => Rotation::East,
            Rotation::East => Rotation::North,
        }
    }
}

/// Cell on the board. The border and locked blocks both read as
/// occupied, so collision checks never branch on bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Wall,
    Block(PieceKind),
}

impl Cell {
    pub fn is_occupied(&self) -> bool {
        !matches!(self, Cell::Empty)
    }
}

/// Discrete input vocabulary delivered by an input source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    MoveLeft,
    MoveRight,
    MoveDown,
    HardDrop,
    RotateLeft,
    RotateRight,
    PauseQuit,
    /// The bounded wait elapsed with no key pressed
    Timeout,
    /// A key outside the game vocabulary
    Invalid,
}

/// Why a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    /// A new piece could not be placed at the spawn position
    ToppedOut,
    /// The player quit through the pause dialog
    UserQuit,
}

/// Player's answer to the pause dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuitChoice {
    Resume,
    Quit,
}

/// Per-session options, fixed once gameplay starts
#[derive(Debug, Clone, Copy)]
pub struct GameOptions {
    /// Starting difficulty level
    pub initial_level: u32,
    /// Shorten the tick interval on every level-up
    pub increase_difficulty: bool,
    /// Wipe the board when the level advances
    pub clear_board_on_level_up: bool,
    /// Color blocks by piece kind
    pub display_colors: bool,
}

impl GameOptions {
    /// Copy with the level forced into the supported range
    pub fn clamped(self) -> Self {
        Self {
            initial_level: self.initial_level.clamp(LEVEL_MIN, LEVEL_MAX),
            ..self
        }
    }
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            initial_level: LEVEL_MIN,
            increase_difficulty: true,
            clear_board_on_level_up: false,
            display_colors: false,
        }
    }
}
