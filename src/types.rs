//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Container capacities
pub const QUEUE_CAPACITY: usize = 5;
pub const STACK_CAPACITY: usize = 3;

/// How many pieces a bulk exchange moves in each direction
pub const EXCHANGE_SIZE: usize = 3;

/// Tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

/// All seven kinds, in the order the generator indexes them
pub const ALL_KINDS: [PieceKind; 7] = [
    PieceKind::I,
    PieceKind::O,
    PieceKind::T,
    PieceKind::S,
    PieceKind::Z,
    PieceKind::J,
    PieceKind::L,
];

impl PieceKind {
    /// Parse piece kind from a single letter (case-insensitive)
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'I' => Some(PieceKind::I),
            'O' => Some(PieceKind::O),
            'T' => Some(PieceKind::T),
            'S' => Some(PieceKind::S),
            'Z' => Some(PieceKind::Z),
            'J' => Some(PieceKind::J),
            'L' => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Single-letter display label
    pub fn as_char(&self) -> char {
        match self {
            PieceKind::I => 'I',
            PieceKind::O => 'O',
            PieceKind::T => 'T',
            PieceKind::S => 'S',
            PieceKind::Z => 'Z',
            PieceKind::J => 'J',
            PieceKind::L => 'L',
        }
    }
}

/// One queued or reserved unit: a shape label plus a session-unique id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub id: u32,
}

impl Piece {
    pub fn new(kind: PieceKind, id: u32) -> Self {
        Self { kind, id }
    }
}

/// Game actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    Play,
    Reserve,
    UseReserve,
    SwapFrontTop,
    Undo,
    BulkExchange,
}

impl GameAction {
    /// Convert to string (for reports and tests)
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Play => "play",
            GameAction::Reserve => "reserve",
            GameAction::UseReserve => "useReserve",
            GameAction::SwapFrontTop => "swapFrontTop",
            GameAction::Undo => "undo",
            GameAction::BulkExchange => "bulkExchange",
        }
    }
}

/// A parsed menu selection: either a game action or a request to quit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Action(GameAction),
    Quit,
}
