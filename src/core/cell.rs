use super::piece::Piece;

/// One board slot: an optional piece and a one-way reveal flag
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    piece: Option<Piece>,
    visible: bool,
}

impl Cell {
    /// A face-down cell holding a piece; every cell starts this way
    pub fn hidden(piece: Piece) -> Self {
        Self {
            piece: Some(piece),
            visible: false,
        }
    }

    /// A face-up cell, occupied or vacant
    pub fn open(piece: Option<Piece>) -> Self {
        Self {
            piece,
            visible: true,
        }
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    /// One-way transition; the caller checks `visible` first
    pub fn reveal(&mut self) {
        self.visible = true;
    }

    pub fn piece(&self) -> Option<&Piece> {
        self.piece.as_ref()
    }

    pub fn piece_mut(&mut self) -> Option<&mut Piece> {
        self.piece.as_mut()
    }

    pub fn set_piece(&mut self, piece: Option<Piece>) {
        self.piece = piece;
    }

    pub fn take_piece(&mut self) -> Option<Piece> {
        self.piece.take()
    }

    /// Revealed and vacant
    pub fn is_empty(&self) -> bool {
        self.visible && self.piece.is_none()
    }

    /// Whether `other` visibly holds a piece ours can capture.
    /// False when either cell is vacant, never an error.
    pub fn meets_prey(&self, other: &Cell) -> bool {
        match (&self.piece, other.visible, &other.piece) {
            (Some(ours), true, Some(theirs)) => ours.animal.preys_on(theirs.animal),
            _ => false,
        }
    }

    /// Whether `other` visibly holds a piece that captures ours
    pub fn meets_predator(&self, other: &Cell) -> bool {
        match (&self.piece, other.visible, &other.piece) {
            (Some(ours), true, Some(theirs)) => theirs.animal.preys_on(ours.animal),
            _ => false,
        }
    }
}
