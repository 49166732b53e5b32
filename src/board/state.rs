use super::{CastleSide, CastlingRights, Color, MoveRecord, Piece, PieceId, PieceKind, Square};

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Square-to-piece mapping. Cells hold ids into the position's piece arena.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [[Option<PieceId>; 8]; 8],
}

impl Board {
    pub(crate) const fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    #[inline]
    #[must_use]
    pub fn get(&self, sq: Square) -> Option<PieceId> {
        self.squares[sq.0][sq.1]
    }

    #[inline]
    pub(crate) fn set(&mut self, sq: Square, id: Option<PieceId>) {
        self.squares[sq.0][sq.1] = id;
    }

    #[inline]
    pub(crate) fn take(&mut self, sq: Square) -> Option<PieceId> {
        self.squares[sq.0][sq.1].take()
    }

    #[inline]
    #[must_use]
    pub fn is_occupied(&self, sq: Square) -> bool {
        self.get(sq).is_some()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.get(sq).is_none()
    }
}

/// A chess position.
///
/// Every piece that ever existed in the game lives in `arena`, indexed by its
/// `PieceId`. The board and the per-color lists only hold ids, so a capture or
/// promotion updates one list and one board cell. Cloning is a flat copy,
/// which is what legality simulation relies on.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub(crate) board: Board,
    pub(crate) arena: Vec<Piece>,
    /// Live pieces per color, in creation order
    pub(crate) active: [Vec<PieceId>; 2],
    /// Pieces captured *by* each color, in capture order
    pub(crate) captured: [Vec<PieceId>; 2],
    pub(crate) kings: [PieceId; 2],
    pub(crate) castling: CastlingRights,
    pub(crate) history: Vec<MoveRecord>,
    pub(crate) first_to_move: Color,
}

impl Position {
    /// The standard starting position, White to move, all castling rights.
    #[must_use]
    pub fn new() -> Self {
        let mut position = Position::empty();

        for color in [Color::White, Color::Black] {
            let back = color.back_rank();
            let pawns = color.pawn_start_rank();
            for file in 0..8 {
                position.spawn(PieceKind::Pawn, color, Square(pawns, file));
            }
            for (file, &kind) in BACK_RANK.iter().enumerate() {
                let id = position.spawn(kind, color, Square(back, file));
                match kind {
                    PieceKind::King => position.kings[color.index()] = id,
                    PieceKind::Rook => {
                        let side = if file == CastleSide::Kingside.rook_file() {
                            CastleSide::Kingside
                        } else {
                            CastleSide::Queenside
                        };
                        position.castling.grant(color, side, id);
                    }
                    _ => {}
                }
            }
        }

        position
    }

    /// A position without pieces. Callers must place both kings before use.
    pub(crate) fn empty() -> Self {
        Position {
            board: Board::empty(),
            arena: Vec::with_capacity(32),
            active: [Vec::with_capacity(16), Vec::with_capacity(16)],
            captured: [Vec::new(), Vec::new()],
            kings: [PieceId(0); 2],
            castling: CastlingRights::none(),
            history: Vec::new(),
            first_to_move: Color::White,
        }
    }

    /// Create a new live piece and place it on `sq`.
    pub(crate) fn spawn(&mut self, kind: PieceKind, color: Color, sq: Square) -> PieceId {
        let id = PieceId(self.arena.len() as u16);
        self.arena.push(Piece {
            id,
            kind,
            color,
            square: sq,
        });
        self.active[color.index()].push(id);
        self.board.set(sq, Some(id));
        id
    }

    /// Take `victim` off the board and credit it to the opposing color.
    pub(crate) fn capture(&mut self, victim: PieceId) {
        let piece = self.arena[victim.as_usize()];
        if self.board.get(piece.square) == Some(victim) {
            self.board.set(piece.square, None);
        }
        self.active[piece.color.index()].retain(|&id| id != victim);
        self.captured[piece.color.opponent().index()].push(victim);
        if piece.kind == PieceKind::Rook && self.castling.drop_rook(piece.color, victim) {
            trace_rules!("{} rook {} captured, no longer eligible", piece.color, piece.square);
        }
    }

    /// Move a live piece to an empty square.
    pub(crate) fn relocate(&mut self, id: PieceId, to: Square) {
        let from = self.arena[id.as_usize()].square;
        self.board.take(from);
        self.board.set(to, Some(id));
        self.arena[id.as_usize()].square = to;
    }

    /// Remove a live piece without crediting a capture (promotion).
    pub(crate) fn retire(&mut self, id: PieceId) {
        let piece = self.arena[id.as_usize()];
        self.board.take(piece.square);
        self.active[piece.color.index()].retain(|&p| p != id);
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Look up a piece by id, live or not.
    ///
    /// # Panics
    /// Panics if `id` was not issued by this position.
    #[must_use]
    pub fn piece(&self, id: PieceId) -> &Piece {
        &self.arena[id.as_usize()]
    }

    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<&Piece> {
        self.board.get(sq).map(|id| self.piece(id))
    }

    /// Kind and color on a square
    #[must_use]
    pub fn occupant(&self, sq: Square) -> Option<(Color, PieceKind)> {
        self.piece_at(sq).map(|p| (p.color, p.kind))
    }

    #[must_use]
    pub fn color_on(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(|p| p.color)
    }

    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.board.is_empty(sq)
    }

    #[must_use]
    pub fn king(&self, color: Color) -> &Piece {
        self.piece(self.kings[color.index()])
    }

    #[must_use]
    pub fn king_square(&self, color: Color) -> Square {
        self.king(color).square
    }

    /// Ids of `color`'s live pieces
    #[must_use]
    pub fn piece_ids(&self, color: Color) -> &[PieceId] {
        &self.active[color.index()]
    }

    /// `color`'s live pieces
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = &Piece> + '_ {
        self.active[color.index()].iter().map(|&id| self.piece(id))
    }

    /// Pieces `color` has captured, oldest first
    pub fn captured(&self, color: Color) -> impl Iterator<Item = &Piece> + '_ {
        self.captured[color.index()].iter().map(|&id| self.piece(id))
    }

    #[must_use]
    pub fn castling_rights(&self) -> &CastlingRights {
        &self.castling
    }

    #[must_use]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    #[must_use]
    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.history.last()
    }

    /// Side expected to move next when turns alternate: the opponent of
    /// the last mover, or the side configured to start.
    #[must_use]
    pub fn next_to_move(&self) -> Color {
        self.last_move()
            .map_or(self.first_to_move, |record| record.color.opponent())
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::new()
    }
}
