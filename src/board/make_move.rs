use super::error::MoveError;
use super::{CastleSide, Move, MoveRecord, PieceId, PieceKind, Position, Square};

impl Position {
    /// Validate and play a move for whichever side owns the piece on `from`.
    ///
    /// The request must match one of that piece's legal moves exactly,
    /// including the promotion choice. On error the position is unchanged.
    ///
    /// # Example
    /// ```
    /// use chess_rules::board::{Position, Square};
    ///
    /// let mut position = Position::new();
    /// let e2: Square = "e2".parse().unwrap();
    /// let e4: Square = "e4".parse().unwrap();
    /// let record = position.apply_move(e2, e4, None).unwrap();
    /// assert_eq!(record.to, e4);
    /// ```
    pub fn apply_move(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> Result<MoveRecord, MoveError> {
        match self.validate(from, to, promotion) {
            Ok((id, mv)) => Ok(self.execute(id, mv)),
            Err(err) => {
                trace_rules!("rejected {from}{to}: {err}");
                Err(err)
            }
        }
    }

    /// Like [`Position::apply_move`], but returns the resulting position and
    /// leaves `self` untouched.
    pub fn with_move(
        &self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> Result<Position, MoveError> {
        let mut next = self.clone();
        next.apply_move(from, to, promotion)?;
        Ok(next)
    }

    fn validate(
        &self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> Result<(PieceId, Move), MoveError> {
        let id = self
            .board
            .get(from)
            .ok_or(MoveError::NoPieceAtOrigin { square: from })?;

        let candidates: Vec<Move> = self
            .legal_moves_for(id)
            .into_iter()
            .filter(|mv| mv.to == to)
            .collect();
        if candidates.is_empty() {
            return Err(MoveError::IllegalMove { from, to });
        }

        let requested = Move { from, to, promotion };
        if candidates.contains(&requested) {
            Ok((id, requested))
        } else {
            Err(MoveError::InvalidPromotionChoice {
                from,
                to,
                choice: promotion,
            })
        }
    }

    /// Play `mv` with piece `id` without any legality checks.
    ///
    /// Branches in precedence order: promotion, en passant, castling, then
    /// an ordinary move. Every branch appends to the history.
    pub(crate) fn execute(&mut self, id: PieceId, mv: Move) -> MoveRecord {
        let piece = *self.piece(id);
        let color = piece.color;

        let record = if let Some(kind) = mv.promotion {
            if let Some(victim) = self.board.get(mv.to) {
                self.capture(victim);
            }
            self.retire(id);
            let promoted = self.spawn(kind, color, mv.to);
            trace_rules!("{color} pawn {} promotes to {kind:?} on {}", mv.from, mv.to);
            MoveRecord {
                piece: promoted,
                kind,
                color,
                from: mv.from,
                to: mv.to,
                promotion: Some(kind),
            }
        } else if piece.kind == PieceKind::Pawn && mv.file_distance() == 1 && self.is_empty(mv.to)
        {
            let passed = Square(mv.from.rank(), mv.to.file());
            if let Some(victim) = self.board.get(passed) {
                self.capture(victim);
            }
            self.relocate(id, mv.to);
            trace_rules!("{color} captures en passant {}{}", mv.from, mv.to);
            self.record(id, mv)
        } else if piece.kind == PieceKind::King && mv.file_distance() == 2 {
            self.relocate(id, mv.to);
            if let Some(side) = CastleSide::from_king_destination(mv.to.file()) {
                let back = mv.from.rank();
                if let Some(rook) = self.board.get(Square(back, side.rook_file())) {
                    self.relocate(rook, Square(back, side.rook_destination_file()));
                    self.castling.drop_rook(color, rook);
                }
                trace_rules!("{color} castles {side:?}");
            }
            self.castling.revoke(color);
            self.record(id, mv)
        } else {
            if let Some(victim) = self.board.get(mv.to) {
                self.capture(victim);
            }
            self.relocate(id, mv.to);
            match piece.kind {
                PieceKind::Rook if self.castling.drop_rook(color, id) => {
                    trace_rules!("{color} rook left {}, no longer eligible", mv.from);
                }
                PieceKind::King if self.castling.revoke(color) => {
                    trace_rules!("{color} king moved, castling lost");
                }
                _ => {}
            }
            self.record(id, mv)
        };

        self.history.push(record);
        trace_rules!("applied {}", mv);
        record
    }

    fn record(&self, id: PieceId, mv: Move) -> MoveRecord {
        let piece = self.piece(id);
        MoveRecord {
            piece: id,
            kind: piece.kind,
            color: piece.color,
            from: mv.from,
            to: mv.to,
            promotion: None,
        }
    }
}
