use super::*;

/// Throws the same move every turn.
#[derive(Debug, Clone, Copy)]
pub struct Constant(pub Move);

impl Strategy for Constant {
    fn decide(&mut self, _: &Turn) -> Option<Move> {
        Some(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn always_same() {
        let ref mut rock = Constant(Move::R);
        for number in 0..4 {
            let turn = Turn {
                id: 0,
                max_rounds: 3,
                number,
            };
            assert_eq!(rock.decide(&turn), Some(Move::R));
        }
    }
}
