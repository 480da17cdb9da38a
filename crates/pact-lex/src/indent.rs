use crate::error::LexError;
use pact_util::Pos;

/// The monotonic stack of logical indentation levels, initialized to `[0]`.
/// Kept separate from character scanning so the push/pop/flush logic is
/// unit-testable on its own, independent of the rest of the lexer.
pub struct IndentStack {
    levels: Vec<u32>,
}

impl IndentStack {
    pub fn new() -> Self {
        Self { levels: vec![0] }
    }

    /// Reconcile the stack with a new line's logical level, returning one
    /// `true` (INDENT) or zero-or-more `false` (DEDENT) markers to emit.
    pub fn reconcile(&mut self, level: u32, pos: Pos) -> Result<Vec<bool>, LexError> {
        let top = *self.levels.last().unwrap();
        if level > top {
            self.levels.push(level);
            return Ok(vec![true]);
        }
        if level < top {
            let mut dedents = Vec::new();
            while *self.levels.last().unwrap() > level {
                self.levels.pop();
                dedents.push(false);
            }
            if *self.levels.last().unwrap() != level {
                return Err(LexError::InconsistentIndentation(pos));
            }
            return Ok(dedents);
        }
        Ok(Vec::new())
    }

    /// One DEDENT for every level still open above the base, emitted at EOF.
    pub fn flush(&mut self) -> usize {
        let count = self.levels.len() - 1;
        self.levels.truncate(1);
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_emits_single_indent() {
        let mut s = IndentStack::new();
        assert_eq!(s.reconcile(1, Pos::start()).unwrap(), vec![true]);
    }

    #[test]
    fn pop_emits_one_dedent_per_level() {
        let mut s = IndentStack::new();
        s.reconcile(1, Pos::start()).unwrap();
        s.reconcile(3, Pos::start()).unwrap();
        let dedents = s.reconcile(0, Pos::start()).unwrap();
        assert_eq!(dedents, vec![false, false]);
    }

    #[test]
    fn mismatched_dedent_is_fatal() {
        let mut s = IndentStack::new();
        s.reconcile(2, Pos::start()).unwrap();
        let err = s.reconcile(1, Pos::start()).unwrap_err();
        assert!(matches!(err, LexError::InconsistentIndentation(_)));
    }

    #[test]
    fn flush_counts_remaining_levels() {
        let mut s = IndentStack::new();
        s.reconcile(1, Pos::start()).unwrap();
        s.reconcile(2, Pos::start()).unwrap();
        assert_eq!(s.flush(), 2);
    }
}
