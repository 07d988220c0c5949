//! Conditional-execution stack.
//!
//! Every control structure pushes a level while its body is parsed. A level
//! is *live* when its body may have side effects; code runs only when every
//! level is live. `if` chains additionally remember whether one of their
//! branches already fired, so later `elseif`/`else` branches stay dead.

use crate::FatalError;

#[derive(Clone, Debug)]
pub struct ConditionStack {
    live: Vec<bool>,
    any_taken: Vec<bool>,
    max_depth: usize,
}

impl ConditionStack {
    pub fn new(max_depth: usize) -> Self {
        ConditionStack {
            live: Vec::new(),
            any_taken: Vec::new(),
            max_depth,
        }
    }

    pub fn depth(&self) -> usize {
        self.live.len()
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// `true` when every enclosing level is live. Always `true` at depth 0.
    pub fn enabled(&self) -> bool {
        self.live.iter().all(|&live| live)
    }

    /// Enter a control structure whose first body is live iff `test`.
    pub fn push(&mut self, test: bool) -> Result<(), FatalError> {
        if self.live.len() >= self.max_depth {
            return Err(FatalError::NestingTooDeep {
                max_depth: self.max_depth,
            });
        }
        self.live.push(test);
        self.any_taken.push(test);
        tracing::trace!(depth = self.depth(), test, "condition push");
        Ok(())
    }

    /// Leave the innermost control structure, returning its live flag.
    pub fn pop(&mut self) -> Result<bool, FatalError> {
        let live = self.live.pop().ok_or(FatalError::UnbalancedConditions)?;
        self.any_taken.pop();
        tracing::trace!(depth = self.depth(), live, "condition pop");
        Ok(live)
    }

    /// Prepare to evaluate an `elseif` condition.
    ///
    /// The innermost level becomes live only if no earlier branch fired, so
    /// the condition expression itself is suppressed after a taken branch.
    pub fn test_elseif(&mut self) -> Result<bool, FatalError> {
        let (live, any_taken) = self.top_mut()?;
        *live = !*any_taken;
        let allowed = *live;
        tracing::trace!(depth = self.depth(), allowed, "condition test elseif");
        Ok(allowed)
    }

    /// Start an `elseif` (with its evaluated test) or `else` (with `true`).
    pub fn elseif(&mut self, test: bool) -> Result<bool, FatalError> {
        let (live, any_taken) = self.top_mut()?;
        let taken = test && !*any_taken;
        *any_taken |= taken;
        *live = taken;
        tracing::trace!(depth = self.depth(), taken, "condition elseif");
        Ok(taken)
    }

    /// Close every remaining branch of the innermost level.
    ///
    /// Used when a branch condition could not be evaluated: no branch of
    /// that `if` chain may run, including a trailing `else`.
    pub fn settle(&mut self) -> Result<(), FatalError> {
        let (live, any_taken) = self.top_mut()?;
        *live = false;
        *any_taken = true;
        tracing::trace!(depth = self.depth(), "condition settle");
        Ok(())
    }

    /// Drop every level above `depth`. Used when a statement is abandoned
    /// by error recovery in the middle of a control structure.
    pub fn truncate(&mut self, depth: usize) {
        if depth < self.depth() {
            tracing::debug!(from = self.depth(), to = depth, "condition unwind");
        }
        self.live.truncate(depth);
        self.any_taken.truncate(depth);
    }

    fn top_mut(&mut self) -> Result<(&mut bool, &mut bool), FatalError> {
        match (self.live.last_mut(), self.any_taken.last_mut()) {
            (Some(live), Some(any_taken)) => Ok((live, any_taken)),
            _ => Err(FatalError::MissingCondition),
        }
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
