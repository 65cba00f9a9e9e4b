use super::{Cursor, EvalError, Var};
use crate::lang::{Opcode, Token};

type Result<T> = std::result::Result<T, EvalError>;

/// Heuristic check run by `ENDLOOP` under the cursor before it jumps back.
///
/// Walking back to the matching `STARTLOOP`, an `IF` not closed by an
/// `ENDIF` inside the body means the loop has a conditional way out.
/// A loop with no such exit, or whose body has zero net work, is
/// rejected. This is not a termination proof: it rejects some loops that
/// would finish and accepts some that never do.
///
/// Returns the index of the matching `STARTLOOP`.
pub fn check_loop(cursor: &Cursor, id: &str, vars: &Var) -> Result<usize> {
    let mut start = cursor.clone();
    if !start.seek_backward(|t| t.is(&Opcode::StartLoop, id)) {
        return Err(EvalError::MalformedBlock {
            opcode: Opcode::EndLoop,
            id: id.to_string(),
            missing: Opcode::StartLoop,
            position: cursor.position(),
        });
    }
    let body = &cursor.program().tokens()[start.index() + 1..cursor.index()];
    let mut depth = 0usize;
    let mut has_exit = false;
    for token in body.iter().rev() {
        match token.opcode() {
            Opcode::EndIf => depth += 1,
            Opcode::If if depth == 0 => has_exit = true,
            Opcode::If => depth -= 1,
            _ => {}
        }
    }
    if !has_exit || work(body, vars) == 0 {
        return Err(EvalError::UnsafeLoop(id.to_string(), cursor.position()));
    }
    Ok(start.index())
}

/// Net stack effect of `tokens`, resolving calls through `vars`.
pub fn work(tokens: &[Token], vars: &Var) -> isize {
    tokens
        .iter()
        .map(|token| match (token.opcode(), token.id()) {
            (Opcode::Variable, Some(name)) if vars.fetch(name).is_none() => {
                match vars.function(name) {
                    Some(func) => func.returns() as isize - func.params() as isize,
                    None => token.opcode().work(),
                }
            }
            (opcode, _) => opcode.work(),
        })
        .sum()
}
