use super::{Cursor, EvalError};
use crate::lang::{Opcode, UserFunction};

type Result<T> = std::result::Result<T, EvalError>;

/// Scan a declaration starting at the `STARTFUNC` under the cursor:
///
/// `STARTFUNC VARIABLE name PARAM* body ENDFUNC`
///
/// On success the cursor rests on the closing `ENDFUNC`.
pub fn declare(cursor: &mut Cursor) -> Result<UserFunction> {
    let position = cursor.position();
    let malformed = |msg| EvalError::MalformedFunctionDeclaration(position, msg);
    let name = match cursor.peek(1) {
        Some(token) if token.opcode() == &Opcode::Variable => match token.id() {
            Some(id) => id.into(),
            None => return Err(malformed("MISSING NAME")),
        },
        Some(_) => return Err(malformed("NAME MUST BE A VARIABLE")),
        None => return Err(malformed("MISSING NAME")),
    };
    let program = cursor.program().clone();
    let tokens = program.tokens();
    let mut index = cursor.index() + 2;
    let mut params = 0;
    while let Some(Opcode::Param) = tokens.get(index).map(|t| t.opcode()) {
        params += 1;
        index += 1;
    }
    let body_start = index;
    loop {
        match tokens.get(index).map(|t| t.opcode()) {
            None => return Err(malformed("MISSING ENDFUNC")),
            Some(Opcode::EndFunc) => break,
            Some(Opcode::StartFunc) => return Err(malformed("NESTED STARTFUNC")),
            Some(Opcode::Param) => return Err(malformed("PARAM INSIDE BODY")),
            Some(_) => index += 1,
        }
    }
    cursor.seek(index);
    Ok(UserFunction::new(name, params, program.slice(body_start..index))
        .with_offset(cursor.offset() + body_start))
}
