use super::LexError;
use std::collections::HashMap;
use std::rc::Rc;

thread_local!(
    static STRING_TO_OPCODE: HashMap<&'static str, Opcode> = Opcode::field_less()
        .drain(..)
        .flat_map(|op| op.keywords().iter().map(move |kw| (*kw, op.clone())))
        .collect();
);

/// ## raysCode instruction set
///
/// Every operation is performed on the operand stack. Markers (`IF`, `ENDLOOP`,
/// `STARTFUNC` and friends) steer the cursor instead of the stack.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Opcode {
    // *** Literals
    Two,
    Three,
    Infinity,
    /// Push the current stack depth.
    Size,

    // *** Arithmetic, `a op b` where `a` is the top of stack
    Add,
    Subtract,
    Multiply,
    /// Truncates toward zero.
    Divide,

    // *** Stack shuffling
    Swap,
    Pop,
    Duplicate,
    /// Move the top value to the bottom of the stack.
    Roll,

    // *** I/O
    /// Suspends the evaluator when no input line is buffered.
    Input,
    Output,

    // *** Variables, the name travels as the block id
    Variable,
    /// Binds the top of stack, without popping, to the preceding `VARIABLE`.
    Assignment,

    // *** Control flow markers
    If,
    Else,
    EndIf,
    StartLoop,
    EndLoop,

    // *** Function declaration markers
    StartFunc,
    Param,
    EndFunc,

    /// Runtime only. Substituted for a `VARIABLE` naming a declared function.
    UserFunction(Rc<UserFunction>),
}

impl Opcode {
    /// Every opcode the lexer can produce.
    pub fn field_less() -> Vec<Opcode> {
        use Opcode::*;
        vec![
            Two, Three, Infinity, Size, Add, Subtract, Multiply, Divide, Swap, Pop, Duplicate,
            Roll, Input, Output, Variable, Assignment, If, Else, EndIf, StartLoop, EndLoop,
            StartFunc, Param, EndFunc,
        ]
    }

    pub fn from_keyword(s: &str) -> Option<Opcode> {
        let upper = s.to_ascii_uppercase();
        STRING_TO_OPCODE.with(|sto| sto.get(upper.as_str()).cloned())
    }

    /// Canonical keyword first, then accepted aliases.
    pub fn keywords(&self) -> &'static [&'static str] {
        use Opcode::*;
        match self {
            Two => &["TWO", "2"],
            Three => &["THREE", "3"],
            Infinity => &["INFINITY", "INF"],
            Size => &["SIZE"],
            Add => &["ADD", "+"],
            Subtract => &["SUBTRACT", "-"],
            Multiply => &["MULTIPLY", "*"],
            Divide => &["DIVIDE", "/"],
            Swap => &["SWAP"],
            Pop => &["POP", "DROP"],
            Duplicate => &["DUPLICATE", "DUP"],
            Roll => &["ROLL"],
            Input => &["INPUT"],
            Output => &["OUTPUT"],
            Variable => &["VARIABLE", "VAR"],
            Assignment => &["ASSIGNMENT", "="],
            If => &["IF"],
            Else => &["ELSE"],
            EndIf => &["ENDIF"],
            StartLoop => &["STARTLOOP", "LOOP"],
            EndLoop => &["ENDLOOP"],
            StartFunc => &["STARTFUNC", "FUNC"],
            Param => &["PARAM"],
            EndFunc => &["ENDFUNC"],
            UserFunction(_) => &[],
        }
    }

    /// Values that must be on the stack before the opcode executes.
    pub fn arguments(&self) -> usize {
        use Opcode::*;
        match self {
            Add | Subtract | Multiply | Divide | Swap => 2,
            Pop | Duplicate | Roll | Output | Assignment => 1,
            UserFunction(func) => func.params(),
            Two | Three | Infinity | Size | Input | Variable | If | Else | EndIf | StartLoop
            | EndLoop | StartFunc | Param | EndFunc => 0,
        }
    }

    /// Values left on the stack after the opcode executes.
    pub fn returns(&self) -> usize {
        use Opcode::*;
        match self {
            Duplicate | Swap => 2,
            Two | Three | Infinity | Size | Add | Subtract | Multiply | Divide | Roll
            | Variable | Assignment => 1,
            UserFunction(func) => func.returns(),
            Pop | Input | Output | If | Else | EndIf | StartLoop | EndLoop | StartFunc | Param
            | EndFunc => 0,
        }
    }

    /// Net stack effect, `returns - arguments`.
    pub fn work(&self) -> isize {
        self.returns() as isize - self.arguments() as isize
    }

    pub fn requires_id(&self) -> bool {
        use Opcode::*;
        matches!(
            self,
            Variable | If | Else | EndIf | StartLoop | EndLoop | UserFunction(_)
        )
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Opcode::UserFunction(func) => write!(f, "{}", func.name()),
            op => write!(f, "{}", op.keywords()[0]),
        }
    }
}

/// ## User-defined function
///
/// Closes over its declared parameter count and a copy of its body.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserFunction {
    name: Rc<str>,
    params: usize,
    returns: usize,
    body: Program,
    offset: usize,
}

impl UserFunction {
    pub fn new(name: Rc<str>, params: usize, body: Program) -> UserFunction {
        let work: isize = body.iter().map(|t| t.opcode().work()).sum();
        let returns = (params as isize + work).max(0) as usize;
        UserFunction {
            name,
            params,
            returns,
            body,
            offset: 0,
        }
    }
    /// Index of the body's first token in the declaring program.
    pub fn with_offset(mut self, offset: usize) -> UserFunction {
        self.offset = offset;
        self
    }
    pub fn name(&self) -> &Rc<str> {
        &self.name
    }
    pub fn params(&self) -> usize {
        self.params
    }
    pub fn returns(&self) -> usize {
        self.returns
    }
    pub fn body(&self) -> &Program {
        &self.body
    }
    pub fn offset(&self) -> usize {
        self.offset
    }
}

/// ## Opcode with its optional block id

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    opcode: Opcode,
    id: Option<Rc<str>>,
}

impl Token {
    /// The id must be present exactly when the opcode requires one.
    pub fn new(opcode: Opcode, id: Option<&str>) -> Result<Token, LexError> {
        match (opcode.requires_id(), id) {
            (true, None) => Err(LexError::InvalidToken(opcode, "NEEDS A BLOCK ID")),
            (false, Some(_)) => Err(LexError::InvalidToken(opcode, "TAKES NO BLOCK ID")),
            (_, id) => Ok(Token {
                opcode,
                id: id.map(Rc::from),
            }),
        }
    }

    pub fn opcode(&self) -> &Opcode {
        &self.opcode
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn is(&self, opcode: &Opcode, id: &str) -> bool {
        self.opcode == *opcode && self.id() == Some(id)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match (&self.opcode, &self.id) {
            (Opcode::UserFunction(_), _) | (_, None) => write!(f, "{}", self.opcode),
            (op, Some(id)) => write!(f, "{} {}", op, id),
        }
    }
}

/// ## Immutable token sequence

#[derive(Clone, PartialEq, Eq)]
pub struct Program {
    tokens: Rc<[Token]>,
}

impl Program {
    pub fn len(&self) -> usize {
        self.tokens.len()
    }
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }
    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }
    pub fn slice(&self, range: std::ops::Range<usize>) -> Program {
        Program::from(self.tokens[range].to_vec())
    }
}

impl Default for Program {
    fn default() -> Program {
        Program::from(Vec::new())
    }
}

impl From<Vec<Token>> for Program {
    fn from(tokens: Vec<Token>) -> Program {
        Program {
            tokens: tokens.into(),
        }
    }
}

impl std::str::FromStr for Program {
    type Err = LexError;
    fn from_str(s: &str) -> Result<Program, LexError> {
        super::lex(s)
    }
}

impl std::fmt::Debug for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.tokens.iter()).finish()
    }
}

impl std::fmt::Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut first = true;
        for token in self.tokens.iter() {
            if !first {
                write!(f, " ")?;
            }
            first = false;
            write!(f, "{}", token)?;
        }
        Ok(())
    }
}
