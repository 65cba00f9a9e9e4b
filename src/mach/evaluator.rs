use super::function::declare;
use super::guard::check_loop;
use super::trace::Trace;
use super::{Cursor, EvalError, Limit, Limits, Number, Operation, Stack, Var};
use crate::lang::{Opcode, Program, Token};
use std::time::{Duration, Instant};
use tracing::{debug, trace};

type Result<T> = std::result::Result<T, EvalError>;

/// ## Outcome of one call to `Evaluator::run`

#[derive(Debug)]
pub enum RunResult {
    /// Waiting on `INPUT`. Supply a line and run again.
    Paused(Evaluator),
    Completed {
        stack: Vec<Number>,
        output: String,
    },
    Failed(EvalError),
}

/// One executing program: the main program or a function body.
#[derive(Debug)]
struct Frame {
    cursor: Cursor,
    stack: Stack<Number>,
    var: Var,
}

impl Frame {
    fn new(cursor: Cursor, stack: Stack<Number>, var: Var) -> Frame {
        Frame { cursor, stack, var }
    }
}

enum Flow {
    Next,
    Pause,
    Call(Frame),
}

/// ## raysCode evaluator
///
/// Executes one token at a time against the operand stack. Calling a user
/// function pushes a frame holding copies of the caller's tables and the
/// popped arguments; when its body runs out the frame's stack is appended
/// to the caller's. `INPUT` without a buffered line suspends the whole
/// instance, frames included, until `supply_input`.

#[derive(Debug)]
pub struct Evaluator {
    frame: Frame,
    callers: Vec<Frame>,
    held: usize,
    paused: bool,
    input: Option<String>,
    output: String,
    limits: Limits,
    elapsed: Duration,
    trace: Trace,
}

impl Evaluator {
    pub fn new(program: Program) -> Evaluator {
        Evaluator {
            frame: Frame::new(Cursor::new(program), Stack::new(), Var::new()),
            callers: vec![],
            held: 0,
            paused: false,
            input: None,
            output: String::new(),
            limits: Limits::default(),
            elapsed: Duration::default(),
            trace: Trace::default(),
        }
    }

    pub fn with_limits(mut self, limits: Limits) -> Evaluator {
        self.limits = limits;
        self
    }

    /// Send a line per executed token to `sink`, in chunks.
    pub fn with_trace<F: FnMut(&str) + 'static>(mut self, sink: F) -> Evaluator {
        self.trace = Trace::new(Box::new(sink));
        self
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Stack of the innermost executing frame.
    pub fn stack(&self) -> &Stack<Number> {
        &self.frame.stack
    }

    pub fn var(&self) -> &Var {
        &self.frame.var
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    /// Flush output accumulated so far, typically while paused.
    pub fn take_output(&mut self) -> String {
        std::mem::take(&mut self.output)
    }

    /// Buffer the line for `INPUT` and clear the paused flag.
    /// The cursor stays where it is.
    pub fn supply_input<S: Into<String>>(mut self, line: S) -> Evaluator {
        debug!(position = self.frame.cursor.position(), "input supplied");
        self.input = Some(line.into());
        self.paused = false;
        self
    }

    pub fn run(mut self) -> RunResult {
        let started = Instant::now();
        let result = self.execute(started);
        self.elapsed += started.elapsed();
        self.trace.flush();
        match result {
            Err(error) => {
                debug!(%error, "evaluation failed");
                RunResult::Failed(error)
            }
            Ok(()) if self.paused => {
                debug!(position = self.frame.cursor.position(), "paused for input");
                RunResult::Paused(self)
            }
            Ok(()) => {
                debug!(depth = self.frame.stack.len(), "evaluation completed");
                RunResult::Completed {
                    stack: self.frame.stack.into_vec(),
                    output: self.output,
                }
            }
        }
    }

    fn execute(&mut self, started: Instant) -> Result<()> {
        while !self.paused {
            if self.frame.cursor.at_end() {
                if !self.return_from_call() {
                    return Ok(());
                }
                continue;
            }
            let token = match self.frame.cursor.current() {
                Some(token) => token.clone(),
                None => break,
            };
            let position = self.frame.cursor.position();
            let opcode = self.resolve(&token);
            self.check_arguments(&opcode, position)?;
            match self.step(&opcode, &token, position)? {
                Flow::Pause => {
                    self.paused = true;
                    return Ok(());
                }
                Flow::Next => {
                    self.trace.record(&opcode, &self.frame.stack, &self.output);
                    self.frame.cursor.advance(1);
                }
                Flow::Call(frame) => {
                    self.trace.record(&opcode, &self.frame.stack, &self.output);
                    self.frame.cursor.advance(1);
                    self.call(frame, position)?;
                }
            }
            trace!(%opcode, position, depth = self.frame.stack.len(), "executed");
            self.check_limits(started, position)?;
        }
        Ok(())
    }

    /// A `VARIABLE` naming a declared function, and no variable, is a call.
    fn resolve(&self, token: &Token) -> Opcode {
        match (token.opcode(), token.id()) {
            (Opcode::Variable, Some(name)) if self.frame.var.fetch(name).is_none() => {
                match self.frame.var.function(name) {
                    Some(func) => Opcode::UserFunction(func.clone()),
                    None => Opcode::Variable,
                }
            }
            (opcode, _) => opcode.clone(),
        }
    }

    fn check_arguments(&self, opcode: &Opcode, position: usize) -> Result<()> {
        if self.frame.stack.len() < opcode.arguments() {
            return Err(self.underflow(opcode, position));
        }
        Ok(())
    }

    fn check_limits(&self, started: Instant, position: usize) -> Result<()> {
        if self.held + self.frame.stack.len() > self.limits.max_stack {
            return Err(EvalError::ResourceLimitExceeded(Limit::Stack, position));
        }
        if self.elapsed + started.elapsed() > self.limits.max_duration {
            return Err(EvalError::ResourceLimitExceeded(Limit::Time, position));
        }
        Ok(())
    }

    fn call(&mut self, frame: Frame, position: usize) -> Result<()> {
        if self.callers.len() >= self.limits.max_calls {
            return Err(EvalError::ResourceLimitExceeded(Limit::Calls, position));
        }
        let caller = std::mem::replace(&mut self.frame, frame);
        self.held += caller.stack.len();
        self.callers.push(caller);
        debug!(depth = self.callers.len(), "call");
        Ok(())
    }

    /// Returns false when the main program itself has ended.
    fn return_from_call(&mut self) -> bool {
        let caller = match self.callers.pop() {
            Some(caller) => caller,
            None => return false,
        };
        self.held -= caller.stack.len();
        let mut callee = std::mem::replace(&mut self.frame, caller);
        debug!(returns = callee.stack.len(), depth = self.callers.len(), "return");
        self.frame.stack.append(&mut callee.stack);
        true
    }

    fn underflow(&self, opcode: &Opcode, position: usize) -> EvalError {
        EvalError::StackUnderflow {
            opcode: opcode.clone(),
            position,
            needed: opcode.arguments(),
            found: self.frame.stack.len(),
        }
    }

    fn pop(&mut self, opcode: &Opcode, position: usize) -> Result<Number> {
        match self.frame.stack.pop() {
            Some(val) => Ok(val),
            None => Err(self.underflow(opcode, position)),
        }
    }

    /// Top of stack first.
    fn pop_2(&mut self, opcode: &Opcode, position: usize) -> Result<(Number, Number)> {
        match self.frame.stack.pop_2() {
            Some(pair) => Ok(pair),
            None => Err(self.underflow(opcode, position)),
        }
    }

    fn malformed(opcode: &Opcode, id: &str, missing: Opcode, position: usize) -> EvalError {
        EvalError::MalformedBlock {
            opcode: opcode.clone(),
            id: id.to_string(),
            missing,
            position,
        }
    }

    fn step(&mut self, opcode: &Opcode, token: &Token, position: usize) -> Result<Flow> {
        use Opcode::*;
        let id = token.id().unwrap_or_default();
        match opcode {
            Two => self.frame.stack.push(Number::from(2i64)),
            Three => self.frame.stack.push(Number::from(3i64)),
            Infinity => self.frame.stack.push(Number::Unbounded),
            Size => {
                let size = self.frame.stack.len();
                self.frame.stack.push(Number::from(size));
            }
            Add | Subtract | Multiply | Divide => {
                let (lhs, rhs) = self.pop_2(opcode, position)?;
                let result = Operation::apply(opcode, lhs, rhs, position)?;
                self.frame.stack.push(result);
            }
            Swap => {
                let (top, next) = self.pop_2(opcode, position)?;
                self.frame.stack.push(top);
                self.frame.stack.push(next);
            }
            Pop => {
                self.pop(opcode, position)?;
            }
            Duplicate => {
                let top = self.pop(opcode, position)?;
                self.frame.stack.push(top.clone());
                self.frame.stack.push(top);
            }
            Roll => {
                if self.frame.stack.roll().is_none() {
                    self.check_arguments(opcode, position)?;
                }
            }
            Input => match self.input.take() {
                Some(line) => self.frame.stack.extend(line.chars().map(Number::from)),
                None => return Ok(Flow::Pause),
            },
            Output => match self.pop(opcode, position)? {
                Number::Unbounded => {
                    while let Some(val) = self.frame.stack.pop() {
                        self.write_char(val, position)?;
                    }
                }
                val => self.write_char(val, position)?,
            },
            Variable => match self.frame.var.fetch(id) {
                Some(val) => {
                    let val = val.clone();
                    self.frame.stack.push(val);
                }
                None => {
                    let assigning = matches!(
                        self.frame.cursor.peek(1).map(|t| t.opcode()),
                        Some(Opcode::Assignment)
                    );
                    if !assigning {
                        return Err(EvalError::UndefinedVariable(id.to_string(), position));
                    }
                }
            },
            Assignment => {
                let name = match self.frame.cursor.peek(-1) {
                    Some(prev) if prev.opcode() == &Opcode::Variable => prev.id(),
                    _ => None,
                };
                let name = match name {
                    Some(name) => name.to_string(),
                    None => return Err(EvalError::MissingAssignmentTarget(position)),
                };
                if let Some(val) = self.frame.stack.last().cloned() {
                    self.frame.var.store(&name, val);
                }
            }
            If => {
                let jump = self.frame.stack.last().map_or(false, Number::is_positive);
                if jump
                    && !self.frame.cursor.seek_forward(|t| {
                        t.id() == Some(id) && matches!(t.opcode(), Else | EndIf)
                    })
                {
                    return Err(Evaluator::malformed(opcode, id, EndIf, position));
                }
            }
            Else => {
                if !self.frame.cursor.seek_forward(|t| t.is(&EndIf, id)) {
                    return Err(Evaluator::malformed(opcode, id, EndIf, position));
                }
            }
            EndIf | StartLoop => {}
            EndLoop => {
                let start = check_loop(&self.frame.cursor, id, &self.frame.var)?;
                self.frame.cursor.seek(start);
            }
            StartFunc => {
                let func = declare(&mut self.frame.cursor)?;
                debug!(function = %func.name(), params = func.params(), "declared");
                self.frame.var.define(func);
            }
            Param | EndFunc => return Err(EvalError::UnexpectedMarker(opcode.clone(), position)),
            UserFunction(func) => {
                let args = match self.frame.stack.pop_n(func.params()) {
                    Some(args) => args,
                    None => {
                        self.check_arguments(opcode, position)?;
                        vec![]
                    }
                };
                let var = self.frame.var.clone();
                let cursor = Cursor::with_offset(func.body().clone(), func.offset());
                return Ok(Flow::Call(Frame::new(cursor, Stack::from(args), var)));
            }
        }
        Ok(Flow::Next)
    }

    fn write_char(&mut self, val: Number, position: usize) -> Result<()> {
        match val.to_char() {
            Some(ch) => {
                self.output.push(ch);
                Ok(())
            }
            None => Err(EvalError::InvalidCharacter(val, position)),
        }
    }
}
