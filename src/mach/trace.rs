use super::{Number, Stack};
use crate::lang::Opcode;

/// Buffered trace is handed to the sink once it grows past this many bytes.
pub const TRACE_CHUNK_LEN: usize = 2000;

pub type TraceSink = Box<dyn FnMut(&str)>;

/// ## Debug trace
///
/// One line per executed token: `OPCODE [stack] "output"`.

#[derive(Default)]
pub struct Trace {
    sink: Option<TraceSink>,
    buffer: String,
}

impl std::fmt::Debug for Trace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Trace {{ enabled: {} }}", self.is_enabled())
    }
}

impl Trace {
    pub fn new(sink: TraceSink) -> Trace {
        Trace {
            sink: Some(sink),
            buffer: String::new(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.sink.is_some()
    }

    pub fn record(&mut self, opcode: &Opcode, stack: &Stack<Number>, output: &str) {
        if self.sink.is_none() {
            return;
        }
        self.buffer
            .push_str(&format!("{} {} {:?}\n", opcode, stack, output));
        if self.buffer.len() > TRACE_CHUNK_LEN {
            self.flush();
        }
    }

    pub fn flush(&mut self) {
        if self.buffer.is_empty() {
            return;
        }
        if let Some(sink) = self.sink.as_mut() {
            sink(&self.buffer);
        }
        self.buffer.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_batches() {
        let chunks = Rc::new(RefCell::new(Vec::<String>::new()));
        let moved = chunks.clone();
        let mut trace = Trace::new(Box::new(move |s: &str| moved.borrow_mut().push(s.into())));
        let stack = Stack::from(vec![Number::from(2i64)]);
        for _ in 0..200 {
            trace.record(&Opcode::Two, &stack, "");
        }
        assert!(!chunks.borrow().is_empty());
        trace.flush();
        let all: String = chunks.borrow().concat();
        assert_eq!(all.lines().count(), 200);
        assert_eq!(all.lines().next(), Some("TWO [2] \"\""));
        assert!(chunks.borrow().iter().all(|c| c.len() <= TRACE_CHUNK_LEN + 32));
    }

    #[test]
    fn test_disabled() {
        let mut trace = Trace::default();
        trace.record(&Opcode::Two, &Stack::new(), "");
        assert!(trace.buffer.is_empty());
    }
}
