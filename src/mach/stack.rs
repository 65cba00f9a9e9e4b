/// ## Operand stack
///
/// Depth limits are enforced by the evaluator once per executed token,
/// so pushes never fail here.

#[derive(Clone, PartialEq, Eq)]
pub struct Stack<T> {
    vec: Vec<T>,
}

impl<T: std::fmt::Debug> std::fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.vec)
    }
}

impl<T: std::fmt::Display> std::fmt::Display for Stack<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (index, val) in self.vec.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", val)?;
        }
        write!(f, "]")
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Stack<T> {
        Stack { vec: vec![] }
    }
}

impl<T> From<Vec<T>> for Stack<T> {
    fn from(vec: Vec<T>) -> Stack<T> {
        Stack { vec }
    }
}

impl<T> Stack<T> {
    pub fn new() -> Stack<T> {
        Stack::default()
    }
    pub fn len(&self) -> usize {
        self.vec.len()
    }
    pub fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }
    pub fn last(&self) -> Option<&T> {
        self.vec.last()
    }
    pub fn push(&mut self, val: T) {
        self.vec.push(val)
    }
    pub fn pop(&mut self) -> Option<T> {
        self.vec.pop()
    }
    pub fn pop_2(&mut self) -> Option<(T, T)> {
        let top = self.pop()?;
        match self.pop() {
            Some(next) => Some((top, next)),
            None => {
                self.push(top);
                None
            }
        }
    }
    /// Remove the top `len` values, keeping their relative order.
    pub fn pop_n(&mut self, len: usize) -> Option<Vec<T>> {
        if len > self.vec.len() {
            None
        } else {
            let range = (self.vec.len() - len)..;
            Some(self.vec.drain(range).collect())
        }
    }
    pub fn append(&mut self, other: &mut Stack<T>) {
        self.vec.append(&mut other.vec);
    }
    pub fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.vec.extend(iter)
    }
    /// Move the top value to the bottom.
    pub fn roll(&mut self) -> Option<()> {
        let top = self.vec.pop()?;
        self.vec.insert(0, top);
        Some(())
    }
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.vec.iter()
    }
    pub fn into_vec(self) -> Vec<T> {
        self.vec
    }
}
