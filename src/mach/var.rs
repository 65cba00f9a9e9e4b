use super::Number;
use crate::lang::UserFunction;
use std::collections::HashMap;
use std::rc::Rc;

/// ## Variable and function memory
///
/// Bindings are only ever inserted or overwritten. A function call gets a
/// clone, so nothing it binds is visible to the caller.

#[derive(Debug, Clone, Default)]
pub struct Var {
    vars: HashMap<Rc<str>, Number>,
    funcs: HashMap<Rc<str>, Rc<UserFunction>>,
}

impl Var {
    pub fn new() -> Var {
        Var::default()
    }

    pub fn fetch(&self, var_name: &str) -> Option<&Number> {
        self.vars.get(var_name)
    }

    pub fn store(&mut self, var_name: &str, value: Number) {
        match self.vars.get_mut(var_name) {
            Some(var) => *var = value,
            None => {
                self.vars.insert(var_name.into(), value);
            }
        }
    }

    pub fn function(&self, func_name: &str) -> Option<&Rc<UserFunction>> {
        self.funcs.get(func_name)
    }

    pub fn define(&mut self, func: UserFunction) {
        self.funcs.insert(func.name().clone(), Rc::new(func));
    }
}
