use crate::{Term, Variable, VariableRef};
use std::collections::HashMap;
use std::fmt;
use std::hash::BuildHasher;

/// A mapping from variables to terms for one candidate solution.
///
/// Implementations decide what "bound" means. A [Solution] may know a variable without having a
/// value for it, while a [HashMap] treats every missing key as unbound.
pub trait Bindings {
    /// Returns the value of `variable`, if any.
    fn get(&self, variable: VariableRef<'_>) -> Option<&Term>;

    /// Returns whether `variable` currently has a value.
    fn is_bound(&self, variable: VariableRef<'_>) -> bool {
        self.get(variable).is_some()
    }
}

impl<S: BuildHasher> Bindings for HashMap<Variable, Term, S> {
    fn get(&self, variable: VariableRef<'_>) -> Option<&Term> {
        HashMap::get(self, &variable.into_owned())
    }
}

/// A binding that preserves the order of its variables.
///
/// Variables can be declared without a value. They are reported as unbound.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Solution {
    variables: Vec<Variable>,
    values: Vec<Option<Term>>,
}

impl Solution {
    /// Creates an empty solution.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a solution from `(variable, value)` pairs.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (Variable, Option<Term>)>) -> Self {
        let mut solution = Self::new();
        for (variable, value) in pairs {
            match value {
                Some(value) => solution.insert(variable, value),
                None => solution.declare(variable),
            }
        }
        solution
    }

    /// Declares `variable` without binding it.
    pub fn declare(&mut self, variable: Variable) {
        if self.position(variable.as_ref()).is_none() {
            self.variables.push(variable);
            self.values.push(None);
        }
    }

    /// Binds `variable` to `value`, replacing any previous value.
    pub fn insert(&mut self, variable: Variable, value: Term) {
        match self.position(variable.as_ref()) {
            Some(position) => self.values[position] = Some(value),
            None => {
                self.variables.push(variable);
                self.values.push(Some(value));
            }
        }
    }

    /// Removes the value of `variable`. The variable stays declared.
    pub fn unbind(&mut self, variable: VariableRef<'_>) {
        if let Some(position) = self.position(variable) {
            self.values[position] = None;
        }
    }

    /// Returns a copy of this solution extended with `other`, or [None] if both solutions bind a
    /// shared variable to different values.
    pub fn merge(&self, other: &Solution) -> Option<Solution> {
        let mut result = self.clone();
        for (variable, value) in other.iter() {
            match Bindings::get(&result, variable.as_ref()) {
                Some(existing) if existing != value => return None,
                Some(_) => {}
                None => result.insert(variable.clone(), value.clone()),
            }
        }
        Some(result)
    }

    /// The declared variables in insertion order.
    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    /// Iterates over the bound variables in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Variable, &Term)> {
        self.variables
            .iter()
            .zip(&self.values)
            .filter_map(|(variable, value)| value.as_ref().map(|value| (variable, value)))
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.values.iter().all(Option::is_none)
    }

    fn position(&self, variable: VariableRef<'_>) -> Option<usize> {
        self.variables.iter().position(|v| v.as_ref() == variable)
    }
}

impl Bindings for Solution {
    fn get(&self, variable: VariableRef<'_>) -> Option<&Term> {
        self.position(variable)
            .and_then(|position| self.values[position].as_ref())
    }
}

impl FromIterator<(Variable, Term)> for Solution {
    fn from_iter<T: IntoIterator<Item = (Variable, Term)>>(iter: T) -> Self {
        Self::from_pairs(iter.into_iter().map(|(v, t)| (v, Some(t))))
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (variable, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{variable}: {value}")?;
        }
        f.write_str("}")
    }
}
