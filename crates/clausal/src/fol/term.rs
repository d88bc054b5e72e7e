//! Terms in first-order logic

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A variable in first-order logic
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Variable {
    pub name: String,
}

impl Variable {
    pub fn new(name: impl Into<String>) -> Self {
        Variable { name: name.into() }
    }
}

/// A constant symbol
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Constant {
    pub name: String,
}

impl Constant {
    pub fn new(name: impl Into<String>) -> Self {
        Constant { name: name.into() }
    }
}

/// A function symbol with arity
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FunctionSymbol {
    pub name: String,
    pub arity: usize,
}

impl FunctionSymbol {
    pub fn new(name: impl Into<String>, arity: usize) -> Self {
        FunctionSymbol {
            name: name.into(),
            arity,
        }
    }
}

/// A term in first-order logic
///
/// Terms compare structurally: two terms are equal when their symbol names
/// and argument lists are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Term {
    Variable(Variable),
    Constant(Constant),
    Function(FunctionSymbol, Vec<Term>),
}

impl Term {
    /// Build a variable term
    pub fn var(name: impl Into<String>) -> Term {
        Term::Variable(Variable::new(name))
    }

    /// Build a constant term
    pub fn constant(name: impl Into<String>) -> Term {
        Term::Constant(Constant::new(name))
    }

    /// Build a function application; the arity is taken from `args`
    pub fn function(name: impl Into<String>, args: Vec<Term>) -> Term {
        Term::Function(FunctionSymbol::new(name, args.len()), args)
    }

    pub fn is_variable(&self) -> bool {
        matches!(self, Term::Variable(_))
    }

    pub fn as_variable(&self) -> Option<&Variable> {
        match self {
            Term::Variable(v) => Some(v),
            _ => None,
        }
    }

    /// Symbol name of the head of this term
    pub fn name(&self) -> &str {
        match self {
            Term::Variable(v) => &v.name,
            Term::Constant(c) => &c.name,
            Term::Function(f, _) => &f.name,
        }
    }

    /// Check whether the term contains no variables
    pub fn is_ground(&self) -> bool {
        match self {
            Term::Variable(_) => false,
            Term::Constant(_) => true,
            Term::Function(_, args) => args.iter().all(Term::is_ground),
        }
    }

    /// Get all variables in this term, in order of first occurrence
    pub fn variables(&self) -> IndexSet<Variable> {
        let mut vars = IndexSet::new();
        self.collect_variables(&mut vars);
        vars
    }

    /// Collect all variables in this term
    pub fn collect_variables(&self, vars: &mut IndexSet<Variable>) {
        match self {
            Term::Variable(v) => {
                vars.insert(v.clone());
            }
            Term::Constant(_) => {}
            Term::Function(_, args) => {
                for arg in args {
                    arg.collect_variables(vars);
                }
            }
        }
    }

    /// Check if `var` occurs anywhere in this term
    pub fn contains_variable(&self, var: &Variable) -> bool {
        match self {
            Term::Variable(v) => v == var,
            Term::Constant(_) => false,
            Term::Function(_, args) => args.iter().any(|arg| arg.contains_variable(var)),
        }
    }

    /// Nesting depth; variables and constants have depth 0
    pub fn depth(&self) -> usize {
        match self {
            Term::Function(_, args) => 1 + args.iter().map(Term::depth).max().unwrap_or(0),
            _ => 0,
        }
    }

    /// Subterm reached by following `path` (argument indices from the root)
    pub fn subterm_at(&self, path: &[usize]) -> Option<&Term> {
        match path.split_first() {
            None => Some(self),
            Some((&i, rest)) => match self {
                Term::Function(_, args) => args.get(i)?.subterm_at(rest),
                _ => None,
            },
        }
    }

    /// Copy of this term with the subterm at `path` replaced
    ///
    /// Returns `None` if the path does not exist.
    pub fn replace_at(&self, path: &[usize], replacement: &Term) -> Option<Term> {
        match path.split_first() {
            None => Some(replacement.clone()),
            Some((&i, rest)) => match self {
                Term::Function(f, args) => {
                    let mut new_args = args.clone();
                    let slot = new_args.get_mut(i)?;
                    *slot = args[i].replace_at(rest, replacement)?;
                    Some(Term::Function(f.clone(), new_args))
                }
                _ => None,
            },
        }
    }

    /// Paths of all non-variable subterms in pre-order (root first)
    pub fn non_variable_paths(&self) -> Vec<Vec<usize>> {
        let mut paths = Vec::new();
        let mut stack: Vec<(Vec<usize>, &Term)> = vec![(Vec::new(), self)];
        while let Some((path, term)) = stack.pop() {
            match term {
                Term::Variable(_) => {}
                Term::Constant(_) => paths.push(path),
                Term::Function(_, args) => {
                    for (i, arg) in args.iter().enumerate().rev() {
                        let mut child = path.clone();
                        child.push(i);
                        stack.push((child, arg));
                    }
                    paths.push(path);
                }
            }
        }
        paths
    }
}

// Display implementations for pretty printing

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Variable(v) => write!(f, "{}", v),
            Term::Constant(c) => write!(f, "{}", c),
            Term::Function(func, args) => {
                write!(f, "{}(", func.name)?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{}", arg)?;
                }
                write!(f, ")")
            }
        }
    }
}
