use crate::error::RuntimeError;

/// A named value created by a `let` declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    /// Case-sensitive name, unique within its table.
    pub name:  String,
    /// Current value.
    pub value: f64,
}

/// Insertion-ordered table of variables.
///
/// Names are never removed. Declaring a name twice is an error; changing a
/// value goes through [`VariableTable::set`].
#[derive(Debug, Clone, Default)]
pub struct VariableTable {
    variables: Vec<Variable>,
}

impl VariableTable {
    /// Creates an empty table.
    #[must_use]
    pub const fn new() -> Self {
        Self { variables: Vec::new() }
    }

    /// Creates a table with `pi` and `e` already declared.
    ///
    /// # Example
    /// ```
    /// use calq::interpreter::variables::VariableTable;
    ///
    /// let table = VariableTable::with_constants();
    /// assert_eq!(table.lookup("pi", 1).unwrap(), std::f64::consts::PI);
    /// assert_eq!(table.lookup("e", 1).unwrap(), std::f64::consts::E);
    /// ```
    #[must_use]
    pub fn with_constants() -> Self {
        Self { variables: vec![Variable { name:  "pi".to_string(),
                                          value: std::f64::consts::PI, },
                               Variable { name:  "e".to_string(),
                                          value: std::f64::consts::E, },] }
    }

    /// Returns `true` if `name` has been declared.
    #[must_use]
    pub fn is_declared(&self, name: &str) -> bool {
        self.variables.iter().any(|v| v.name == name)
    }

    /// Declares `name` with `value` and returns `value`.
    ///
    /// # Errors
    /// Returns `RuntimeError::AlreadyDeclared` if `name` is already in the
    /// table.
    ///
    /// # Example
    /// ```
    /// use calq::{error::RuntimeError, interpreter::variables::VariableTable};
    ///
    /// let mut table = VariableTable::new();
    /// assert_eq!(table.declare("x", 10.0, 1).unwrap(), 10.0);
    ///
    /// let err = table.declare("x", 3.0, 2).unwrap_err();
    /// assert!(matches!(err, RuntimeError::AlreadyDeclared { line: 2, .. }));
    /// ```
    pub fn declare(&mut self, name: &str, value: f64, line: usize) -> Result<f64, RuntimeError> {
        if self.is_declared(name) {
            return Err(RuntimeError::AlreadyDeclared { name: name.to_string(),
                                                       line });
        }
        self.variables.push(Variable { name: name.to_string(),
                                       value });
        Ok(value)
    }

    /// Returns the value bound to `name`.
    ///
    /// # Errors
    /// Returns `RuntimeError::UndefinedVariable` if `name` was never declared.
    pub fn lookup(&self, name: &str, line: usize) -> Result<f64, RuntimeError> {
        self.variables
            .iter()
            .find(|v| v.name == name)
            .map(|v| v.value)
            .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.to_string(),
                                                             line })
    }

    /// Replaces the value bound to an existing `name`.
    ///
    /// # Errors
    /// Returns `RuntimeError::UndefinedVariable` if `name` was never declared.
    ///
    /// # Example
    /// ```
    /// use calq::interpreter::variables::VariableTable;
    ///
    /// let mut table = VariableTable::new();
    /// assert!(table.set("x", 1.0, 1).is_err());
    ///
    /// table.declare("x", 1.0, 1).unwrap();
    /// table.set("x", 2.5, 2).unwrap();
    /// assert_eq!(table.lookup("x", 3).unwrap(), 2.5);
    /// ```
    pub fn set(&mut self, name: &str, value: f64, line: usize) -> Result<(), RuntimeError> {
        let variable =
            self.variables
                .iter_mut()
                .find(|v| v.name == name)
                .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.to_string(),
                                                                 line })?;
        variable.value = value;
        Ok(())
    }

    /// Iterates over the variables in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Variable> {
        self.variables.iter()
    }

    /// Number of declared variables, constants included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Returns `true` if nothing has been declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}
