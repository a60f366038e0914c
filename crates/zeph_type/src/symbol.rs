use std::collections::HashMap;

use crate::{
  Store,
  span::Span,
  types::DataType,
  variable::{StorageKind, Variable, VariableId},
};

/// Variables visible to the function being compiled.
///
/// Names are unique per table. Temporaries take the next free `_N` name.
#[derive(Debug, Default)]
pub struct SymbolTable {
  pub variables: Store<Variable>,
  pub map: HashMap<String, VariableId>,
  temp_counter: u32,
}

impl SymbolTable {
  pub fn new() -> Self {
    Self::default()
  }

  /// Declares `variable`, replacing any previous declaration under the same name.
  pub fn declare(
    &mut self,
    variable: Variable,
  ) -> VariableId {
    let name = variable.name.clone();
    let id = self.variables.alloc(variable);
    self.map.insert(name, id);
    id
  }

  pub fn has(
    &self,
    name: &str,
  ) -> bool {
    self.map.contains_key(name)
  }

  pub fn lookup(
    &self,
    name: &str,
  ) -> Option<&Variable> {
    self.map.get(name).map(|id| self.variables.get(id))
  }

  /// Registers a fresh initialized temporary of type `ty` and returns it.
  ///
  /// Numbers already taken by a declared variable are skipped.
  pub fn temp_variable_for_write(
    &mut self,
    ty: DataType,
    span: Span,
  ) -> &Variable {
    let mut name = format!("_{}", self.temp_counter);
    while self.has(&name) {
      self.temp_counter += 1;
      name = format!("_{}", self.temp_counter);
    }
    self.temp_counter += 1;

    let mut variable = Variable::new(name, ty, StorageKind::Temporary, span);
    variable.initialized = true;

    let id = self.declare(variable);
    self.variables.get(&id)
  }

  pub fn checkpoint(&self) -> SymbolCheckpoint {
    SymbolCheckpoint {
      len: self.variables.len(),
      temp_counter: self.temp_counter,
    }
  }

  /// Forgets every variable declared after `checkpoint` and rewinds temporary numbering.
  pub fn rollback(
    &mut self,
    checkpoint: SymbolCheckpoint,
  ) {
    self.map.retain(|_, id| (id.index() as usize) < checkpoint.len);
    self.variables.truncate(checkpoint.len);
    self.temp_counter = checkpoint.temp_counter;
  }

  pub fn temporaries(&self) -> impl Iterator<Item = &Variable> {
    self.variables.iter().map(|(_, v)| v).filter(|v| v.is_temporary())
  }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SymbolCheckpoint {
  len: usize,
  temp_counter: u32,
}
