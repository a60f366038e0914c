use core::marker::PhantomData;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub mod file;
pub mod span;
pub mod symbol;
pub mod types;
pub mod variable;

#[repr(transparent)]
pub struct Id<T>(u32, PhantomData<*const T>);

impl<T> Id<T> {
  pub const fn new(index: u32) -> Self {
    Self(index, PhantomData)
  }

  #[inline]
  pub fn index(&self) -> u32 {
    self.0
  }
}

// Manual impls: derives would require `T` itself to be Copy/Eq/Hash.
impl<T> Clone for Id<T> {
  fn clone(&self) -> Self {
    *self
  }
}

impl<T> Copy for Id<T> {}

impl<T> PartialEq for Id<T> {
  fn eq(
    &self,
    other: &Self,
  ) -> bool {
    self.0 == other.0
  }
}

impl<T> Eq for Id<T> {}

impl<T> std::hash::Hash for Id<T> {
  fn hash<H: std::hash::Hasher>(
    &self,
    state: &mut H,
  ) {
    self.0.hash(state);
  }
}

impl<T> Default for Id<T> {
  fn default() -> Self {
    Self::new(0)
  }
}

impl<T> std::fmt::Debug for Id<T> {
  fn fmt(
    &self,
    f: &mut std::fmt::Formatter<'_>,
  ) -> std::fmt::Result {
    write!(f, "Id({})", self.0)
  }
}

impl<T> Serialize for Id<T> {
  fn serialize<S: Serializer>(
    &self,
    serializer: S,
  ) -> Result<S::Ok, S::Error> {
    serializer.serialize_u32(self.0)
  }
}

impl<'de, T> Deserialize<'de> for Id<T> {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    u32::deserialize(deserializer).map(Id::new)
  }
}

#[derive(Default, Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BytePosition(pub u32);

impl std::fmt::Display for BytePosition {
  fn fmt(
    &self,
    f: &mut std::fmt::Formatter<'_>,
  ) -> std::fmt::Result {
    write!(f, "{}", self.0)
  }
}

#[derive(Debug, Clone)]
pub struct Store<T> {
  data: Vec<T>,
}

impl<T> Default for Store<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T> Store<T> {
  pub fn new() -> Self {
    Self { data: Vec::new() }
  }

  pub fn alloc(
    &mut self,
    v: T,
  ) -> Id<T> {
    let id = Id::new(self.data.len() as u32);
    self.data.push(v);
    id
  }

  pub fn get(
    &self,
    id: &Id<T>,
  ) -> &T {
    &self.data[id.0 as usize]
  }

  pub fn len(&self) -> usize {
    self.data.len()
  }

  pub fn is_empty(&self) -> bool {
    self.data.is_empty()
  }

  pub fn iter(&self) -> impl Iterator<Item = (Id<T>, &T)> {
    self.data.iter().enumerate().map(|(i, v)| (Id::new(i as u32), v))
  }

  /// Drops every entry allocated at or after `len`. Ids past it become dangling.
  pub fn truncate(
    &mut self,
    len: usize,
  ) {
    self.data.truncate(len);
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn store_hands_out_sequential_ids() {
    let mut store: Store<&str> = Store::new();
    let a = store.alloc("a");
    let b = store.alloc("b");

    assert_eq!(a.index(), 0);
    assert_eq!(b.index(), 1);
    assert_eq!(*store.get(&b), "b");
    assert_eq!(store.len(), 2);
  }

  #[test]
  fn truncate_forgets_later_allocations() {
    let mut store: Store<u32> = Store::new();
    store.alloc(1);
    store.alloc(2);
    store.truncate(1);

    assert_eq!(store.len(), 1);
    assert_eq!(store.alloc(3).index(), 1);
  }
}
