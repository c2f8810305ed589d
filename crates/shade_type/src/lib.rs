use core::marker::PhantomData;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub mod definition;
pub mod file;
pub mod span;
pub mod types;
pub mod value;

/// Typed index into a [`Store`]. Two ids are equal only if they point at the same slot,
/// which is what the lowering pass treats as symbol identity.
#[repr(transparent)]
pub struct Id<T>(pub u32, PhantomData<*const T>);

impl<T> Id<T> {
  pub const fn new(index: u32) -> Self {
    Id(index, PhantomData)
  }

  pub fn index(&self) -> u32 {
    self.0
  }
}

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

impl<T> Hash for Id<T> {
  fn hash<H: Hasher>(
    &self,
    state: &mut H,
  ) {
    self.0.hash(state);
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

impl<T> Default for Id<T> {
  fn default() -> Self {
    Id::new(0)
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

/// Append-only arena. Slots are never removed, so an `Id` stays valid for the
/// lifetime of the store.
#[derive(Debug, Clone, PartialEq)]
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

  pub fn try_get(
    &self,
    id: &Id<T>,
  ) -> Option<&T> {
    self.data.get(id.0 as usize)
  }

  pub fn get_mut(
    &mut self,
    id: Id<T>,
  ) -> &mut T {
    &mut self.data[id.0 as usize]
  }

  pub fn contains(
    &self,
    id: &Id<T>,
  ) -> bool {
    (id.0 as usize) < self.data.len()
  }

  pub fn len(&self) -> usize {
    self.data.len()
  }

  pub fn is_empty(&self) -> bool {
    self.data.is_empty()
  }

  pub fn get_all(&self) -> &[T] {
    &self.data
  }

  pub fn iter(&self) -> impl Iterator<Item = (Id<T>, &T)> {
    self.data.iter().enumerate().map(|(i, v)| (Id::new(i as u32), v))
  }
}

impl<T: Serialize> Serialize for Store<T> {
  fn serialize<S: Serializer>(
    &self,
    serializer: S,
  ) -> Result<S::Ok, S::Error> {
    self.data.serialize(serializer)
  }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Store<T> {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    Vec::<T>::deserialize(deserializer).map(|data| Store { data })
  }
}
