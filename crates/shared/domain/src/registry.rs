//! Slice registry for modular features.
//! This provides a minimal type-erased container for the pre-initialized feature state.

use std::any::{Any, TypeId};
use std::fmt::Debug;

/// Marker trait for feature state that can be shared across threads.
pub trait FeatureSlice: Any + Debug + Send + Sync {
    /// Helper to allow downcasting from the trait object.
    fn as_any(&self) -> &dyn Any;
}

/// A container for an initialized feature.
#[derive(Debug)]
pub struct InitializedSlice {
    pub id: TypeId,
    pub state: Box<dyn FeatureSlice>,
}

impl InitializedSlice {
    /// Create a new initialized slice from a concrete state.
    pub fn new<T: FeatureSlice>(state: T) -> Self {
        Self { id: TypeId::of::<T>(), state: Box::new(state) }
    }
}

/// Every slice initialized at startup, looked up by concrete type.
#[derive(Debug, Default)]
pub struct SliceRegistry {
    slices: Vec<InitializedSlice>,
}

impl SliceRegistry {
    /// Adds a slice. Registering the same type twice keeps the first instance.
    pub fn register(&mut self, slice: InitializedSlice) {
        if !self.slices.iter().any(|s| s.id == slice.id) {
            self.slices.push(slice);
        }
    }

    #[must_use]
    pub fn get<T: FeatureSlice>(&self) -> Option<&T> {
        let id = TypeId::of::<T>();
        self.slices
            .iter()
            .find(|slice| slice.id == id)
            .and_then(|slice| slice.state.as_any().downcast_ref::<T>())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slices.len()
    }
}

impl FromIterator<InitializedSlice> for SliceRegistry {
    fn from_iter<I: IntoIterator<Item = InitializedSlice>>(iter: I) -> Self {
        let mut registry = Self::default();
        for slice in iter {
            registry.register(slice);
        }
        registry
    }
}
