use articula_domain::registry::{FeatureSlice, InitializedSlice, SliceRegistry};
use std::any::Any;

#[derive(Debug)]
struct Alpha(u8);

#[derive(Debug)]
struct Beta;

impl FeatureSlice for Alpha {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl FeatureSlice for Beta {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[test]
fn registry_finds_slices_by_type() {
    let registry: SliceRegistry =
        [InitializedSlice::new(Alpha(7)), InitializedSlice::new(Beta)].into_iter().collect();

    assert_eq!(registry.len(), 2);
    assert_eq!(registry.get::<Alpha>().map(|a| a.0), Some(7));
    assert!(registry.get::<Beta>().is_some());
}

#[test]
fn first_registration_wins() {
    let mut registry = SliceRegistry::default();
    registry.register(InitializedSlice::new(Alpha(1)));
    registry.register(InitializedSlice::new(Alpha(2)));

    assert_eq!(registry.len(), 1);
    assert_eq!(registry.get::<Alpha>().map(|a| a.0), Some(1));
}

#[test]
fn missing_slice_is_none() {
    let registry = SliceRegistry::default();
    assert!(registry.get::<Beta>().is_none());
}
