use std::sync::{Arc, Mutex, PoisonError};

use tracing::debug;

use crate::RoutingDescriptor;

/// The service directory that routing descriptors are registered with.
pub trait Directory {
    /// Register a set of routing descriptors.
    fn add_router_descriptors(&self, descriptors: Vec<RoutingDescriptor>);
}

impl<T: Directory + ?Sized> Directory for &T {
    fn add_router_descriptors(&self, descriptors: Vec<RoutingDescriptor>) {
        (**self).add_router_descriptors(descriptors);
    }
}

impl<T: Directory + ?Sized> Directory for Arc<T> {
    fn add_router_descriptors(&self, descriptors: Vec<RoutingDescriptor>) {
        (**self).add_router_descriptors(descriptors);
    }
}

/// An in-process directory that keeps every descriptor registered with it.
#[derive(Debug, Default)]
pub struct MemoryDirectory {
    routers: Mutex<Vec<RoutingDescriptor>>,
}

impl MemoryDirectory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of registered descriptors in registration order.
    #[must_use]
    pub fn routers(&self) -> Vec<RoutingDescriptor> {
        self.lock().clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<RoutingDescriptor>> {
        self.routers.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Directory for MemoryDirectory {
    fn add_router_descriptors(&self, descriptors: Vec<RoutingDescriptor>) {
        debug!(count = descriptors.len(), "registering router descriptors");
        self.lock().extend(descriptors);
    }
}
