//! Fixed per-node table of method slots.

use http::Method;

use super::route::Route;
use crate::method::{method_index, ALL_METHODS, METHOD_COUNT};

/// One route slot per standard HTTP verb.
///
/// Allocated lazily the first time a node terminates a route, so interior
/// nodes pay nothing for it. Lookup is a single array index.
pub(crate) struct RouteMap<H> {
    slots: [Option<Route<H>>; METHOD_COUNT],
}

impl<H> RouteMap<H> {
    pub(crate) fn new() -> Self {
        Self {
            slots: std::array::from_fn(|_| None),
        }
    }

    #[inline]
    pub(crate) fn get(&self, method: &Method) -> Option<&Route<H>> {
        method_index(method).and_then(|i| self.slots[i].as_ref())
    }

    #[inline]
    pub(crate) fn get_slot(&self, index: usize) -> Option<&Route<H>> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    /// Fill an empty slot. Callers check occupancy first.
    pub(crate) fn set(&mut self, index: usize, route: Route<H>) {
        self.slots[index] = Some(route);
    }

    /// Populated slots, in slot order.
    pub(crate) fn iter(&self) -> impl Iterator<Item = (&Route<H>, &'static Method)> {
        self.slots
            .iter()
            .zip(ALL_METHODS.iter())
            .filter_map(|(slot, method)| slot.as_ref().map(|route| (route, method)))
    }
}
