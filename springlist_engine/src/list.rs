// Copyright 2025 the Springlist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The ordered item sequence.
//!
//! Order is the visual top-to-bottom order. Items are addressed by [`ItemId`]; an id's index
//! changes with every swap, so lookups go through [`ItemList::position`] each time instead of a
//! cached map.

use kurbo::Point;

use crate::item::{Item, ItemId};

/// Ordered, swap-only sequence of items. Never gains or loses items after construction.
#[derive(Clone, Debug)]
pub struct ItemList<H> {
    items: Vec<Item<H>>,
}

impl<H> ItemList<H> {
    /// Wrap `items` in their initial order. Ids must be unique.
    pub fn new(items: Vec<Item<H>>) -> Self {
        debug_assert!(
            {
                let mut ids: Vec<_> = items.iter().map(|i| i.id).collect();
                ids.sort_unstable();
                ids.windows(2).all(|w| w[0] != w[1])
            },
            "item ids must be unique"
        );
        Self { items }
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True if there are no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Current index of `id`, if present.
    pub fn position(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|i| i.id == id)
    }

    /// Item at `index`.
    pub fn get(&self, index: usize) -> Option<&Item<H>> {
        self.items.get(index)
    }

    /// Item at `index`, mutably.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Item<H>> {
        self.items.get_mut(index)
    }

    /// Item with `id`.
    pub fn by_id(&self, id: ItemId) -> Option<&Item<H>> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Exchange the items at `a` and `b`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn swap(&mut self, a: usize, b: usize) {
        self.items.swap(a, b);
    }

    /// Items in order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Item<H>> + '_ {
        self.items.iter()
    }

    /// Items in order, mutably.
    pub fn iter_mut(&mut self) -> impl ExactSizeIterator<Item = &mut Item<H>> + '_ {
        self.items.iter_mut()
    }

    /// Ids in order.
    pub fn ids(&self) -> Vec<ItemId> {
        self.items.iter().map(|i| i.id).collect()
    }

    /// First item, in list order, whose live box contains `pt`.
    ///
    /// Boxes include their top and left edges and exclude their bottom and right edges.
    pub fn hit_test(&self, pt: Point, row_width: f64) -> Option<&Item<H>> {
        self.items
            .iter()
            .find(|i| i.live_bounds(row_width).contains(pt))
    }
}
