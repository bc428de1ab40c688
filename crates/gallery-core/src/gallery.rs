//! The ordered gallery and its viewing cursor.
//!
//! [`Gallery`] is a doubly linked list laid out in an index arena: every
//! entry lives in a `Slot` inside one `Vec`, and the `prev`/`next`/`head`/
//! `tail`/`cursor` links are slot indices rather than pointers.
//!
//! # Invariants
//!
//! - Empty gallery: `head`, `tail` and `cursor` are all `None`.
//! - Non-empty: `head` has no `prev`, `tail` has no `next`.
//! - `a.next == Some(b)` iff `b.prev == Some(a)`.
//! - `cursor`, when set, indexes a live slot.
//! - The arena holds exactly the linked entries. Deleting swap-removes the
//!   slot and repairs the links of the slot that moved into its place.

use serde::Serialize;
use tracing::debug;

use crate::config::GalleryConfig;
use crate::entry::{truncate_name, Entry};
use crate::error::{GalleryError, GalleryResult};

/// Direction of a cursor step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

#[derive(Clone, Debug)]
struct Slot {
    entry: Entry,
    prev: Option<usize>,
    next: Option<usize>,
}

/// An ordered collection of photos with a movable viewing cursor.
///
/// Entries are appended at the tail and removed by name. The cursor starts on
/// the first photo ever inserted into an empty gallery and only moves on an
/// explicit [`step`](Gallery::step) or when the photo under it is deleted.
#[derive(Clone, Debug, Default)]
pub struct Gallery {
    slots: Vec<Slot>,
    head: Option<usize>,
    tail: Option<usize>,
    cursor: Option<usize>,
    config: GalleryConfig,
}

impl Gallery {
    /// Create an empty gallery with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty gallery with the given configuration.
    pub fn with_config(config: GalleryConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    pub fn config(&self) -> &GalleryConfig {
        &self.config
    }

    /// Number of photos in the gallery.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if the gallery holds no photos.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The photo under the cursor.
    pub fn current(&self) -> Option<&Entry> {
        self.cursor.map(|idx| &self.slots[idx].entry)
    }

    pub fn head(&self) -> Option<&Entry> {
        self.head.map(|idx| &self.slots[idx].entry)
    }

    pub fn tail(&self) -> Option<&Entry> {
        self.tail.map(|idx| &self.slots[idx].entry)
    }

    /// Returns `true` if a photo with exactly this name is present.
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    // ---------------------------------------------------------------
    // Mutation
    // ---------------------------------------------------------------

    /// Append a photo at the tail.
    ///
    /// The name is truncated to `max_name_chars`. If the gallery was empty the
    /// new photo also becomes the cursor; otherwise the cursor stays put.
    /// Fails only when the arena cannot grow, in which case nothing changes.
    pub fn insert(&mut self, name: &str) -> GalleryResult<&Entry> {
        self.insert_reserving(name, 1)
    }

    /// [`insert`](Gallery::insert) after reserving room for `additional`
    /// slots. The reservation is the only fallible step and runs before any
    /// link is touched.
    fn insert_reserving(&mut self, name: &str, additional: usize) -> GalleryResult<&Entry> {
        let entry = Entry::new(name, self.config.max_name_chars);

        let idx = self.slots.len();
        self.slots.try_reserve(additional).map_err(|_| GalleryError::OutOfMemory {
            requested: idx.saturating_add(additional),
        })?;

        self.slots.push(Slot {
            entry,
            prev: self.tail,
            next: None,
        });

        match self.tail {
            Some(tail) => self.slots[tail].next = Some(idx),
            None => {
                self.head = Some(idx);
                self.cursor = Some(idx);
            }
        }
        self.tail = Some(idx);

        let entry = &self.slots[idx].entry;
        debug!(name = entry.name(), len = idx + 1, "inserted photo");
        Ok(entry)
    }

    /// Remove the first photo, scanning from the head, whose name matches.
    ///
    /// The name is truncated the same way [`insert`](Gallery::insert) does
    /// before comparing. If the cursor was on the removed photo it moves to
    /// the photo after it, or to the head when the removed photo was the
    /// tail. The removed entry is handed back to the caller.
    pub fn delete(&mut self, name: &str) -> GalleryResult<Entry> {
        let needle = truncate_name(name, self.config.max_name_chars);
        let idx = self.position(needle).ok_or_else(|| GalleryError::NotFound {
            name: needle.to_owned(),
        })?;

        let (prev, next) = (self.slots[idx].prev, self.slots[idx].next);
        match prev {
            Some(p) => self.slots[p].next = next,
            None => self.head = next,
        }
        match next {
            Some(n) => self.slots[n].prev = prev,
            None => self.tail = prev,
        }

        if self.cursor == Some(idx) {
            self.cursor = next.or(self.head);
        }

        let removed = self.release(idx);
        debug!(name = removed.entry.name(), len = self.len(), "deleted photo");
        Ok(removed.entry)
    }

    /// Move the cursor one step and return the name now under it.
    ///
    /// At either end the cursor stays where it is, unless `wrap_around` is
    /// set, in which case it jumps to the opposite end.
    pub fn step(&mut self, direction: Direction) -> GalleryResult<&str> {
        let current = self.cursor.ok_or(GalleryError::Empty)?;
        let slot = &self.slots[current];

        let neighbour = match direction {
            Direction::Next => slot.next,
            Direction::Previous => slot.prev,
        };
        let target = match neighbour {
            Some(idx) => idx,
            None if self.config.wrap_around => match direction {
                Direction::Next => self.head.unwrap_or(current),
                Direction::Previous => self.tail.unwrap_or(current),
            },
            None => current,
        };

        self.cursor = Some(target);
        let name = self.slots[target].entry.name();
        debug!(?direction, name, moved = target != current, "cursor step");
        Ok(name)
    }

    /// Advance the cursor toward the tail.
    pub fn cursor_next(&mut self) -> GalleryResult<&str> {
        self.step(Direction::Next)
    }

    /// Move the cursor back toward the head.
    pub fn cursor_previous(&mut self) -> GalleryResult<&str> {
        self.step(Direction::Previous)
    }

    // ---------------------------------------------------------------
    // Traversal
    // ---------------------------------------------------------------

    /// Entries from head to tail.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            gallery: self,
            next: self.head,
        }
    }

    /// Photo names from head to tail. Lazy; an empty gallery yields nothing.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.iter().map(Entry::name)
    }

    /// An owned, serializable view of the gallery's order and cursor.
    pub fn snapshot(&self) -> GallerySnapshot {
        GallerySnapshot {
            photos: self.names().map(str::to_owned).collect(),
            current: self.current().map(|e| e.name().to_owned()),
        }
    }

    // ---------------------------------------------------------------
    // Internals
    // ---------------------------------------------------------------

    fn position(&self, name: &str) -> Option<usize> {
        let mut at = self.head;
        while let Some(idx) = at {
            let slot = &self.slots[idx];
            if slot.entry.name() == name {
                return Some(idx);
            }
            at = slot.next;
        }
        None
    }

    /// Drop an already unlinked slot from the arena.
    ///
    /// `swap_remove` moves the last slot into `idx`; every link that pointed
    /// at the old last index is rewritten to `idx`.
    fn release(&mut self, idx: usize) -> Slot {
        let last = self.slots.len() - 1;
        let removed = self.slots.swap_remove(idx);

        if idx != last {
            let (prev, next) = (self.slots[idx].prev, self.slots[idx].next);
            if let Some(p) = prev {
                self.slots[p].next = Some(idx);
            }
            if let Some(n) = next {
                self.slots[n].prev = Some(idx);
            }
            for link in [&mut self.head, &mut self.tail, &mut self.cursor] {
                if *link == Some(last) {
                    *link = Some(idx);
                }
            }
        }

        removed
    }
}

/// Iterator over a gallery's entries in order. See [`Gallery::iter`].
#[derive(Clone, Debug)]
pub struct Iter<'a> {
    gallery: &'a Gallery,
    next: Option<usize>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Entry;

    fn next(&mut self) -> Option<Self::Item> {
        let slot = &self.gallery.slots[self.next?];
        self.next = slot.next;
        Some(&slot.entry)
    }
}

impl<'a> IntoIterator for &'a Gallery {
    type Item = &'a Entry;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Photo order plus the name under the cursor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GallerySnapshot {
    pub photos: Vec<String>,
    pub current: Option<String>,
}
