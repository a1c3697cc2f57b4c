// Active contacts of one gesture, kept in insertion order.
use crate::geometry::Point;
use crate::model::{GestureError, PointerId};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Contact {
    pub id: PointerId,
    pub position: Point,
    /// Position before the most recent move (equal to `position` right after add).
    pub last_position: Point,
}

impl Contact {
    pub fn delta(&self) -> Point {
        self.position - self.last_position
    }
}

/// Small ordered set; realistic sizes stay at ten contacts or fewer so a Vec scan wins.
#[derive(Clone, Debug, Default)]
pub struct PointerSet {
    contacts: Vec<Contact>,
}

impl PointerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, id: PointerId, position: Point) -> Result<(), GestureError> {
        if self.contains(id) {
            return Err(GestureError::DuplicatePointer(id));
        }
        self.contacts.push(Contact {
            id,
            position,
            last_position: position,
        });
        Ok(())
    }

    /// Returns the removed contact, or `None` when `id` was not active.
    pub fn remove(&mut self, id: PointerId) -> Option<Contact> {
        let idx = self.contacts.iter().position(|c| c.id == id)?;
        Some(self.contacts.remove(idx))
    }

    /// Returns false when `id` is not active.
    pub fn update_position(&mut self, id: PointerId, position: Point) -> bool {
        match self.contacts.iter_mut().find(|c| c.id == id) {
            Some(c) => {
                c.last_position = c.position;
                c.position = position;
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, id: PointerId) -> bool {
        self.contacts.iter().any(|c| c.id == id)
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = PointerId> + '_ {
        self.contacts.iter().map(|c| c.id)
    }

    pub fn position(&self, id: PointerId) -> Option<Point> {
        self.get(id).map(|c| c.position)
    }

    pub fn get(&self, id: PointerId) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Contact> + '_ {
        self.contacts.iter()
    }
}
