//! Star systems that planets orbit, addressed by handle.

use bevy_ecs::prelude::*;
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Handle to a star system in a [`SystemRegistry`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SystemId(pub u32);

/// Read-only view of star system positions.
pub trait SystemPositions {
    /// Current world position of the system centre, if the system exists.
    fn system_position(&self, id: SystemId) -> Option<Vec2>;
}

/// A star system: a named centre that planets revolve around.
#[derive(Clone, Debug, PartialEq)]
pub struct StarSystem {
    pub id: SystemId,
    pub name: String,
    pub position: Vec2,
}

/// Owns every star system; planets refer to them by [`SystemId`].
#[derive(Resource, Clone, Debug, Default)]
pub struct SystemRegistry {
    systems: Vec<StarSystem>,
}

impl SystemRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a system and return its handle.
    pub fn insert(&mut self, name: impl Into<String>, position: Vec2) -> SystemId {
        let id = SystemId(self.systems.len() as u32);
        self.systems.push(StarSystem {
            id,
            name: name.into(),
            position,
        });
        id
    }

    pub fn get(&self, id: SystemId) -> Option<&StarSystem> {
        self.systems.get(id.0 as usize)
    }

    /// Move a system. Returns `false` if the handle is unknown.
    pub fn set_position(&mut self, id: SystemId, position: Vec2) -> bool {
        match self.systems.get_mut(id.0 as usize) {
            Some(system) => {
                system.position = position;
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.systems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.systems.is_empty()
    }
}

impl SystemPositions for SystemRegistry {
    fn system_position(&self, id: SystemId) -> Option<Vec2> {
        self.get(id).map(|system| system.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_assigns_sequential_ids() {
        let mut registry = SystemRegistry::new();
        let a = registry.insert("Alpha", Vec2::new(1.0, 2.0));
        let b = registry.insert("Beta", Vec2::new(-5.0, 0.0));
        assert_eq!(a, SystemId(0));
        assert_eq!(b, SystemId(1));
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get(b).unwrap().name, "Beta");
    }

    #[test]
    fn test_position_lookup() {
        let mut registry = SystemRegistry::new();
        let id = registry.insert("Alpha", Vec2::new(1.0, 2.0));
        assert_eq!(registry.system_position(id), Some(Vec2::new(1.0, 2.0)));
        assert_eq!(registry.system_position(SystemId(9)), None);
    }

    #[test]
    fn test_set_position() {
        let mut registry = SystemRegistry::new();
        let id = registry.insert("Alpha", Vec2::ZERO);
        assert!(registry.set_position(id, Vec2::new(10.0, 10.0)));
        assert_eq!(registry.system_position(id), Some(Vec2::new(10.0, 10.0)));
        assert!(!registry.set_position(SystemId(3), Vec2::ONE));
    }
}
