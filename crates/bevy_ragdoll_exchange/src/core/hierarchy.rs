use bevy::prelude::{Children, Entity, Name, World};

/// `root` followed by all of its descendants, depth-first in child order.
pub fn subtree(world: &World, root: Entity) -> Vec<Entity> {
    let mut entities = Vec::new();
    let mut pending = vec![root];

    while let Some(entity) = pending.pop() {
        entities.push(entity);
        if let Some(children) = world.get::<Children>(entity) {
            let children: &[Entity] = children;
            pending.extend(children.iter().rev().copied());
        }
    }

    entities
}

pub fn name_of(world: &World, entity: Entity) -> Option<&str> {
    world.get::<Name>(entity).map(Name::as_str)
}
