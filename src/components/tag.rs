use crate::ecs::store::Component;

/// Name component for entity lookup via
/// [`World::get_entity_by_tag`](crate::ecs::World::get_entity_by_tag).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag(pub String);

impl Tag {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

impl Component for Tag {}
