use crate::ecs::store::Component;

/// Marks an entity as temporarily disabled. The render system skips
/// entities carrying an inactive status; entities without the component are
/// treated as active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivationStatus {
    pub is_active: bool,
}

impl Default for ActivationStatus {
    fn default() -> Self {
        Self { is_active: true }
    }
}

impl Component for ActivationStatus {}
