/// Fidelity of a render pass.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RenderQuality {
    /// Cheap preview at a fraction of the iteration budget.
    Fast,
    /// Full iteration budget.
    Precise,
}
