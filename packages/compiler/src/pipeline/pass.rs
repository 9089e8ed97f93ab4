use crate::ir::Node;
use crate::logging::Logger;

/// Order given to passes that do not ask for a specific position.
pub const DEFAULT_PASS_ORDER: i32 = 0;

/// A transformation applied in place to a whole document tree.
///
/// Passes never fail: problems are reported as diagnostics attached to the tree.
pub trait IntermediateNodePass {
    fn name(&self) -> &'static str;

    /// Lower orders run first.
    fn order(&self) -> i32 {
        DEFAULT_PASS_ORDER
    }

    fn execute(&self, document: &mut Node, logger: &dyn Logger);
}
