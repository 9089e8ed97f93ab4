use super::pass::IntermediateNodePass;
use super::phases::component_complex_attribute_content::ComponentComplexAttributeContentPass;
use crate::ir::Node;
use crate::logging::Logger;

pub type BoxedPass = Box<dyn IntermediateNodePass + Send + Sync>;

/// Passes kept sorted by `order()`; passes with equal order keep their registration order.
#[derive(Default)]
pub struct PassPipeline {
    passes: Vec<BoxedPass>,
}

impl PassPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pipeline used for component documents.
    pub fn default_component_pipeline() -> Self {
        let mut pipeline = Self::new();
        pipeline.add(Box::new(ComponentComplexAttributeContentPass::new()));
        pipeline
    }

    pub fn add(&mut self, pass: BoxedPass) -> &mut Self {
        self.passes.push(pass);
        self.passes.sort_by_key(|pass| pass.order());
        self
    }

    pub fn pass_names(&self) -> Vec<&'static str> {
        self.passes.iter().map(|pass| pass.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.passes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.passes.is_empty()
    }

    pub fn run(&self, document: &mut Node, logger: &dyn Logger) {
        for pass in &self.passes {
            logger.debug(&format!("running pass {} (order {})", pass.name(), pass.order()));
            pass.execute(document, logger);
        }
    }
}
