//! Pass Pipeline Tests

use component_compiler::diagnostics::{collect_diagnostics, has_errors};
use component_compiler::ir::Node;
use component_compiler::logging::{LogLevel, Logger, NullLogger};
use component_compiler::pipeline::{IntermediateNodePass, PassPipeline};
use std::cell::RefCell;
use std::sync::{Arc, Mutex};

struct RecordingPass {
    name: &'static str,
    order: Option<i32>,
    log: Arc<Mutex<Vec<&'static str>>>,
}

impl IntermediateNodePass for RecordingPass {
    fn name(&self) -> &'static str {
        self.name
    }

    fn order(&self) -> i32 {
        self.order.unwrap_or(0)
    }

    fn execute(&self, document: &mut Node, _logger: &dyn Logger) {
        // Later passes expect attribute content to be reduced already.
        if self.name == "lowering" {
            assert!(document.children[0].children.is_empty());
        }
        self.log.lock().unwrap().push(self.name);
    }
}

#[derive(Default)]
struct RecordingLogger {
    messages: RefCell<Vec<(LogLevel, String)>>,
}

impl Logger for RecordingLogger {
    fn level(&self) -> LogLevel {
        LogLevel::Debug
    }
    fn log(&self, level: LogLevel, message: &str) {
        self.messages.borrow_mut().push((level, message.to_string()));
    }
}

const DOCUMENT: &str = r#"{
    "kind": "document",
    "file_path": "Pages/Index.razor",
    "children": [{
        "kind": "tagHelper",
        "tag_name": "Greeting",
        "descriptors": [{ "name": "Greeting", "kind": "component" }],
        "children": [{
            "kind": "htmlAttribute",
            "attribute_name": "title",
            "span": { "file_path": "Pages/Index.razor", "offset": 10, "line": 0, "col": 10, "length": 21 },
            "children": [{
                "kind": "genericValue",
                "children": [
                    { "kind": "htmlContent", "children": [{ "kind": "token", "content": "Hello ", "token_kind": "markup" }] },
                    { "kind": "expression", "children": [{ "kind": "token", "content": "name" }] }
                ]
            }]
        }]
    }]
}"#;

#[test]
fn complex_content_pass_runs_before_default_order_passes() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let mut pipeline = PassPipeline::new();
    pipeline.add(Box::new(RecordingPass {
        name: "lowering",
        order: None,
        log: log.clone(),
    }));
    pipeline.add(Box::new(
        component_compiler::pipeline::phases::component_complex_attribute_content::ComponentComplexAttributeContentPass::new(),
    ));

    assert_eq!(
        pipeline.pass_names(),
        vec!["ComponentComplexAttributeContent", "lowering"]
    );

    let mut document = Node::from_json(DOCUMENT).unwrap();
    pipeline.run(&mut document, &NullLogger);

    assert_eq!(*log.lock().unwrap(), vec!["lowering"]);
    assert!(has_errors(&document));
}

#[test]
fn passes_with_equal_order_keep_registration_order() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let mut pipeline = PassPipeline::new();
    for (name, order) in [("b", Some(5)), ("a", None), ("c", Some(5)), ("first", Some(-1))] {
        pipeline.add(Box::new(RecordingPass {
            name,
            order,
            log: log.clone(),
        }));
    }

    pipeline.run(&mut Node::document(Default::default(), vec![]), &NullLogger);

    assert_eq!(*log.lock().unwrap(), vec!["first", "a", "b", "c"]);
}

#[test]
fn default_component_pipeline_rejects_mixed_content() {
    let pipeline = PassPipeline::default_component_pipeline();
    assert_eq!(pipeline.len(), 1);

    let mut document = Node::from_json(DOCUMENT).unwrap();
    pipeline.run(&mut document, &NullLogger);

    let diagnostics = collect_diagnostics(&document);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(
        diagnostics[0].to_string(),
        "error CMP9986: Component attributes do not support complex content (mixed code and markup). Attribute: 'title' (Pages/Index.razor@0:10)"
    );
    assert!(document.children[0].children.is_empty());
}

#[test]
fn pipeline_and_pass_report_through_the_logger() {
    let logger = RecordingLogger::default();
    let mut document = Node::from_json(DOCUMENT).unwrap();

    PassPipeline::default_component_pipeline().run(&mut document, &logger);

    let messages = logger.messages.borrow();
    assert!(messages
        .iter()
        .any(|(level, msg)| *level == LogLevel::Debug && msg.starts_with("running pass ComponentComplexAttributeContent")));
    assert!(messages
        .iter()
        .any(|(level, msg)| *level == LogLevel::Info && msg.contains("'title'") && msg.contains("<Greeting>")));
}
