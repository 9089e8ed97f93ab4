use super::diagnostic::{Diagnostic, DiagnosticSeverity};
use super::error_code::DiagnosticCode;
use crate::parse_util::SourceSpan;

/// Builds the diagnostics reported by component passes.
pub struct ComponentDiagnosticFactory;

impl ComponentDiagnosticFactory {
    pub fn create_unsupported_complex_content(
        span: Option<&SourceSpan>,
        attribute_name: &str,
    ) -> Diagnostic {
        Diagnostic::new(
            DiagnosticCode::UnsupportedComplexContent,
            DiagnosticSeverity::Error,
            format!(
                "Component attributes do not support complex content (mixed code and markup). Attribute: '{}'",
                attribute_name
            ),
            span.cloned(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_name_the_attribute_and_keep_the_span() {
        let span = SourceSpan::new("Counter.razor", 10, 1, 4, 12);
        let diagnostic = ComponentDiagnosticFactory::create_unsupported_complex_content(Some(&span), "title");

        assert_eq!(diagnostic.code, DiagnosticCode::UnsupportedComplexContent);
        assert!(diagnostic.is_error());
        assert!(diagnostic.message.ends_with("Attribute: 'title'"));
        assert_eq!(diagnostic.span, Some(span));
    }

    #[test]
    fn should_render_code_and_location() {
        let span = SourceSpan::new("Counter.razor", 10, 1, 4, 12);
        let diagnostic = ComponentDiagnosticFactory::create_unsupported_complex_content(Some(&span), "title");
        let rendered = diagnostic.to_string();

        assert!(rendered.starts_with("error CMP9986: Component attributes"));
        assert!(rendered.ends_with("(Counter.razor@1:4)"));
    }
}
