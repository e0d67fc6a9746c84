// File: src/views.rs
// Purpose: Page, form and error markup around the table panel

use maud::{html, Markup, PreEscaped, DOCTYPE};
use mtable::form_rules::FormRuleSet;
use mtable::render;
use mtable::Field;
use mtable::FormField;

use crate::form_context::FormContext;

const STYLE: &str = r#"
td { border: 1px solid #ccc; padding: 2px 6px; text-align: right; }
td.indexLabel { background: #eee; font-weight: bold; }
td.squareProduct { background: #ffe08a; }
#message, label.error { color: #b00020; }
input.error { border-color: #b00020; }
"#;

/// Full page: form, message box and the table area
pub fn page(
    title: &str,
    rules: &FormRuleSet,
    ctx: &FormContext,
    message: Option<&str>,
    panel: Option<Markup>,
) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                title { (title) }
                style { (PreEscaped(STYLE)) }
            }
            body {
                h1 { (title) }
                (range_form(rules, ctx))
                (render::message_box(message))
                div id="tableArea" {
                    @if let Some(panel) = panel {
                        (panel)
                    }
                }
            }
        }
    }
}

/// The four range inputs with their HTML5 rules, values and errors
pub fn range_form(rules: &FormRuleSet, ctx: &FormContext) -> Markup {
    html! {
        form id="mainForm" method="post" action="/table" {
            @for field in Field::ALL {
                @let name = field.name();
                @let attrs = rules.field_attrs(name);
                div class="field" {
                    label for=(name) { (field.label()) }
                    input id=(name) name=(name)
                        class=[ctx.has_error(name).then_some("error")]
                        type=[attrs.attr("type")]
                        min=[attrs.attr("min")]
                        max=[attrs.attr("max")]
                        step=[attrs.attr("step")]
                        required[attrs.has_attr("required")]
                        value=[ctx.get_value(name)]
                        data-validate=(attrs.data_validate);
                    @if let Some(error) = ctx.get_error(name) {
                        label class="error" for=(name) { (error) }
                    }
                }
            }
            button type="submit" { "Generate" }
        }
    }
}

/// Field errors as a standalone fragment, for HTMX callers
pub fn error_list(ctx: &FormContext) -> Markup {
    html! {
        ul class="errors" {
            @for field in Field::ALL {
                @if let Some(error) = ctx.get_error(field.name()) {
                    li { (field.label()) ": " (error) }
                }
            }
        }
    }
}

/// Minimal page for non-form errors such as unknown routes
pub fn error_page(status: u16, title: &str, message: &str) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head { title { (title) } }
            body {
                h1 { (status) " " (title) }
                p { (message) }
                a href="/" { "Go Home" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mtable::{FormData, RangeInput};

    #[test]
    fn test_form_carries_html5_rules() {
        let html = range_form(&FormRuleSet::standard(), &FormContext::empty()).into_string();

        assert!(html.contains(r#"id="rStart" name="rStart""#));
        assert!(html.contains(r#"type="number" min="-100" max="100" step="1" required"#));
        assert!(html.contains("data-validate="));
        assert!(!html.contains("label class=\"error\""));
    }

    #[test]
    fn test_form_shows_errors_and_values() {
        let form = FormData::from_urlencoded("rStart=5&rEnd=2&cStart=1&cEnd=1");
        let errors = FormRuleSet::standard().check_form(&form).unwrap_err();
        let ctx = FormContext::from_field_errors(&errors, &form);

        let html = range_form(&FormRuleSet::standard(), &ctx).into_string();

        assert!(html.contains(
            r#"<label class="error" for="rEnd">The end value cannot be less than the start value.</label>"#
        ));
        assert!(html.contains(r#"value="5""#));
        assert!(html.contains(r#"class="error""#));
    }

    #[test]
    fn test_page_layout() {
        let ctx = FormContext::from_input(&RangeInput::new(1, 2, 1, 2));
        let table = mtable::build_table(&RangeInput::new(1, 2, 1, 2)).unwrap();
        let html = page(
            "Times",
            &FormRuleSet::standard(),
            &ctx,
            None,
            Some(render::table_panel(&table)),
        )
        .into_string();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Times</title>"));
        assert!(html.contains(r#"<div id="message"></div>"#));
        assert!(html.contains(r#"<div id="tableArea"><section class="tab">"#));
        assert!(html.contains("[1, 2] * [1, 2]"));
    }

    #[test]
    fn test_error_list() {
        let form = FormData::from_urlencoded("rStart=&rEnd=1&cStart=1&cEnd=1");
        let errors = FormRuleSet::standard().check_form(&form).unwrap_err();
        let html = error_list(&FormContext::from_field_errors(&errors, &form)).into_string();
        assert_eq!(
            html,
            r#"<ul class="errors"><li>Row start: This field is required.</li></ul>"#
        );
    }

    #[test]
    fn test_error_page_escapes_message() {
        let html = error_page(404, "Page Not Found", "Route '<x>' not found").into_string();
        assert!(html.contains("<h1>404 Page Not Found</h1>"));
        assert!(html.contains("Route '&lt;x&gt;' not found"));
    }
}
