// File: src/render.rs
// Purpose: Maud markup for generated tables and the result panel around them

use maud::{html, Markup};

use crate::table::{Cell, TableResult};

/// CSS class for label cells
pub const LABEL_CLASS: &str = "indexLabel";

/// CSS class for diagonal (square) products
pub const SQUARE_CLASS: &str = "squareProduct";

/// Render the grid as a `<table>`
pub fn render_table(table: &TableResult) -> Markup {
    html! {
        table {
            @for row in &table.rows {
                tr {
                    @for cell in row {
                        (render_cell(cell))
                    }
                }
            }
        }
    }
}

fn render_cell(cell: &Cell) -> Markup {
    match *cell {
        Cell::CornerLabel => html! { td class=(LABEL_CLASS) { " " } },
        Cell::ColumnLabel(v) | Cell::RowLabel(v) => html! { td class=(LABEL_CLASS) { (v) } },
        Cell::DiagonalProduct(v) => html! { td class=(SQUARE_CLASS) { (v) } },
        Cell::Product(v) => html! { td { (v) } },
    }
}

/// A labeled panel holding one result, the unit the page shows per request
pub fn result_panel(title: &str, content: Markup) -> Markup {
    html! {
        section class="tab" {
            h2 class="tabTitle" { (title) }
            div class="tabContent" { (content) }
        }
    }
}

/// Table wrapped in its titled panel
pub fn table_panel(table: &TableResult) -> Markup {
    result_panel(&table.title, render_table(table))
}

/// The `#message` box; empty when there is nothing to report
pub fn message_box(message: Option<&str>) -> Markup {
    html! {
        div id="message" {
            @if let Some(message) = message {
                (message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range::RangeInput;
    use crate::table::generate;

    #[test]
    fn test_render_table_markup() {
        let table = generate(&RangeInput::new(1, 2, 2, 2));
        let html = render_table(&table).into_string();

        assert_eq!(
            html,
            concat!(
                "<table>",
                "<tr><td class=\"indexLabel\"> </td><td class=\"indexLabel\">2</td></tr>",
                "<tr><td class=\"indexLabel\">1</td><td>2</td></tr>",
                "<tr><td class=\"indexLabel\">2</td><td class=\"squareProduct\">4</td></tr>",
                "</table>"
            )
        );
    }

    #[test]
    fn test_result_panel_escapes_title() {
        let html = result_panel("<b>", html! { p { "x" } }).into_string();
        assert!(html.contains("<h2 class=\"tabTitle\">&lt;b&gt;</h2>"));
        assert!(html.contains("<div class=\"tabContent\"><p>x</p></div>"));
    }

    #[test]
    fn test_table_panel_uses_title() {
        let table = generate(&RangeInput::new(1, 3, 1, 3));
        let html = table_panel(&table).into_string();
        assert!(html.contains("[1, 3] * [1, 3]"));
        assert!(html.contains("<td class=\"squareProduct\">9</td>"));
    }

    #[test]
    fn test_message_box() {
        assert_eq!(message_box(None).into_string(), "<div id=\"message\"></div>");
        assert_eq!(
            message_box(Some("bad")).into_string(),
            "<div id=\"message\">bad</div>"
        );
    }
}
