use maud::{html, Markup};

use crate::model::{MenuNode, MenuTree};

/// Element the page shell swaps page content into.
pub const CONTENT_TARGET: &str = "#content";

/// Render the navigation markup.
///
/// Pages become htmx links that fetch `/page/{id}/content` into
/// [`CONTENT_TARGET`]; headings become plain labels. Text and attribute
/// values are escaped by maud.
pub fn render(tree: &MenuTree) -> String {
    render_markup(tree).into_string()
}

pub fn render_markup(tree: &MenuTree) -> Markup {
    html! {
        nav {
            ul {
                @for node in &tree.nodes {
                    (render_node(node))
                }
            }
        }
    }
}

fn render_node(node: &MenuNode) -> Markup {
    html! {
        li {
            @if let Some(id) = &node.identifier {
                a hx-get=(content_url(id))
                  hx-target=(CONTENT_TARGET)
                  hx-swap="innerHTML"
                  hx-push-url=(page_url(id)) {
                    (node.title)
                }
            } @else {
                span.menu-heading { (node.title) }
            }
            @if !node.children.is_empty() {
                ul {
                    @for child in &node.children {
                        (render_node(child))
                    }
                }
            }
        }
    }
}

pub fn page_url(identifier: &str) -> String {
    format!("/page/{identifier}")
}

pub fn content_url(identifier: &str) -> String {
    format!("/page/{identifier}/content")
}
