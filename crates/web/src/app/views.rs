//! HTML views.
//!
//! The renderer takes an item (or the raw form) plus the ordered findings and
//! emits field-adjacent error text and a form-level error banner. Raw
//! submitted values round-trip into the re-rendered form untouched.

use maud::{DOCTYPE, Markup, html};

use itemservice_items::{Finding, Item, messages};

use crate::app::dto::ItemForm;

fn layout(title: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { (title) " - Item Service" }
            }
            body {
                main {
                    h1 { (title) }
                    (body)
                }
            }
        }
    }
}

fn field_messages<'a>(findings: &'a [Finding], field: &str) -> impl Iterator<Item = String> + 'a {
    let field = field.to_string();
    findings
        .iter()
        .filter(move |f| f.field_name() == Some(field.as_str()))
        .map(messages::resolve)
}

fn form_messages(findings: &[Finding]) -> impl Iterator<Item = String> + '_ {
    findings
        .iter()
        .filter(|f| f.is_form_level())
        .map(messages::resolve)
}

fn labeled_input(
    label: &str,
    name: &str,
    value: &str,
    findings: &[Finding],
) -> Markup {
    let errors: Vec<String> = field_messages(findings, name).collect();
    html! {
        div class="field" {
            label for=(name) { (label) }
            input type="text" id=(name) name=(name) value=(value)
                class=(if errors.is_empty() { "" } else { "field-error-input" });
            @for message in &errors {
                p class="field-error" { (message) }
            }
        }
    }
}

pub fn items_page(items: &[Item]) -> Markup {
    layout(
        "Items",
        html! {
            table {
                thead {
                    tr { th { "Id" } th { "Name" } th { "Price" } th { "Quantity" } }
                }
                tbody {
                    @for item in items {
                        tr {
                            td { a href={ "/items/" (item.id) } { (item.id) } }
                            td { (item.name) }
                            td { @if let Some(p) = item.price { (p) } }
                            td { @if let Some(q) = item.quantity { (q) } }
                        }
                    }
                }
            }
            p { a href="/items/add" { "Add item" } }
        },
    )
}

pub fn item_page(item: &Item, saved: bool) -> Markup {
    layout(
        "Item detail",
        html! {
            @if saved {
                p class="status" { "Item saved." }
            }
            dl {
                dt { "Id" } dd { (item.id) }
                dt { "Name" } dd { (item.name) }
                dt { "Price" } dd { @if let Some(p) = item.price { (p) } }
                dt { "Quantity" } dd { @if let Some(q) = item.quantity { (q) } }
            }
            p {
                a href={ "/items/" (item.id) "/edit" } { "Edit" }
                " | "
                a href="/items" { "Back to list" }
            }
        },
    )
}

pub fn item_form_page(
    title: &str,
    action: &str,
    form: &ItemForm,
    findings: &[Finding],
) -> Markup {
    layout(
        title,
        html! {
            @for message in form_messages(findings) {
                p class="form-error" { (message) }
            }
            form method="post" action=(action) {
                (labeled_input("Name", "name", &form.name, findings))
                (labeled_input("Price", "price", &form.price, findings))
                (labeled_input("Quantity", "quantity", &form.quantity, findings))
                button type="submit" { "Save" }
            }
            p { a href="/items" { "Cancel" } }
        },
    )
}

pub fn not_found_page() -> Markup {
    layout(
        "Not found",
        html! {
            p { "The item you asked for does not exist." }
            p { a href="/items" { "Back to list" } }
        },
    )
}
