//! Form rendering.

use ironhtml::html;
use ironhtml_elements::Div;

use crate::controller::FieldBinding;
use crate::schema::InputKind;
use crate::workflow::FormView;

/// Escapes HTML special characters.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

fn render_input(binding: &FieldBinding) -> String {
    let name = &binding.name;
    let invalid = if binding.error.is_some() {
        " is-invalid"
    } else {
        ""
    };
    let placeholder = binding
        .placeholder
        .as_ref()
        .map(|p| format!(r#" placeholder="{}""#, html_escape(p)))
        .unwrap_or_default();
    let text = html_escape(binding.value.as_text().unwrap_or(""));

    match binding.input {
        InputKind::Checkbox => {
            let checked = if binding.value.as_flag() == Some(true) {
                " checked"
            } else {
                ""
            };
            format!(
                r#"<input type="checkbox" class="form-check-input{invalid}" id="{name}" name="{name}"{checked}>"#
            )
        }
        InputKind::Textarea => format!(
            r#"<textarea class="form-control{invalid}" id="{name}" name="{name}" rows="10"{placeholder}>{text}</textarea>"#
        ),
        // Passwords are never echoed back into the page.
        InputKind::Password => format!(
            r#"<input type="password" class="form-control{invalid}" id="{name}" name="{name}"{placeholder}>"#
        ),
        input => format!(
            r#"<input type="{}" class="form-control{invalid}" id="{name}" name="{name}" value="{text}"{placeholder}>"#,
            input.html_type()
        ),
    }
}

/// Renders one field: label, input, inline error and hint.
pub fn render_field(binding: &FieldBinding) -> String {
    let id = binding.name.clone();
    let label_text = if binding.required {
        format!("{} *", binding.label)
    } else {
        binding.label.clone()
    };

    let label_el = html! {
        label.for_(#id).class("form-label") { #label_text }
    };

    let error = binding.error.clone();
    let hint = binding.hint.clone();

    html! { div.class("mb-3") }
        .raw(label_el.render())
        .raw(render_input(binding))
        .when(error.is_some(), |d| {
            d.child::<Div, _>(|e| {
                e.class("invalid-feedback")
                    .text(error.as_deref().unwrap_or(""))
            })
        })
        .when(hint.is_some(), |d| {
            d.child::<Div, _>(|h| h.class("form-text").text(hint.as_deref().unwrap_or("")))
        })
        .render()
}

/// Renders a whole form.
///
/// While busy the submit button is disabled and shows the busy label.
pub fn render_form(view: &FormView, action: &str) -> String {
    let mut form = html! {
        form.action(#action).method("post")
    };

    if let Some(message) = &view.submission_error {
        form = form.child::<Div, _>(|d| {
            d.class("alert alert-danger")
                .attr("role", "alert")
                .text(message)
        });
    }

    for binding in &view.fields {
        let field_html = render_field(binding);
        form = form.child::<Div, _>(|d| d.raw(&field_html));
    }

    let label = if view.busy {
        view.kind.busy_label()
    } else {
        view.kind.submit_label()
    };
    let button = html! {
        button.type_("submit").class("btn btn-primary w-100") { #label }
    }
    .when(view.busy, |b| b.attr("disabled", "disabled"));

    form = form.child::<Div, _>(|d| d.raw(button.render()));

    form.render()
}
