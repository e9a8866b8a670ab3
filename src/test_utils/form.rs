use scraper::{ElementRef, Html, Selector};

/// Get the form that submits to `action`.
#[track_caller]
pub(crate) fn must_get_form_with_action<'a>(html: &'a Html, action: &str) -> ElementRef<'a> {
    html.select(&Selector::parse("form").unwrap())
        .find(|form| form.value().attr("action") == Some(action))
        .unwrap_or_else(|| panic!("No form found with action=\"{action}\""))
}

#[track_caller]
pub(crate) fn assert_form_method(form: &ElementRef<'_>, method: &str) {
    let got_method = form
        .value()
        .attr("method")
        .expect("method attribute missing");

    assert!(
        got_method.eq_ignore_ascii_case(method),
        "want form with method=\"{method}\", got {got_method:?}"
    );
}

#[track_caller]
fn must_get_input<'a>(form: &ElementRef<'a>, name: &str) -> ElementRef<'a> {
    form.select(&Selector::parse("input").unwrap())
        .find(|input| input.value().attr("name") == Some(name))
        .unwrap_or_else(|| panic!("No input found with name \"{name}\""))
}

#[track_caller]
pub(crate) fn assert_form_input(form: &ElementRef<'_>, name: &str, type_: &str) {
    let input = must_get_input(form, name);
    let input_type = input.value().attr("type").unwrap_or_default();

    assert_eq!(
        input_type, type_,
        "want input {name} with type \"{type_}\", got {input_type:?}"
    );
}

#[track_caller]
pub(crate) fn assert_form_input_with_value(
    form: &ElementRef<'_>,
    name: &str,
    type_: &str,
    value: &str,
) {
    assert_form_input(form, name, type_);

    let input = must_get_input(form, name);
    let input_value = input.value().attr("value").unwrap_or_default();
    assert_eq!(
        input_value, value,
        "want input {name} with value \"{value}\", got {input_value:?}"
    );
}

#[track_caller]
pub(crate) fn assert_form_submit_button(form: &ElementRef<'_>) {
    let submit_button = form
        .select(&Selector::parse("button").unwrap())
        .next()
        .expect("No button found");

    assert_eq!(
        submit_button.value().attr("type").unwrap_or_default(),
        "submit",
        "want submit button with type=\"submit\""
    );
}
