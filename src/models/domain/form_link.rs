const FORMS_WEB_BASE: &str = "https://docs.google.com/forms/d";

pub fn edit_url(form_id: &str) -> String {
    format!("{}/{}/edit", FORMS_WEB_BASE, form_id)
}

pub fn responder_url(form_id: &str) -> String {
    format!("{}/{}/viewform", FORMS_WEB_BASE, form_id)
}
