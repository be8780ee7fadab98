pub mod submit;
pub mod submit_form;
