mod model_kind;
mod prediction_label;
mod severity_label;
mod user;
