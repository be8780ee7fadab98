//! Built-in HTML pages.
//!
//! The browser keeps the logged-in user in `localStorage`; there is no
//! server-side session, so pages read it from there and send the username
//! along with each request.

use crate::PredictionOutcome;

use kg_core::{ModelKind, SeverityLabel};

use axum::response::Html;

const STYLE: &str = "body{font-family:sans-serif;max-width:48rem;margin:2rem auto;padding:0 1rem}\
nav a{margin-right:1rem}\
label{display:block;margin-top:.75rem}\
table{border-collapse:collapse;width:100%}\
td,th{border:1px solid #ccc;padding:.25rem .5rem;text-align:left}\
.error{color:#b00}";

const NAV: &str = r#"<nav><a href="/first">Home</a><a href="/index">Predict</a><a href="/profile">Profile</a><a href="/chart">Grades</a><a href="/performance">Models</a><a href="/login">Login</a><a href="/register">Register</a></nav>"#;

/// Escape text for element content and quoted attribute values
pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

fn layout(title: &str, body: &str) -> Html<String> {
    Html(format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title} - Knee Grade</title>\n<style>{STYLE}</style>\n</head>\n\
         <body>\n{NAV}\n<h1>{title}</h1>\n{body}\n</body>\n</html>\n",
        title = escape_html(title),
    ))
}

/// GET /
pub async fn home() -> Html<String> {
    first().await
}

/// GET /first
pub async fn first() -> Html<String> {
    layout(
        "Knee Osteoarthritis Grading",
        "<p>Upload a knee X-ray and get a severity grade from one of two \
         pre-trained models. Register or log in to keep a history of your \
         predictions.</p>\
         <p><a href=\"/login\">Log in</a> or <a href=\"/register\">create an account</a>.</p>",
    )
}

/// GET /login
pub async fn login() -> Html<String> {
    layout(
        "Login",
        r#"<form id="login-form">
<label>Username <input name="uname" required></label>
<label>Password <input name="pwd" type="password" required></label>
<button type="submit">Login</button>
</form>
<p id="message" class="error"></p>
<script>
document.getElementById('login-form').addEventListener('submit', async (e) => {
  e.preventDefault();
  const form = new FormData(e.target);
  const res = await fetch('/login', {
    method: 'POST',
    headers: {'Content-Type': 'application/json'},
    body: JSON.stringify({uname: form.get('uname'), pwd: form.get('pwd')}),
  });
  const data = await res.json();
  if (data.status === 'success') {
    localStorage.setItem('user', JSON.stringify(data.user));
    window.location = '/index';
  } else {
    document.getElementById('message').textContent = data.message;
  }
});
</script>"#,
    )
}

/// GET /register
pub async fn register() -> Html<String> {
    layout(
        "Register",
        r#"<form id="register-form">
<label>Username <input name="uname" required></label>
<label>Email <input name="email" type="email" required></label>
<label>Age <input name="age" type="number" min="0" required></label>
<label>Gender <select name="gender"><option>Female</option><option>Male</option><option>Other</option></select></label>
<label>Password <input name="pwd" type="password" required></label>
<button type="submit">Register</button>
</form>
<p id="message" class="error"></p>
<script>
document.getElementById('register-form').addEventListener('submit', async (e) => {
  e.preventDefault();
  const body = Object.fromEntries(new FormData(e.target));
  const res = await fetch('/register', {
    method: 'POST',
    headers: {'Content-Type': 'application/json'},
    body: JSON.stringify(body),
  });
  const data = await res.json();
  if (data.status === 'success') {
    window.location = '/login';
  } else {
    document.getElementById('message').textContent = data.message;
  }
});
</script>"#,
    )
}

/// GET /profile
pub async fn profile() -> Html<String> {
    layout(
        "Profile",
        r#"<dl id="profile"></dl>
<h2>Prediction history</h2>
<table><thead><tr><th>Image</th><th>Prediction</th><th>Model</th><th>When</th></tr></thead>
<tbody id="history"></tbody></table>
<script>
const user = JSON.parse(localStorage.getItem('user') || 'null');
if (!user) {
  window.location = '/login';
} else {
  const dl = document.getElementById('profile');
  for (const [k, v] of Object.entries(user)) {
    const dt = document.createElement('dt'); dt.textContent = k;
    const dd = document.createElement('dd'); dd.textContent = v;
    dl.append(dt, dd);
  }
  fetch('/get_prediction_history/' + encodeURIComponent(user.uname))
    .then((res) => res.json())
    .then((rows) => {
      const tbody = document.getElementById('history');
      for (const row of rows) {
        const tr = document.createElement('tr');
        for (const v of [row.image_name, row.prediction, row.model_used, row.predicted_at]) {
          const td = document.createElement('td'); td.textContent = v; tr.append(td);
        }
        tbody.append(tr);
      }
    });
}
</script>"#,
    )
}

/// GET /chart
pub async fn chart() -> Html<String> {
    let rows: String = SeverityLabel::ALL
        .iter()
        .map(|label| {
            format!(
                "<tr><td>{}</td><td>{}</td></tr>",
                *label as u8,
                escape_html(label.as_str())
            )
        })
        .collect();

    layout(
        "Severity Grades",
        &format!("<table><thead><tr><th>Grade</th><th>Label</th></tr></thead><tbody>{rows}</tbody></table>"),
    )
}

/// GET /performance
pub async fn performance() -> Html<String> {
    layout(
        "Models",
        &format!(
            "<ul><li><strong>{}</strong>: VGG16 transfer-learned on knee X-rays.</li>\
             <li><strong>{}</strong>: MobileNetV2 transfer-learned on knee X-rays, \
             lighter and faster.</li></ul>",
            ModelKind::Vgg16,
            ModelKind::MobileNetV2
        ),
    )
}

/// GET and POST /index
pub async fn index() -> Html<String> {
    layout(
        "Predict",
        &format!(
            r#"<form action="/submit" method="post" enctype="multipart/form-data">
<label>X-ray image <input type="file" name="my_image" accept="image/*" required></label>
<label>Model <select name="model"><option>{vgg}</option><option>{mobilenet}</option></select></label>
<input type="hidden" name="username" id="username">
<button type="submit">Predict</button>
</form>
<script>
const user = JSON.parse(localStorage.getItem('user') || 'null');
if (!user) {{
  window.location = '/login';
}} else {{
  document.getElementById('username').value = user.uname;
}}
</script>"#,
            vgg = ModelKind::Vgg16,
            mobilenet = ModelKind::MobileNetV2,
        ),
    )
}

/// Rendered after a successful POST /submit
pub fn result(outcome: &PredictionOutcome) -> Html<String> {
    layout(
        "Prediction",
        &format!(
            "<p>Prediction: <strong id=\"prediction\">{prediction}</strong></p>\n\
             <p>Model: <span id=\"model\">{model}</span></p>\n\
             <p><img src=\"{url}\" alt=\"{name}\" style=\"max-width:100%\"></p>\n\
             <p><a href=\"/index\">Grade another image</a></p>",
            prediction = escape_html(outcome.label.as_str()),
            model = escape_html(&outcome.model),
            url = escape_html(&outcome.image_url),
            name = escape_html(&outcome.image_name),
        ),
    )
}
