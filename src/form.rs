//! The URL Predictor page: form state and its HTML rendering.
//!
//! The page is rendered on the server. Submitting the form issues `GET /?url=...`,
//! which runs the prediction in-process and renders the outcome. A small script
//! handles the in-flight state in the browser: it disables the button, shows the
//! spinner, and removes the previous result and error before the browser navigates.

use crate::api::models::Prediction;
use crate::error::Result;

/// Message shown for any failed submission.
pub const FAILURE_MESSAGE: &str = "An error occurred while fetching the prediction.";

/// Display-only risk score in `[0, 1)`. Not derived from the prediction.
pub fn draw_score() -> f64 {
    rand::random::<f64>()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskBand {
    Safe,
    Suspicious,
    Malicious,
    Dangerous,
}

impl RiskBand {
    pub fn from_score(score: f64) -> Self {
        if score < 0.2 {
            RiskBand::Safe
        } else if score < 0.5 {
            RiskBand::Suspicious
        } else if score < 0.8 {
            RiskBand::Malicious
        } else {
            RiskBand::Dangerous
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            RiskBand::Safe => "Your URL is likely safe.",
            RiskBand::Suspicious => "Your URL might be suspicious. Proceed with caution.",
            RiskBand::Malicious => "Your URL is likely malicious. Be very careful!",
            RiskBand::Dangerous => "Your URL is highly dangerous. Do not proceed!",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            RiskBand::Safe => "bg-green-100",
            RiskBand::Suspicious => "bg-yellow-100",
            RiskBand::Malicious => "bg-orange-100",
            RiskBand::Dangerous => "bg-red-100",
        }
    }

    /// Safe and suspicious results get the check icon, the rest the alert icon.
    pub fn is_reassuring(self) -> bool {
        matches!(self, RiskBand::Safe | RiskBand::Suspicious)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub prediction: Prediction,
    pub score: f64,
}

impl Outcome {
    pub fn band(&self) -> RiskBand {
        RiskBand::from_score(self.score)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum FormState {
    #[default]
    Idle,
    Loading,
    Success(Outcome),
    Failed(String),
}

impl FormState {
    /// Starts a submission. Any previous result or error is dropped.
    pub fn submit(&mut self) {
        *self = FormState::Loading;
    }

    /// Settles an in-flight submission. Ignored unless a submission is in flight.
    pub fn resolve(&mut self, result: Result<Prediction>, score: f64) {
        if !self.is_loading() {
            tracing::debug!("ignoring result for a form that is not loading");
            return;
        }

        *self = match result {
            Ok(prediction) => FormState::Success(Outcome { prediction, score }),
            Err(_) => FormState::Failed(FAILURE_MESSAGE.to_string()),
        };
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, FormState::Loading)
    }
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

pub fn format_entropy(entropy: Option<f64>) -> String {
    match entropy {
        Some(value) => format!("{:.4}", value),
        None => "N/A".to_string(),
    }
}

pub fn format_score(score: f64) -> String {
    format!("{:.2}%", score * 100.0)
}

const STYLE: &str = r#"
body { margin: 0; min-height: 100vh; display: flex; flex-direction: column;
  font-family: system-ui, sans-serif; background: linear-gradient(135deg, #a855f7, #ec4899); }
nav { background: #fff; box-shadow: 0 1px 4px rgba(0,0,0,.15); padding: 0 1.5rem;
  height: 4rem; display: flex; align-items: center; justify-content: space-between; }
.brand { font-size: 1.5rem; font-weight: 700; color: #9333ea; }
.menu a { margin-left: 1rem; color: #6b21a8; text-decoration: none; }
main { flex-grow: 1; display: flex; align-items: center; justify-content: center; padding: 2rem; }
.card { background: #fff; border-radius: .75rem; width: 100%; max-width: 28rem; padding: 1.5rem;
  box-shadow: 0 25px 50px -12px rgba(0,0,0,.25); }
.card h1 { text-align: center; color: #7e22ce; margin: 0 0 .5rem; }
.card p.lead { text-align: center; color: #4b5563; }
input[type=url] { width: 100%; box-sizing: border-box; padding: .5rem 1rem; border-radius: 9999px;
  border: 2px solid #d8b4fe; }
button { width: 100%; margin-top: 1.5rem; padding: .75rem; border: 0; border-radius: 9999px;
  color: #fff; font-weight: 700; background: linear-gradient(90deg, #a855f7, #ec4899); cursor: pointer; }
button[disabled] { opacity: .6; cursor: wait; }
.spinner { display: inline-block; animation: spin 1s linear infinite; }
@keyframes spin { to { transform: rotate(360deg); } }
.banner { margin-top: 1.5rem; padding: 1rem; border-radius: .5rem; }
.error { background: #fee2e2; color: #b91c1c; }
.details { background: rgba(255,255,255,.5); padding: 1rem; border-radius: .375rem; }
.details div { margin: .25rem 0; }
.label { font-weight: 600; }
.headline { font-weight: 700; font-size: 1.25rem; }
.bg-green-100 { background: #dcfce7; }
.bg-yellow-100 { background: #fef9c3; }
.bg-orange-100 { background: #ffedd5; }
.bg-red-100 { background: #fee2e2; }
"#;

/// Spinner shown in place of the button label while a submission is in flight.
const LOADING_INDICATOR: &str = "<span class=\"spinner\" aria-label=\"Loading\">&#128737;</span>";

/// Browser-side half of `FormState::submit`: disable the button, show the spinner,
/// drop the previous result and error. The page itself is replaced on navigation.
pub fn render_script() -> String {
    let mut script = String::with_capacity(512);
    script.push_str("document.getElementById(\"predict-form\").addEventListener(\"submit\", function () {\n");
    script.push_str("  var button = document.getElementById(\"predict-button\");\n");
    script.push_str("  button.disabled = true;\n");
    script.push_str(&format!("  button.innerHTML = '{}';\n", LOADING_INDICATOR));
    script.push_str("  [\"result\", \"error\"].forEach(function (id) {\n");
    script.push_str("    var el = document.getElementById(id);\n");
    script.push_str("    if (el) { el.remove(); }\n");
    script.push_str("  });\n");
    script.push_str("});\n");
    script
}

/// Renders the whole page for the given input text and form state.
pub fn render_page(input: &str, state: &FormState) -> String {
    let mut html = String::with_capacity(4096);
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str("<title>URL Guardian</title>\n<style>");
    html.push_str(STYLE);
    html.push_str("</style>\n</head>\n<body>\n");

    html.push_str(concat!(
        "<nav><span class=\"brand\">&#128737; URL Guardian</span>",
        "<span class=\"menu\"><a href=\"#about\">About</a><a href=\"#api\">API</a></span></nav>\n",
    ));

    html.push_str("<main>\n<div class=\"card\">\n");
    html.push_str("<h1>URL Predictor</h1>\n");
    html.push_str("<p class=\"lead\" id=\"about\">Enter a URL to check if it is malicious or safe.</p>\n");
    render_form(&mut html, input, state.is_loading());

    match state {
        FormState::Failed(message) => render_error(&mut html, message),
        FormState::Success(outcome) if !outcome.prediction.prediction.is_empty() => {
            render_result(&mut html, outcome)
        }
        _ => {}
    }

    html.push_str(concat!(
        "<p class=\"api\" id=\"api\">API: <code>GET /api/predict?url=&lt;url&gt;</code> ",
        "relays the predictor's JSON.</p>\n",
    ));
    html.push_str("</div>\n</main>\n<script>\n");
    html.push_str(&render_script());
    html.push_str("</script>\n</body>\n</html>\n");
    html
}

fn render_form(html: &mut String, input: &str, loading: bool) {
    html.push_str("<form id=\"predict-form\" method=\"get\" action=\"/\">\n");
    html.push_str(&format!(
        "<input type=\"url\" name=\"url\" placeholder=\"Enter URL\" value=\"{}\" required>\n",
        escape_html(input)
    ));
    if loading {
        html.push_str(&format!(
            "<button type=\"submit\" id=\"predict-button\" disabled>{}</button>\n",
            LOADING_INDICATOR
        ));
    } else {
        html.push_str("<button type=\"submit\" id=\"predict-button\">Predict</button>\n");
    }
    html.push_str("</form>\n");
}

fn render_error(html: &mut String, message: &str) {
    html.push_str(&format!(
        "<div id=\"error\" class=\"banner error\" role=\"alert\">&#9888; <span>{}</span></div>\n",
        escape_html(message)
    ));
}

fn render_result(html: &mut String, outcome: &Outcome) {
    let band = outcome.band();
    let icon = if band.is_reassuring() { "&#9989;" } else { "&#9888;" };

    html.push_str(&format!("<div id=\"result\" class=\"banner {}\">\n", band.css_class()));
    html.push_str(&format!(
        "<p><span class=\"icon\">{}</span> <span class=\"headline\">{}</span></p>\n",
        icon,
        band.message()
    ));
    html.push_str("<div class=\"details\">\n");
    html.push_str(&format!(
        "<div id=\"prediction\"><span class=\"label\">Prediction:</span> {}</div>\n",
        escape_html(&outcome.prediction.prediction)
    ));
    html.push_str(&format!(
        "<div id=\"entropy\"><span class=\"label\">Entropy:</span> {}</div>\n",
        format_entropy(outcome.prediction.entropy)
    ));
    html.push_str(&format!(
        "<div id=\"score\"><span class=\"label\">Risk Score:</span> {}</div>\n",
        format_score(outcome.score)
    ));
    html.push_str("</div>\n</div>\n");
}
