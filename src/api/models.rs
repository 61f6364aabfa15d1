use serde_json::Value;

/// Query string accepted by both the proxy endpoint and the form page.
#[derive(Debug, Default)]
pub struct PredictQuery {
    pub url: Option<String>,
}

impl PredictQuery {
    /// Picks the first `url` pair. Repeated parameters never reject the request.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let url = pairs
            .into_iter()
            .find(|(key, _)| key == "url")
            .map(|(_, value)| value);
        PredictQuery { url }
    }

    /// The target URL, treating an empty value the same as an absent one.
    pub fn target(&self) -> Option<&str> {
        self.url.as_deref().filter(|url| !url.is_empty())
    }
}

/// The fields the form reads out of a predictor response.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Prediction {
    pub prediction: String,
    pub entropy: Option<f64>,
}

impl Prediction {
    /// Reads a prediction out of an upstream body, tolerating missing or odd fields.
    ///
    /// Falsy labels (`null`, `false`, `0`, `""`) read as empty, so no result is shown.
    pub fn from_body(body: &Value) -> Self {
        let prediction = match body.get("prediction") {
            Some(Value::String(label)) => label.clone(),
            Some(Value::Null) | Some(Value::Bool(false)) | None => String::new(),
            Some(Value::Number(n)) if n.as_f64() == Some(0.0) => String::new(),
            Some(other) => other.to_string(),
        };
        let entropy = body.get("entropy").and_then(Value::as_f64);

        Prediction { prediction, entropy }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn empty_url_is_treated_as_missing() {
        let query = PredictQuery::from_pairs(pairs(&[("url", "")]));
        assert_eq!(query.target(), None);
        assert_eq!(PredictQuery::from_pairs(Vec::new()).target(), None);

        let query = PredictQuery::from_pairs(pairs(&[("url", "https://example.com")]));
        assert_eq!(query.target(), Some("https://example.com"));
    }

    #[test]
    fn first_url_wins_when_repeated() {
        let query = PredictQuery::from_pairs(pairs(&[
            ("lang", "en"),
            ("url", "https://first.example"),
            ("url", "https://second.example"),
        ]));
        assert_eq!(query.target(), Some("https://first.example"));
    }

    #[test]
    fn prediction_reads_label_and_entropy() {
        let body = json!({ "prediction": "phishing", "entropy": 3.52, "extra": true });
        let prediction = Prediction::from_body(&body);
        assert_eq!(prediction.prediction, "phishing");
        assert_eq!(prediction.entropy, Some(3.52));
    }

    #[test]
    fn prediction_tolerates_missing_fields() {
        let prediction = Prediction::from_body(&json!({ "entropy": "high" }));
        assert_eq!(prediction, Prediction::default());

        let prediction = Prediction::from_body(&json!({ "prediction": 1 }));
        assert_eq!(prediction.prediction, "1");
    }

    #[test]
    fn falsy_labels_read_as_empty() {
        for label in [json!(0), json!(0.0), json!(false), json!(null), json!("")] {
            let prediction = Prediction::from_body(&json!({ "prediction": label }));
            assert_eq!(prediction.prediction, "", "label {label}");
        }
    }
}
