use crate::config::Config;
use crate::error::Error;
use crate::google_chat;
use crate::phrases::{self, Picker};
use anyhow::{Context, Result};
use tracing::info;

pub fn format_message(user_id: &str, phrase: &str) -> String {
    format!("Yo <users/{}>,\n{}", user_id, phrase)
}

pub fn notify(config: &Config, picker: &mut impl Picker) -> Result<()> {
    let phrases = phrases::read_phrases(&config.phrases_file).context("Unable to load phrases")?;

    if phrases.is_empty() {
        return Err(Error::NoPhrases.into());
    }

    info!(
        "Picking from {} phrases in {}",
        phrases.len(),
        config.phrases_file.display()
    );

    let phrase = phrases::select_phrase(&phrases, picker);

    google_chat::send_message(&config.webhook_url, &format_message(&config.user_id, phrase))
        .context("Unable to send message")
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;

    struct FixedPicker(usize);

    impl Picker for FixedPicker {
        fn pick(&mut self, _len: usize) -> usize {
            self.0
        }
    }

    fn config_with(webhook_url: String, phrases: &NamedTempFile) -> Config {
        Config {
            webhook_url,
            user_id: "12345".to_string(),
            phrases_file: phrases.path().to_path_buf(),
        }
    }

    fn phrases_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(contents.as_bytes())
            .expect("Failed to write phrases");
        file
    }

    #[test]
    fn formats_greeting_with_mention() {
        assert_eq!(
            format_message("12345", "Hello there"),
            "Yo <users/12345>,\nHello there"
        );
    }

    #[test]
    fn phrase_is_not_escaped() {
        assert_eq!(
            format_message("u", "<b>*bold*</b>"),
            "Yo <users/u>,\n<b>*bold*</b>"
        );
    }

    #[test]
    fn sends_the_picked_phrase() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/")
            .match_body(Matcher::Json(json!({ "text": "Yo <users/12345>,\nsecond" })))
            .with_status(200)
            .create();
        let phrases = phrases_file("1. first\n2. second\n3. third\n");

        notify(&config_with(server.url(), &phrases), &mut FixedPicker(1))
            .expect("Failed to notify");

        mock.assert();
    }

    #[test]
    fn empty_phrase_list_aborts_before_sending() {
        let mut server = mockito::Server::new();
        let mock = server.mock("POST", "/").expect(0).create();
        let phrases = phrases_file("\n   \nno delimiter\n");

        let err = notify(&config_with(server.url(), &phrases), &mut FixedPicker(0)).unwrap_err();

        assert!(matches!(err.downcast_ref::<Error>(), Some(Error::NoPhrases)));
        assert_eq!(err.to_string(), "no phrases found in file");
        mock.assert();
    }

    #[test]
    fn missing_phrase_file_keeps_stage_context() {
        let dir = tempfile::tempdir().expect("Failed to create tempdir");
        let config = Config {
            webhook_url: "http://127.0.0.1:9/".to_string(),
            user_id: "12345".to_string(),
            phrases_file: dir.path().join("phrases.txt"),
        };

        let err = notify(&config, &mut FixedPicker(0)).unwrap_err();

        assert_eq!(err.to_string(), "Unable to load phrases");
        assert!(matches!(err.downcast_ref::<Error>(), Some(Error::Open { .. })));
    }

    #[test]
    fn delivery_failure_carries_status() {
        let mut server = mockito::Server::new();
        let _mock = server.mock("POST", "/").with_status(500).create();
        let phrases = phrases_file("1. only\n");

        let err = notify(&config_with(server.url(), &phrases), &mut FixedPicker(0)).unwrap_err();

        assert_eq!(err.to_string(), "Unable to send message");
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::UnexpectedStatus(500))
        ));
    }
}
