// src/model/jokes.rs
use super::Joke;
use serde::{Deserialize, Deserializer, Serialize};

/// Reads `null` the same as an absent field: the type's empty default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// A fact from api.chucknorris.io.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChuckNorrisJoke {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub value: String,
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
}

impl Joke for ChuckNorrisJoke {
    fn id(&self) -> &str {
        &self.id
    }

    fn text(&self) -> &str {
        &self.value
    }
}

/// A joke from icanhazdadjoke.com. `status` echoes the HTTP status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DadJoke {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub joke: String,
    #[serde(deserialize_with = "null_as_default")]
    pub status: u16,
}

impl Joke for DadJoke {
    fn id(&self) -> &str {
        &self.id
    }

    fn text(&self) -> &str {
        &self.joke
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chuck_norris_ignores_unknown_fields() {
        let joke: ChuckNorrisJoke = serde_json::from_str(
            r#"{"categories":[],"created_at":"2020-01-05","icon_url":"x","id":"abc","value":"He counted to infinity. Twice.","url":"https://api.chucknorris.io/jokes/abc"}"#,
        )
        .unwrap();
        assert_eq!(joke.id(), "abc");
        assert_eq!(joke.text(), "He counted to infinity. Twice.");
    }

    #[test]
    fn test_missing_fields_default() {
        let joke: DadJoke = serde_json::from_str(r#"{"joke":"Only the joke"}"#).unwrap();
        assert_eq!(
            joke,
            DadJoke {
                id: String::new(),
                joke: "Only the joke".to_string(),
                status: 0,
            }
        );

        let empty: ChuckNorrisJoke = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, ChuckNorrisJoke::default());
    }

    #[test]
    fn test_null_fields_default() {
        let joke: DadJoke =
            serde_json::from_str(r#"{"id":"1","joke":"Y","status":null}"#).unwrap();
        assert_eq!(joke.status, 0);
        assert_eq!(joke.text(), "Y");
    }

    #[test]
    fn test_wrong_field_type_still_fails() {
        let result = serde_json::from_str::<DadJoke>(r#"{"joke":["not","text"]}"#);
        assert!(result.is_err());
    }
}
