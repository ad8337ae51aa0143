//! Monetary fields arrive either as JSON numbers or as decimal strings
//! (`"1250.00"`). These helpers accept both and always produce `f64`.

use serde::{de, Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Raw {
    Number(f64),
    Text(String),
}

impl Raw {
    fn into_f64<E: de::Error>(self) -> Result<f64, E> {
        match self {
            Raw::Number(n) => Ok(n),
            Raw::Text(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| E::custom(format!("invalid amount '{s}'"))),
        }
    }
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Raw::deserialize(deserializer)?.into_f64()
}

pub mod option {
    use super::Raw;
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<Raw>::deserialize(deserializer)?
            .map(Raw::into_f64)
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Sample {
        #[serde(deserialize_with = "super::deserialize")]
        total: f64,
        #[serde(default, deserialize_with = "super::option::deserialize")]
        limit: Option<f64>,
    }

    #[test]
    fn accepts_numbers_and_strings() {
        let s: Sample = serde_json::from_str(r#"{"total":"1250.50","limit":300}"#).unwrap();
        assert_eq!(s.total, 1250.5);
        assert_eq!(s.limit, Some(300.0));

        let s: Sample = serde_json::from_str(r#"{"total":-12.5,"limit":null}"#).unwrap();
        assert_eq!(s.total, -12.5);
        assert_eq!(s.limit, None);

        let s: Sample = serde_json::from_str(r#"{"total":0}"#).unwrap();
        assert_eq!(s.limit, None);
    }

    #[test]
    fn rejects_non_numeric_text() {
        assert!(serde_json::from_str::<Sample>(r#"{"total":"abc"}"#).is_err());
    }
}
