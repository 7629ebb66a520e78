//! Serde helpers for Discord snowflake ids carried as JSON strings.

use serde::{Deserialize, Deserializer, Serializer};

pub fn serialize<S>(value: &u64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&value.to_string())
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;
    String::deserialize(deserializer)?
        .parse::<u64>()
        .map_err(D::Error::custom)
}

/// Same as the parent module for `Option<u64>`.
pub mod option {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<u64>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(id) => serializer.serialize_some(&id.to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error;
        match Option::<String>::deserialize(deserializer)? {
            Some(value) if !value.is_empty() => {
                value.parse::<u64>().map(Some).map_err(D::Error::custom)
            }
            _ => Ok(None),
        }
    }
}

/// Same as the parent module for `Vec<u64>`.
pub mod vec {
    use serde::{ser::SerializeSeq, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(values: &[u64], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(values.len()))?;
        for value in values {
            seq.serialize_element(&value.to_string())?;
        }
        seq.end()
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<u64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error;
        Vec::<String>::deserialize(deserializer)?
            .into_iter()
            .map(|value| value.parse::<u64>().map_err(D::Error::custom))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Ids {
        #[serde(with = "super")]
        id: u64,
        #[serde(with = "super::option", default)]
        maybe: Option<u64>,
        #[serde(with = "super::vec")]
        many: Vec<u64>,
    }

    #[test]
    fn keeps_snowflake_precision_over_json() {
        let ids = Ids {
            id: 1458158245700046901,
            maybe: Some(802105175720460318),
            many: vec![1459285694458626222],
        };

        let json = serde_json::to_string(&ids).unwrap();
        assert_eq!(
            json,
            r#"{"id":"1458158245700046901","maybe":"802105175720460318","many":["1459285694458626222"]}"#
        );
        assert_eq!(serde_json::from_str::<Ids>(&json).unwrap(), ids);
    }

    #[test]
    fn empty_optional_id_is_none() {
        let ids: Ids = serde_json::from_str(r#"{"id":"1","maybe":"","many":[]}"#).unwrap();
        assert_eq!(ids.maybe, None);

        let ids: Ids = serde_json::from_str(r#"{"id":"1","many":[]}"#).unwrap();
        assert_eq!(ids.maybe, None);
    }
}
