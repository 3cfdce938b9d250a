use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Display language for question text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    En,
    Ms,
}

impl Lang {
    pub fn as_str(&self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Ms => "ms",
        }
    }
}

impl FromStr for Lang {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Lang::En),
            "ms" | "malay" | "bm" => Ok(Lang::Ms),
            other => Err(format!("unsupported language '{other}' (expected en or ms)")),
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Question text, either a plain string or an `{en, ms}` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LocalizedText {
    Plain(String),
    Bilingual {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        en: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        ms: Option<String>,
    },
}

impl Default for LocalizedText {
    fn default() -> Self {
        LocalizedText::Plain(String::new())
    }
}

impl LocalizedText {
    /// Read text from a raw JSON field. Anything that is neither a string nor
    /// an object with string `en`/`ms` members becomes empty text.
    pub fn from_value(value: Option<&Value>) -> Self {
        match value {
            Some(Value::String(s)) => LocalizedText::Plain(s.clone()),
            Some(Value::Object(map)) => {
                let pick = |key: &str| {
                    map.get(key)
                        .and_then(Value::as_str)
                        .filter(|s| !s.trim().is_empty())
                        .map(str::to_string)
                };
                LocalizedText::Bilingual {
                    en: pick("en"),
                    ms: pick("ms"),
                }
            }
            _ => LocalizedText::default(),
        }
    }

    /// Text in the requested language, falling back to English and then to
    /// whichever language is populated.
    pub fn resolve(&self, lang: Lang) -> &str {
        match self {
            LocalizedText::Plain(s) => s,
            LocalizedText::Bilingual { en, ms } => {
                let requested = match lang {
                    Lang::En => en.as_deref(),
                    Lang::Ms => ms.as_deref(),
                };
                requested
                    .or(en.as_deref())
                    .or(ms.as_deref())
                    .unwrap_or("")
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.resolve(Lang::En).is_empty()
    }
}
