use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Named entry points: alias -> file path, in insertion order.
pub type EntryMap = IndexMap<String, String>;

/// The build host's `input` field.
///
/// The host accepts a missing value, a single path, a list of paths or a
/// named map. A single path string is superseded by the discovered files, so
/// it collapses to [`InputOption::Empty`] on the way in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum InputOption {
    /// No usable input configured.
    #[default]
    Empty,

    /// Entry points with automatic naming.
    List(Vec<String>),

    /// Named entry points.
    ///
    /// Keys are the output chunk names, values are the file paths.
    Map(EntryMap),
}

impl InputOption {
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of entry points
    pub fn len(&self) -> usize {
        match self {
            InputOption::Empty => 0,
            InputOption::List(paths) => paths.len(),
            InputOption::Map(entries) => entries.len(),
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            InputOption::List(paths) => Some(paths),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&EntryMap> {
        match self {
            InputOption::Map(entries) => Some(entries),
            _ => None,
        }
    }

    pub fn into_map(self) -> Option<EntryMap> {
        match self {
            InputOption::Map(entries) => Some(entries),
            _ => None,
        }
    }
}

impl From<Vec<String>> for InputOption {
    fn from(paths: Vec<String>) -> Self {
        InputOption::List(paths)
    }
}

impl From<EntryMap> for InputOption {
    fn from(entries: EntryMap) -> Self {
        InputOption::Map(entries)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawInput {
    Single(String),
    List(Vec<String>),
    Map(EntryMap),
}

impl From<Option<RawInput>> for InputOption {
    fn from(raw: Option<RawInput>) -> Self {
        match raw {
            None => InputOption::Empty,
            Some(RawInput::Single(path)) => {
                tracing::debug!(%path, "single input path replaced by discovered entries");
                InputOption::Empty
            }
            Some(RawInput::List(paths)) => InputOption::List(paths),
            Some(RawInput::Map(entries)) => InputOption::Map(entries),
        }
    }
}

impl<'de> Deserialize<'de> for InputOption {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<RawInput>::deserialize(deserializer).map(Into::into)
    }
}

impl Serialize for InputOption {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            InputOption::Empty => serializer.serialize_none(),
            InputOption::List(paths) => paths.serialize(serializer),
            InputOption::Map(entries) => entries.serialize(serializer),
        }
    }
}
