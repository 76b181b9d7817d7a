//! Todo lists, that tasks belong to

use std::error::Error;
use std::fmt::{Display, Formatter};

use csscolorparser::Color;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde::de::Error as _;
use uuid::Uuid;


/// The identifier of a todo list
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId {
    content: String,
}
impl TodoId {
    /// Generate a random TodoId.
    pub fn random() -> Self {
        let random = Uuid::new_v4().to_hyphenated().to_string();
        Self { content: random }
    }

    pub fn as_str(&self) -> &str {
        &self.content
    }
}
impl From<String> for TodoId {
    fn from(content: String) -> Self {
        Self { content }
    }
}
impl From<&str> for TodoId {
    fn from(content: &str) -> Self {
        Self { content: content.to_string() }
    }
}
impl Display for TodoId {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.content)
    }
}


/// A todo list. Tasks refer to it through their `todo_id`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    id: TodoId,
    #[serde(default)]
    name: String,
    /// The background colour of this list
    #[serde(serialize_with = "serialize_color", deserialize_with = "deserialize_color")]
    bg: Color,
}

impl Todo {
    /// Create a brand new todo list, with a random ID
    pub fn new(name: String, bg: Color) -> Self {
        Self::new_with_id(TodoId::random(), name, bg)
    }

    pub fn new_with_id(id: TodoId, name: String, bg: Color) -> Self {
        Self { id, name, bg }
    }

    /// Create a todo list whose colour is given as a CSS colour string (`"#ff8800"`, `"rgb(0, 128, 128)"`...)
    pub fn with_css_color(id: TodoId, name: String, bg: &str) -> Result<Self, Box<dyn Error>> {
        let bg = csscolorparser::parse(bg)
            .map_err(|err| format!("Invalid colour {:?} for todo {}: {}", bg, id, err))?;
        Ok(Self::new_with_id(id, name, bg))
    }

    pub fn id(&self) -> &TodoId  { &self.id   }
    pub fn name(&self) -> &str   { &self.name }
    pub fn bg(&self) -> &Color   { &self.bg   }

    /// The background colour, as a `#rrggbb` (or `#rrggbbaa`) string
    pub fn bg_hex(&self) -> String {
        self.bg.to_hex_string()
    }

    pub fn set_bg(&mut self, bg: Color) {
        self.bg = bg;
    }
}

fn serialize_color<S>(color: &Color, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&color.to_hex_string())
}

fn deserialize_color<'de, D>(deserializer: D) -> Result<Color, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    csscolorparser::parse(&s).map_err(|err| D::Error::custom(format!("Invalid colour {:?}: {}", s, err)))
}


/// Find the todo list a task refers to
pub fn find_todo<'a>(todos: &'a [Todo], id: &TodoId) -> Option<&'a Todo> {
    todos.iter().find(|todo| todo.id() == id)
}
