use serde::{Deserialize, Serialize};

/// One of the three inputs the prediction endpoint takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputField {
    Age,
    Height,
    Weight,
}

impl InputField {
    /// Fields in query order.
    pub const ALL: [InputField; 3] = [InputField::Age, InputField::Height, InputField::Weight];

    /// Query-string key sent to the endpoint.
    pub fn key(self) -> &'static str {
        match self {
            Self::Age => "age",
            Self::Height => "height",
            Self::Weight => "weight",
        }
    }

    /// Human-readable label, with unit where the field has one.
    pub fn label(self) -> &'static str {
        match self {
            Self::Age => "Age",
            Self::Height => "Height (cm)",
            Self::Weight => "Weight (kg)",
        }
    }
}

impl std::fmt::Display for InputField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// The three raw field values exactly as typed.
///
/// No numeric parsing happens here. Any string, including garbage, is
/// forwarded to the endpoint as long as it is non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputSet {
    pub age: String,
    pub height: String,
    pub weight: String,
}

impl InputSet {
    pub fn new(
        age: impl Into<String>,
        height: impl Into<String>,
        weight: impl Into<String>,
    ) -> Self {
        Self {
            age: age.into(),
            height: height.into(),
            weight: weight.into(),
        }
    }

    pub fn get(&self, field: InputField) -> &str {
        match field {
            InputField::Age => &self.age,
            InputField::Height => &self.height,
            InputField::Weight => &self.weight,
        }
    }

    pub fn set(&mut self, field: InputField, value: impl Into<String>) {
        let value = value.into();
        match field {
            InputField::Age => self.age = value,
            InputField::Height => self.height = value,
            InputField::Weight => self.weight = value,
        }
    }

    /// Copy with one field replaced.
    pub fn with(&self, field: InputField, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.set(field, value);
        next
    }

    /// True when every field is non-empty. This is the only submission gate.
    pub fn is_complete(&self) -> bool {
        !self.age.is_empty() && !self.height.is_empty() && !self.weight.is_empty()
    }

    /// Fields that are still empty, in query order.
    pub fn missing_fields(&self) -> Vec<InputField> {
        InputField::ALL
            .into_iter()
            .filter(|f| self.get(*f).is_empty())
            .collect()
    }

    /// Key/value pairs in query order.
    pub fn pairs(&self) -> [(&'static str, &str); 3] {
        InputField::ALL.map(|f| (f.key(), self.get(f)))
    }
}
