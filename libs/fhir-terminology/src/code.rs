//! The generic coded value type and its builder.

use serde::de;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::coding::Coding;
use crate::error::{Error, Result};
use crate::extension::Extension;
use crate::vocabulary::Vocabulary;

/// One instance of a coded field, drawn from the closed vocabulary `V`.
///
/// Immutable after construction. Identity is structural over the
/// `(id, extensions, value)` triple; the system URI is a property of `V`
/// itself and does not participate in equality.
///
/// A `Code` without a value is legal: it models a primitive element that
/// carries only an id or extensions. An *absent field* is `Option<Code<V>>`
/// at the call site, which is why [`Code::from_optional_code`] maps `None`
/// to `Ok(None)` rather than an error.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Code<V> {
    id: Option<String>,
    extensions: Vec<Extension>,
    value: Option<V>,
}

impl<V: Vocabulary> Code<V> {
    /// Wraps a vocabulary member. Total; there is no error path because the
    /// enum is closed by construction.
    ///
    /// Being `const`, this is what backs the per-member constants that
    /// vocabulary definitions pre-declare.
    pub const fn of(value: V) -> Self {
        Self {
            id: None,
            extensions: Vec::new(),
            value: Some(value),
        }
    }

    /// Parses a wire literal through the vocabulary table.
    ///
    /// Matching is byte-exact; an unknown or differently-cased literal fails
    /// with [`Error::UnrecognizedCode`].
    pub fn from_code(code: &str) -> Result<Self> {
        Ok(Self::of(V::from_code(code)?))
    }

    /// Like [`Code::from_code`], but `None` yields `Ok(None)` to support
    /// optional fields. Absence is not an error.
    pub fn from_optional_code(code: Option<&str>) -> Result<Option<Self>> {
        code.map(Self::from_code).transpose()
    }

    pub fn builder() -> CodeBuilder<V> {
        CodeBuilder::default()
    }

    /// A builder seeded with this instance's `id`, `extensions`, and
    /// `value`, for copy-with-override. The original is left untouched.
    pub fn to_builder(&self) -> CodeBuilder<V> {
        CodeBuilder {
            id: self.id.clone(),
            extensions: self.extensions.clone(),
            value: self.value,
            raw: None,
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn extensions(&self) -> &[Extension] {
        &self.extensions
    }

    pub fn value(&self) -> Option<V> {
        self.value
    }

    /// The wire-format literal, when a value is present.
    pub fn code(&self) -> Option<&'static str> {
        self.value.map(V::code)
    }

    /// The display label, when a value is present.
    pub fn display(&self) -> Option<&'static str> {
        self.value.map(V::display)
    }

    /// The system URI of the vocabulary this value belongs to.
    pub fn system(&self) -> &'static str {
        V::SYSTEM
    }

    /// Emits this value as a FHIR `Coding`, carrying the vocabulary's
    /// system URI and canonical display. `None` when no value is present.
    pub fn to_coding(&self) -> Option<Coding> {
        self.value.map(|v| Coding {
            system: Some(V::SYSTEM.to_owned()),
            version: None,
            code: Some(v.code().to_owned()),
            display: Some(v.display().to_owned()),
            user_selected: None,
        })
    }
}

impl<V: Vocabulary> From<V> for Code<V> {
    fn from(value: V) -> Self {
        Self::of(value)
    }
}

impl<V: Vocabulary> std::str::FromStr for Code<V> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_code(s)
    }
}

impl<V: Vocabulary> Serialize for Code<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self.code() {
            Some(code) => serializer.serialize_str(code),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de, V: Vocabulary> Deserialize<'de> for Code<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Self::from_code(&code).map_err(de::Error::custom)
    }
}

/// Builder for [`Code`].
///
/// The value can be supplied either as the typed enum (already valid, no
/// re-validation) or as a raw wire string, which is run through the
/// vocabulary table when [`build`](CodeBuilder::build) is called. Whichever
/// of [`value`](CodeBuilder::value) / [`code`](CodeBuilder::code) is called
/// last wins.
#[derive(Debug, Clone)]
pub struct CodeBuilder<V> {
    id: Option<String>,
    extensions: Vec<Extension>,
    value: Option<V>,
    raw: Option<String>,
}

impl<V> Default for CodeBuilder<V> {
    fn default() -> Self {
        Self {
            id: None,
            extensions: Vec::new(),
            value: None,
            raw: None,
        }
    }
}

impl<V: Vocabulary> CodeBuilder<V> {
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Appends one extension. Order is preserved.
    pub fn extension(mut self, extension: Extension) -> Self {
        self.extensions.push(extension);
        self
    }

    /// Appends every extension in `extensions`, in order. Equivalent to
    /// calling [`extension`](CodeBuilder::extension) once per entry.
    pub fn extensions<I>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = Extension>,
    {
        self.extensions.extend(extensions);
        self
    }

    /// Sets the value from the typed enum, bypassing table validation.
    pub fn value(mut self, value: V) -> Self {
        self.value = Some(value);
        self.raw = None;
        self
    }

    /// Sets the value from a raw wire string. Validation is deferred to
    /// [`build`](CodeBuilder::build).
    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.raw = Some(code.into());
        self.value = None;
        self
    }

    /// Validates any pending raw code and produces the immutable instance.
    /// Construction either yields a fully valid value or fails outright.
    pub fn build(self) -> Result<Code<V>> {
        let value = match self.raw {
            Some(raw) => Some(V::from_code(&raw)?),
            None => self.value,
        };
        Ok(Code {
            id: self.id,
            extensions: self.extensions,
            value,
        })
    }
}
