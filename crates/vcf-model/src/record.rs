//! Contact records as an ordered list of typed properties.

use serde::Serialize;

/// Known vCard property identifiers.
///
/// Names outside this set are kept verbatim in [`FieldKind::Other`] so that
/// records round-trip without losing fields nothing here interprets.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Version,
    FullName,
    Name,
    Tel,
    Email,
    Org,
    Title,
    Adr,
    Note,
    Bday,
    Url,
    Photo,
    Uid,
    /// Any other property, stored upper-cased.
    Other(String),
}

impl FieldKind {
    /// Resolve a property name case-insensitively.
    pub fn from_name(name: &str) -> Self {
        let upper = name.to_ascii_uppercase();
        match upper.as_str() {
            "VERSION" => Self::Version,
            "FN" => Self::FullName,
            "N" => Self::Name,
            "TEL" => Self::Tel,
            "EMAIL" => Self::Email,
            "ORG" => Self::Org,
            "TITLE" => Self::Title,
            "ADR" => Self::Adr,
            "NOTE" => Self::Note,
            "BDAY" => Self::Bday,
            "URL" => Self::Url,
            "PHOTO" => Self::Photo,
            "UID" => Self::Uid,
            _ => Self::Other(upper),
        }
    }

    /// Canonical upper-case property name.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Version => "VERSION",
            Self::FullName => "FN",
            Self::Name => "N",
            Self::Tel => "TEL",
            Self::Email => "EMAIL",
            Self::Org => "ORG",
            Self::Title => "TITLE",
            Self::Adr => "ADR",
            Self::Note => "NOTE",
            Self::Bday => "BDAY",
            Self::Url => "URL",
            Self::Photo => "PHOTO",
            Self::Uid => "UID",
            Self::Other(name) => name,
        }
    }
}

/// A property parameter such as `TYPE=cell` or the bare 2.1 form `CELL`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Param {
    pub name: String,
    pub value: Option<String>,
}

impl Param {
    pub fn new(name: impl Into<String>, value: Option<String>) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// One content line of a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Property {
    /// Optional group prefix (`item1` in `item1.TEL:...`).
    pub group: Option<String>,
    pub kind: FieldKind,
    /// Property name as spelled in the input.
    pub name: String,
    pub params: Vec<Param>,
    /// Raw value text, escape sequences intact.
    pub value: String,
}

impl Property {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            group: None,
            kind: FieldKind::from_name(&name),
            name,
            params: Vec::new(),
            value: value.into(),
        }
    }

    #[must_use]
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    #[must_use]
    pub fn with_param(mut self, name: impl Into<String>, value: Option<String>) -> Self {
        self.params.push(Param::new(name, value));
        self
    }

    /// Value with text escapes (`\\`, `\,`, `\;`, `\n`) decoded.
    pub fn text(&self) -> String {
        unescape_text(&self.value)
    }

    /// True for vCard 2.1 `ENCODING=QUOTED-PRINTABLE` (or bare
    /// `QUOTED-PRINTABLE`) values, whose lines may end in a `=` soft break.
    pub fn is_quoted_printable(&self) -> bool {
        self.params.iter().any(|param| match &param.value {
            Some(value) => {
                param.name.eq_ignore_ascii_case("ENCODING")
                    && value.eq_ignore_ascii_case("QUOTED-PRINTABLE")
            }
            None => param.name.eq_ignore_ascii_case("QUOTED-PRINTABLE"),
        })
    }

    /// True when the raw value is empty after trimming.
    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }
}

/// Decode vCard text-value escapes. Unknown escapes are left as written.
pub fn unescape_text(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('n' | 'N') => out.push('\n'),
            Some(escaped @ ('\\' | ',' | ';' | ':')) => out.push(escaped),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

/// A parsed contact: properties in input order, repeats allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactRecord {
    properties: Vec<Property>,
}

impl ContactRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_properties(properties: Vec<Property>) -> Self {
        Self { properties }
    }

    pub fn push(&mut self, property: Property) {
        self.properties.push(property);
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    pub fn properties_mut(&mut self) -> impl Iterator<Item = &mut Property> {
        self.properties.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// All properties of one kind, in input order.
    pub fn fields<'a>(&'a self, kind: &FieldKind) -> impl Iterator<Item = &'a Property> + use<'a> {
        let kind = kind.clone();
        self.properties.iter().filter(move |p| p.kind == kind)
    }

    pub fn first(&self, kind: &FieldKind) -> Option<&Property> {
        self.fields(kind).next()
    }

    /// Decoded text of the first `FN` property.
    pub fn full_name(&self) -> Option<String> {
        self.first(&FieldKind::FullName).map(Property::text)
    }

    pub fn phones(&self) -> impl Iterator<Item = &Property> {
        self.fields(&FieldKind::Tel)
    }

    pub fn emails(&self) -> impl Iterator<Item = &Property> {
        self.fields(&FieldKind::Email)
    }
}

/// A block whose text could not be parsed into a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MalformedBlock {
    /// Lines as they appeared between the block markers, unfolded.
    pub lines: Vec<String>,
    pub error: String,
}

/// Outcome of parsing one `BEGIN:VCARD` block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RecordBlock {
    Parsed(ContactRecord),
    Malformed(MalformedBlock),
}

impl RecordBlock {
    pub fn as_record(&self) -> Option<&ContactRecord> {
        match self {
            Self::Parsed(record) => Some(record),
            Self::Malformed(_) => None,
        }
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::Malformed(_))
    }
}
