//! Static table mapping recognized lease-block keywords to record slots.

/// How a recognized field's value text is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// `YYYY/MM/DD HH:MM:SS` calendar text, stored as epoch seconds.
    Timestamp,
    /// A single space-delimited word, stored verbatim.
    Text,
}

/// The [`LeaseRecord`](crate::LeaseRecord) slot a recognized keyword writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldId {
    Starts,
    Ends,
    Tstp,
    Cltt,
    Tsfp,
    Atsfp,
    BindingState,
    NextBindingState,
    RewindBindingState,
    Hardware,
    ClientHostname,
}

/// One row of the field table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    /// Leading text a statement token must match, indentation included.
    /// dhcpd writes block fields with a fixed two-space indent.
    pub keyword: &'static str,
    /// Zero-based space-delimited index of the value within the token.
    /// Multi-word keywords push the value further right; `hardware` skips
    /// its type word (`ethernet`) the same way.
    pub value_column: usize,
    pub kind: FieldKind,
    pub field: FieldId,
}

/// Recognized lease-block fields.
///
/// Matching is by token prefix, checked in table order. No keyword here is
/// a prefix of a longer one's token text, so the order carries no
/// ambiguity; it is kept stable anyway.
pub static FIELD_TABLE: &[FieldRule] = &[
    FieldRule {
        keyword: "  starts",
        value_column: 1,
        kind: FieldKind::Timestamp,
        field: FieldId::Starts,
    },
    FieldRule {
        keyword: "  tstp",
        value_column: 1,
        kind: FieldKind::Timestamp,
        field: FieldId::Tstp,
    },
    FieldRule {
        keyword: "  ends",
        value_column: 1,
        kind: FieldKind::Timestamp,
        field: FieldId::Ends,
    },
    FieldRule {
        keyword: "  cltt",
        value_column: 1,
        kind: FieldKind::Timestamp,
        field: FieldId::Cltt,
    },
    FieldRule {
        keyword: "  tsfp",
        value_column: 1,
        kind: FieldKind::Timestamp,
        field: FieldId::Tsfp,
    },
    FieldRule {
        keyword: "  atsfp",
        value_column: 1,
        kind: FieldKind::Timestamp,
        field: FieldId::Atsfp,
    },
    FieldRule {
        keyword: "  binding state",
        value_column: 2,
        kind: FieldKind::Text,
        field: FieldId::BindingState,
    },
    FieldRule {
        keyword: "  hardware",
        value_column: 2,
        kind: FieldKind::Text,
        field: FieldId::Hardware,
    },
    FieldRule {
        keyword: "  next binding state",
        value_column: 3,
        kind: FieldKind::Text,
        field: FieldId::NextBindingState,
    },
    FieldRule {
        keyword: "  rewind binding state",
        value_column: 3,
        kind: FieldKind::Text,
        field: FieldId::RewindBindingState,
    },
    FieldRule {
        keyword: "  client-hostname",
        value_column: 1,
        kind: FieldKind::Text,
        field: FieldId::ClientHostname,
    },
];

/// First rule whose keyword is a prefix of `token`, if any.
///
/// `None` marks an unrecognized statement — a field from another dhcpd
/// version, never an error.
pub fn lookup(token: &str) -> Option<&'static FieldRule> {
    FIELD_TABLE.iter().find(|rule| token.starts_with(rule.keyword))
}
