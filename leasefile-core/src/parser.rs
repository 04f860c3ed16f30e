//! Two-state scan over the lease-file token stream.

use chrono::NaiveDateTime;
use thiserror::Error;

use crate::fields::{lookup, FieldKind};
use crate::record::{LeaseRecord, LeaseSet, MalformedTimestamp};
use crate::tokenizer::{skip_fields, split_fields, tokens};

/// Calendar format dhcpd writes for lease times. The text carries no zone
/// marker; dhcpd writes UTC.
const TIME_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Value dhcpd writes for a time that does not apply (non-expiring lease).
const NEVER: &str = "never";

/// Errors that abort a parse.
///
/// Per-field anomalies never abort; they are collected on the
/// [`LeaseSet`]. A caller gets either a complete set or one of these.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The result collection could not grow; no partial set is returned.
    #[error("out of memory while collecting lease records: {0}")]
    ResourceExhausted(#[from] std::collections::TryReserveError),
    /// A field rule dispatched a value to a slot of the other kind.
    #[error("lease field table inconsistency: {0}")]
    UnexpectedState(String),
}

/// Scan position: between blocks, or inside one with its record underway.
///
/// Carrying the record in the state keeps a half-built record invisible
/// outside its block.
enum State {
    Searching,
    InBlock(LeaseRecord),
}

/// Parse lease-file text into a [`LeaseSet`].
///
/// One synchronous forward pass over the token stream. Unknown statements
/// and stray `}` tokens are skipped; a block still open at end of input is
/// discarded.
pub fn parse(text: &str) -> Result<LeaseSet, ParseError> {
    let mut set = LeaseSet::default();
    let mut state = State::Searching;

    for token in tokens(text) {
        state = match state {
            State::Searching => open_block(token),
            State::InBlock(record) => consume_statement(token, record, &mut set)?,
        };
    }

    Ok(set)
}

/// `Searching` step: a `lease <address> {` header opens a block; every
/// other token is skipped.
fn open_block(token: &str) -> State {
    if !token.starts_with("lease") {
        return State::Searching;
    }

    let mut fields = split_fields(token);
    fields.next(); // the `lease` keyword itself
    match fields.next() {
        Some(address) => State::InBlock(LeaseRecord::open(address)),
        // A header without an address has no record to build.
        None => State::Searching,
    }
}

/// `InBlock` step: `}` finalizes the record into the set, a recognized
/// statement assigns a slot, anything else is a field this parser does not
/// know about.
fn consume_statement(
    token: &str,
    mut record: LeaseRecord,
    set: &mut LeaseSet,
) -> Result<State, ParseError> {
    if token.starts_with('}') {
        set.append(record)?;
        return Ok(State::Searching);
    }

    if let Some(rule) = lookup(token) {
        match rule.kind {
            FieldKind::Timestamp => {
                // Skip the keyword and the day-of-week column; the value is
                // the remainder of the token.
                let value = skip_fields(token, rule.value_column + 1).unwrap_or("");
                match parse_timestamp(value) {
                    Some(epoch) => record.set_timestamp(rule.field, epoch)?,
                    None if value == NEVER => {}
                    None => set.note_malformed(MalformedTimestamp {
                        address: record.address.clone(),
                        keyword: rule.keyword.trim_start(),
                        value: value.to_string(),
                    }),
                }
            }
            FieldKind::Text => {
                if let Some(value) = split_fields(token).nth(rule.value_column) {
                    record.set_text(rule.field, value)?;
                }
            }
        }
    }

    Ok(State::InBlock(record))
}

fn parse_timestamp(value: &str) -> Option<i64> {
    NaiveDateTime::parse_from_str(value, TIME_FORMAT)
        .ok()
        .map(|time| time.and_utc().timestamp())
}
