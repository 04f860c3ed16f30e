//! Lease record model and the ordered set a parse produces.

use serde::Serialize;

use crate::fields::FieldId;
use crate::parser::ParseError;

/// One parsed `lease <address> { ... }` block.
///
/// Every optional field stays `None` until a statement in the block
/// assigns it; a repeated field keeps the last value seen. Time fields
/// hold epoch seconds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LeaseRecord {
    /// Leased address from the block header.
    pub address: String,
    pub starts: Option<i64>,
    pub ends: Option<i64>,
    pub tstp: Option<i64>,
    pub cltt: Option<i64>,
    pub tsfp: Option<i64>,
    pub atsfp: Option<i64>,
    pub binding_state: Option<String>,
    pub next_binding_state: Option<String>,
    pub rewind_binding_state: Option<String>,
    pub hardware: Option<String>,
    pub client_hostname: Option<String>,
}

impl LeaseRecord {
    /// Start the record for a newly opened block; all fields unset.
    pub fn open(address: impl Into<String>) -> Self {
        LeaseRecord {
            address: address.into(),
            ..LeaseRecord::default()
        }
    }

    /// Assign epoch seconds into a time slot.
    ///
    /// Only the six time fields accept a timestamp; dispatching one to a
    /// text slot is a field-table inconsistency and is reported rather
    /// than dropped.
    pub fn set_timestamp(&mut self, field: FieldId, epoch: i64) -> Result<(), ParseError> {
        let slot = match field {
            FieldId::Starts => &mut self.starts,
            FieldId::Ends => &mut self.ends,
            FieldId::Tstp => &mut self.tstp,
            FieldId::Cltt => &mut self.cltt,
            FieldId::Tsfp => &mut self.tsfp,
            FieldId::Atsfp => &mut self.atsfp,
            other => {
                return Err(ParseError::UnexpectedState(format!(
                    "{other:?} cannot hold a timestamp"
                )))
            }
        };
        *slot = Some(epoch);
        Ok(())
    }

    /// Assign value text into a string slot.
    pub fn set_text(&mut self, field: FieldId, value: &str) -> Result<(), ParseError> {
        let slot = match field {
            FieldId::BindingState => &mut self.binding_state,
            FieldId::NextBindingState => &mut self.next_binding_state,
            FieldId::RewindBindingState => &mut self.rewind_binding_state,
            FieldId::Hardware => &mut self.hardware,
            FieldId::ClientHostname => &mut self.client_hostname,
            other => {
                return Err(ParseError::UnexpectedState(format!(
                    "{other:?} cannot hold text"
                )))
            }
        };
        *slot = Some(value.to_string());
        Ok(())
    }
}

/// A timestamp statement whose value did not match the lease time format.
///
/// The record keeps that field unset and the scan continues.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MalformedTimestamp {
    /// Address of the block the statement appeared in.
    pub address: String,
    /// Field keyword, without its indentation.
    pub keyword: &'static str,
    /// The value text as it appeared in the file.
    pub value: String,
}

/// Parsed lease records in file order.
///
/// dhcpd appends a fresh block for every binding change, so one address
/// may appear many times; every block stays a separate record and no
/// merging happens here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeaseSet {
    records: Vec<LeaseRecord>,
    malformed: Vec<MalformedTimestamp>,
}

impl LeaseSet {
    /// Take ownership of a finished record.
    pub fn append(&mut self, record: LeaseRecord) -> Result<(), ParseError> {
        self.records.try_reserve(1)?;
        self.records.push(record);
        Ok(())
    }

    /// Records as a slice, in insertion order.
    pub fn records(&self) -> &[LeaseRecord] {
        &self.records
    }

    /// Iterate records in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, LeaseRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Timestamp anomalies recovered during the scan.
    pub fn malformed_timestamps(&self) -> &[MalformedTimestamp] {
        &self.malformed
    }

    pub(crate) fn note_malformed(&mut self, entry: MalformedTimestamp) {
        self.malformed.push(entry);
    }
}

impl<'a> IntoIterator for &'a LeaseSet {
    type Item = &'a LeaseRecord;
    type IntoIter = std::slice::Iter<'a, LeaseRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::LeaseRecord;
    use crate::fields::FieldId;
    use crate::parser::ParseError;

    #[test]
    fn open_leaves_every_field_unset() {
        let record = LeaseRecord::open("10.0.0.5");
        assert_eq!(record.address, "10.0.0.5");
        assert_eq!(record.starts, None);
        assert_eq!(record.binding_state, None);
        assert_eq!(record.client_hostname, None);
    }

    #[test]
    fn reassignment_keeps_the_last_value() {
        let mut record = LeaseRecord::open("10.0.0.5");
        record.set_text(FieldId::BindingState, "active").unwrap();
        record.set_text(FieldId::BindingState, "free").unwrap();
        assert_eq!(record.binding_state.as_deref(), Some("free"));

        record.set_timestamp(FieldId::Ends, 1).unwrap();
        record.set_timestamp(FieldId::Ends, 2).unwrap();
        assert_eq!(record.ends, Some(2));
    }

    #[test]
    fn kind_mismatch_is_reported() {
        let mut record = LeaseRecord::open("10.0.0.5");
        let err = record
            .set_timestamp(FieldId::BindingState, 0)
            .expect_err("text slot must refuse a timestamp");
        assert!(matches!(err, ParseError::UnexpectedState(_)));

        let err = record
            .set_text(FieldId::Starts, "active")
            .expect_err("time slot must refuse text");
        assert!(matches!(err, ParseError::UnexpectedState(_)));
    }
}
