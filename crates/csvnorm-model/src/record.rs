//! The fixed eight-column record.

use std::fmt;

/// Number of fields in every data row.
pub const FIELD_COUNT: usize = 8;

/// Column positions of a [`Record`], in input order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Column {
    Timestamp,
    Address,
    Zip,
    FullName,
    FooDuration,
    BarDuration,
    TotalDuration,
    Notes,
}

impl Column {
    /// All columns in input order.
    pub const ALL: [Column; FIELD_COUNT] = [
        Column::Timestamp,
        Column::Address,
        Column::Zip,
        Column::FullName,
        Column::FooDuration,
        Column::BarDuration,
        Column::TotalDuration,
        Column::Notes,
    ];

    /// Zero-based position of the column in a row.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Canonical header label.
    pub fn name(self) -> &'static str {
        match self {
            Column::Timestamp => "Timestamp",
            Column::Address => "Address",
            Column::Zip => "ZIP",
            Column::FullName => "FullName",
            Column::FooDuration => "FooDuration",
            Column::BarDuration => "BarDuration",
            Column::TotalDuration => "TotalDuration",
            Column::Notes => "Notes",
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One data row, marshalled into named fields.
///
/// A record is built fresh for each input row, normalized at most once and
/// serialized back with [`Record::fields`]. Width is fixed by the type: rows
/// of the wrong length are rejected before a record exists.
///
/// Normalization rewrites fields in place. A record whose normalization
/// failed may hold a mix of rewritten and original values and must not be
/// emitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    pub timestamp: String,
    pub address: String,
    pub zip: String,
    pub full_name: String,
    pub foo_duration: String,
    pub bar_duration: String,
    pub total_duration: String,
    pub notes: String,
}

impl Record {
    /// Build a record from one row of validated fields.
    pub fn from_fields(fields: [String; FIELD_COUNT]) -> Self {
        let [
            timestamp,
            address,
            zip,
            full_name,
            foo_duration,
            bar_duration,
            total_duration,
            notes,
        ] = fields;
        Self {
            timestamp,
            address,
            zip,
            full_name,
            foo_duration,
            bar_duration,
            total_duration,
            notes,
        }
    }

    /// Current field values in column order, ready for a CSV writer.
    pub fn fields(&self) -> [&str; FIELD_COUNT] {
        [
            &self.timestamp,
            &self.address,
            &self.zip,
            &self.full_name,
            &self.foo_duration,
            &self.bar_duration,
            &self.total_duration,
            &self.notes,
        ]
    }

    /// Consume the record, returning owned field values in column order.
    pub fn into_fields(self) -> [String; FIELD_COUNT] {
        [
            self.timestamp,
            self.address,
            self.zip,
            self.full_name,
            self.foo_duration,
            self.bar_duration,
            self.total_duration,
            self.notes,
        ]
    }

    pub fn get(&self, column: Column) -> &str {
        self.fields()[column.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_fields() -> [String; FIELD_COUNT] {
        [
            "3/12/14 12:00:00 AM",
            "1313 Mockingbird Lane, Mockingbird Heights, CA",
            "1234",
            "Herman Munster",
            "1:23:32.123",
            "1:32:33.123",
            "zzsasdfa",
            "This is some Unicode right here. ü ¡! 😀",
        ]
        .map(String::from)
    }

    #[test]
    fn test_from_fields_preserves_order() {
        let record = Record::from_fields(sample_fields());
        assert_eq!(record.timestamp, "3/12/14 12:00:00 AM");
        assert_eq!(record.zip, "1234");
        assert_eq!(record.full_name, "Herman Munster");
        assert_eq!(record.total_duration, "zzsasdfa");
        assert_eq!(record.notes, "This is some Unicode right here. ü ¡! 😀");
    }

    #[test]
    fn test_fields_round_trip() {
        let fields = sample_fields();
        let record = Record::from_fields(fields.clone());
        let serialized = record.fields().map(String::from);
        assert_eq!(serialized, fields);
        assert_eq!(record.into_fields(), fields);
    }

    #[test]
    fn test_fields_reflect_mutation() {
        let mut record = Record::from_fields(sample_fields());
        record.zip = "01234".to_string();
        assert_eq!(record.fields()[Column::Zip.index()], "01234");
        assert_eq!(record.get(Column::Zip), "01234");
    }

    #[test]
    fn test_column_layout() {
        for (position, column) in Column::ALL.into_iter().enumerate() {
            assert_eq!(column.index(), position);
        }
        assert_eq!(Column::TotalDuration.to_string(), "TotalDuration");
    }
}
