//! Stable fingerprint of a measurement set.
//!
//! `fingerprint = xxhash64(for each field in canonical order: tag [+ f64 bits])`
//!
//! Lets log lines from one calculation be correlated without writing the
//! patient's values to the log.

use xxhash_rust::xxh64::xxh64;

use crate::measurement::{ALL_FIELDS, MeasurementSet};

const TAG_ABSENT: u8 = 0x00;
const TAG_PRESENT: u8 = 0x01;

/// Compute the fingerprint of a measurement set.
///
/// Every field contributes a presence tag so that "absent" and "present
/// with value 0.0" hash differently. Values hash by bit pattern, so `0.0`
/// and `-0.0` are distinct.
pub fn measurement_fingerprint(measurements: &MeasurementSet) -> u64 {
    let mut buf = Vec::with_capacity(ALL_FIELDS.len() * 9);
    for &field in ALL_FIELDS {
        match measurements.get(field) {
            Some(v) => {
                buf.push(TAG_PRESENT);
                buf.extend_from_slice(&v.to_bits().to_le_bytes());
            }
            None => buf.push(TAG_ABSENT),
        }
    }
    xxh64(&buf, 0)
}

/// Format a fingerprint as 16 hex digits.
pub fn format_fingerprint(hash: u64) -> String {
    format!("{hash:016x}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measurement::Field;

    #[test]
    fn absent_and_zero_differ() {
        let absent = MeasurementSet::new();
        let zero = MeasurementSet::new().with(Field::Age, 0.0);
        assert_ne!(measurement_fingerprint(&absent), measurement_fingerprint(&zero));
    }

    #[test]
    fn same_values_same_fingerprint() {
        let a = MeasurementSet::new().with(Field::Alb, 40.0).with(Field::Un, 6.0);
        let b = MeasurementSet::new().with(Field::Un, 6.0).with(Field::Alb, 40.0);
        assert_eq!(measurement_fingerprint(&a), measurement_fingerprint(&b));
        assert_eq!(format_fingerprint(measurement_fingerprint(&a)).len(), 16);
    }
}
