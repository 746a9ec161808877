// Record search
// Case-insensitive substring matching over a fixed set of fields

use crate::record::{Field, Record};

/// Fields a query is matched against. Address is displayed but never searched.
pub const SEARCH_FIELDS: [Field; 3] = [Field::Id, Field::Name, Field::Nic];

/// Check a record against a query that is already lower-cased.
///
/// Blank fields are skipped rather than matched as empty text.
pub fn record_matches(record: &Record, query_lower: &str) -> bool {
    SEARCH_FIELDS.iter().any(|&field| {
        let value = record.field(field);
        !value.is_blank() && value.match_text().to_lowercase().contains(query_lower)
    })
}

/// Filter records by a free-text query.
///
/// An empty query matches nothing. Order follows the input and every record
/// appears at most once.
pub fn filter_records<'a>(records: &'a [Record], query: &str) -> Vec<&'a Record> {
    if query.is_empty() {
        return Vec::new();
    }
    let query_lower = query.to_lowercase();
    records
        .iter()
        .filter(|record| record_matches(record, &query_lower))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn kamal() -> Record {
        Record::new(1, "Kamal Perera", "123", "Galle")
    }

    fn sample() -> Vec<Record> {
        vec![
            kamal(),
            Record::new("A-2", "Nimal Silva", "901234567V", "Kandy"),
            Record::new(3, "Sunil Kamalasiri", "785551234V", "Matara"),
            Record::new(4, "Kamala Devi", "", "Kamal Road"),
        ]
    }

    fn names(found: &[&Record]) -> Vec<String> {
        found.iter().map(|r| r.name.display_text()).collect()
    }

    #[test]
    fn test_single_record_scenario() {
        let records = vec![kamal()];
        assert_eq!(filter_records(&records, "kamal").len(), 1);
        assert_eq!(filter_records(&records, "999").len(), 0);
        assert_eq!(filter_records(&records, "123").len(), 1);
        assert_eq!(filter_records(&records, "1").len(), 1);
        assert!(filter_records(&records, "").is_empty());
    }

    #[test]
    fn test_address_is_not_searched() {
        let records = vec![kamal()];
        assert!(filter_records(&records, "galle").is_empty());
    }

    #[test]
    fn test_case_insensitive() {
        let records = sample();
        let lower = filter_records(&records, "kamal");
        let upper = filter_records(&records, "KAMAL");
        let mixed = filter_records(&records, "kAmAl");
        assert_eq!(lower, upper);
        assert_eq!(lower, mixed);
        assert_eq!(
            names(&lower),
            vec!["Kamal Perera", "Sunil Kamalasiri", "Kamala Devi"]
        );
    }

    #[test]
    fn test_unanchored_substring() {
        let records = sample();
        assert_eq!(names(&filter_records(&records, "silva")), vec!["Nimal Silva"]);
        assert_eq!(names(&filter_records(&records, "4567v")), vec!["Nimal Silva"]);
        assert_eq!(names(&filter_records(&records, "a-")), vec!["Nimal Silva"]);
    }

    #[test]
    fn test_results_are_an_ordered_subset() {
        let records = sample();
        for query in ["a", "1", "v", "xyz", " "] {
            let found = filter_records(&records, query);
            let mut last = None;
            for record in &found {
                let index = records
                    .iter()
                    .position(|r| std::ptr::eq(r, *record))
                    .expect("result must come from the input");
                assert!(last.map_or(true, |l| index > l), "out of order for {query:?}");
                last = Some(index);
                assert!(record_matches(record, &query.to_lowercase()));
            }
        }
    }

    #[test]
    fn test_blank_fields_are_skipped() {
        let records = vec![
            Record::new(0, "Zero", Value::Null, "x"),
            Record::new(false, "Nope", "", "x"),
        ];
        assert!(filter_records(&records, "0").is_empty());
        assert!(filter_records(&records, "false").is_empty());
        assert!(filter_records(&records, "null").is_empty());
    }

    #[test]
    fn test_numeric_and_odd_values_are_stringified() {
        let records = vec![
            Record::new(1042, "Numbered", json!(199012345678u64), "x"),
            Record::new(json!(["T", 9]), json!({"first": "Obj"}), true, "x"),
        ];
        assert_eq!(filter_records(&records, "104").len(), 1);
        assert_eq!(filter_records(&records, "345678").len(), 1);
        assert_eq!(filter_records(&records, "t,9").len(), 1);
        assert_eq!(filter_records(&records, "object").len(), 1);
        assert_eq!(filter_records(&records, "true").len(), 1);
        assert!(filter_records(&records, "first").is_empty());
    }

    #[test]
    fn test_whitespace_query_is_not_trimmed() {
        let records = sample();
        assert_eq!(filter_records(&records, " ").len(), 4);
        assert_eq!(
            names(&filter_records(&records, " kamal")),
            vec!["Sunil Kamalasiri"]
        );
    }
}
