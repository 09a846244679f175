mod support;

use gnomon::DialError;
use gnomon::declination::DeclinationSet;
use gnomon::io::record::SundialRecord;
use support::declining_dial;

#[test]
fn record_round_trips_through_json() {
    let dial = declining_dial();
    let declinations = DeclinationSet::standard();
    let hour_lines = dial.compute_hour_lines(&declinations);

    let json = SundialRecord::new(&dial, &hour_lines).to_json().unwrap();
    let (restored_dial, restored_lines) =
        SundialRecord::from_json(&json).unwrap().into_parts().unwrap();

    assert_eq!(restored_dial, dial);
    assert_eq!(restored_lines.len(), 24);
    for (line, restored) in hour_lines.iter().zip(restored_lines.iter()) {
        assert_eq!(line.offset(), restored.offset());
        assert_eq!(line.len(), restored.len());
        for (degrees, point) in line.iter() {
            assert_eq!(restored.get(degrees), Some(point));
        }
    }
}

#[test]
fn record_keys_are_the_display_degrees() {
    let dial = support::direct_dial();
    let declinations = DeclinationSet::standard();
    let hour_lines = dial.compute_hour_lines(&declinations);
    let record = SundialRecord::new(&dial, &hour_lines);
    let noon = &record.hour_lines[12];
    assert!(noon.contains_key("0"));
    assert!(noon.contains_key("-23.44"));
    assert_eq!(record.stylus_plane_sine, dial.stylus_plane_sine());
}

#[test]
fn missing_fields_fail_to_decode() {
    assert!(matches!(
        SundialRecord::from_json("{}"),
        Err(DialError::Json(_))
    ));
}

#[test]
fn bad_declination_keys_are_malformed() {
    let dial = support::direct_dial();
    let hour_lines = dial.compute_hour_lines(&DeclinationSet::standard());
    let mut record = SundialRecord::new(&dial, &hour_lines);
    record.hour_lines[0].insert("not-a-number".into(), (1.0, 2.0));
    assert!(matches!(
        record.into_parts(),
        Err(DialError::MalformedRecord(_))
    ));
}

#[test]
fn truncated_hour_sequences_are_malformed() {
    let dial = support::direct_dial();
    let hour_lines = dial.compute_hour_lines(&DeclinationSet::standard());
    let mut record = SundialRecord::new(&dial, &hour_lines);
    record.hour_lines.pop();
    assert!(matches!(
        record.into_parts(),
        Err(DialError::MalformedRecord(_))
    ));
}
