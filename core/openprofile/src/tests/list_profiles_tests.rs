use std::sync::Arc;

use common::error::Error;

use super::support::{list_profiles, FixedDumpSource, DEV_DUMP, TWO_PROFILES_DUMP};
use crate::domain::FeedbackItem;

fn titles(items: &[FeedbackItem]) -> Vec<String> {
    items.iter().map(|i| i.title.clone()).collect()
}

#[test]
fn test_empty_query_lists_all_in_order() {
    let uc = list_profiles(Arc::new(FixedDumpSource::with_text(TWO_PROFILES_DUMP)));
    let items = uc.run("").unwrap();
    assert_eq!(titles(&items), vec!["Personal", "Work"]);
    assert_eq!(items[1].subtitle, "office vpn");
    assert_eq!(items[1].arg, "Work");
    assert!(items.iter().all(|i| i.valid));
}

#[test]
fn test_dev_dump_maps_to_single_item() {
    let uc = list_profiles(Arc::new(FixedDumpSource::with_text(DEV_DUMP)));
    let items = uc.run("").unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].title, "Dev");
    assert_eq!(items[0].subtitle, "work cli");
}

#[test]
fn test_query_filters_by_tag() {
    let uc = list_profiles(Arc::new(FixedDumpSource::with_text(TWO_PROFILES_DUMP)));
    assert_eq!(titles(&uc.run("VPN").unwrap()), vec!["Work"]);
    assert_eq!(titles(&uc.run("home").unwrap()), vec!["Personal"]);
    assert!(uc.run("prod").unwrap().is_empty());
}

#[test]
fn test_query_case_does_not_matter() {
    let uc = list_profiles(Arc::new(FixedDumpSource::with_text(TWO_PROFILES_DUMP)));
    assert_eq!(uc.run("WORK").unwrap(), uc.run("work").unwrap());
}

#[test]
fn test_unterminated_last_block_is_dropped() {
    let dump = format!("{}\"Name\" => \"Half\"\n\"Tags\" => [\n0 => \"x\"\n", DEV_DUMP);
    let uc = list_profiles(Arc::new(FixedDumpSource::with_text(&dump)));
    assert_eq!(titles(&uc.run("").unwrap()), vec!["Dev"]);
}

#[test]
fn test_source_missing_propagates() {
    let uc = list_profiles(Arc::new(FixedDumpSource::missing()));
    let err = uc.run("").unwrap_err();
    assert!(matches!(err, Error::SourceMissing(_)));
}

#[test]
fn test_undecodable_dump_is_io_error() {
    let uc = list_profiles(Arc::new(FixedDumpSource::with_bytes(&[0x22, 0xff, 0xfe, 0x0a])));
    let err = uc.run("").unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}
