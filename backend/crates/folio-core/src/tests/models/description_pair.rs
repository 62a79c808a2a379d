use crate::{DescriptionPair, DescriptionSource, Generation};

#[test]
fn test_description_pair_is_complete() {
    assert!(DescriptionPair::new("short", "long").is_complete());
    assert!(!DescriptionPair::new("", "long").is_complete());
    assert!(!DescriptionPair::new("short", "   ").is_complete());
}

#[test]
fn test_generation_constructors_set_source() {
    let pair = DescriptionPair::new("s", "d");

    assert_eq!(
        Generation::generated(pair.clone()).source,
        DescriptionSource::Generated
    );
    assert_eq!(Generation::canned(pair.clone()).source, DescriptionSource::Canned);
    assert_eq!(
        Generation::templated(pair.clone()).source,
        DescriptionSource::Templated
    );
    assert_eq!(Generation::canned(pair.clone()).into_pair(), pair);
}

#[test]
fn test_description_source_as_str() {
    assert_eq!(DescriptionSource::Generated.as_str(), "generated");
    assert_eq!(DescriptionSource::Canned.as_str(), "canned");
    assert_eq!(DescriptionSource::Templated.as_str(), "templated");
}
