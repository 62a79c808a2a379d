use crate::{DescriptionPair, DescriptionRequest, NewGeneratedDescription};

#[test]
fn test_saved_record_copies_request_and_marks_saved() {
    let request = DescriptionRequest::new(
        "Neon Ledger",
        "data",
        vec!["Python".into(), "Pandas".into()],
        vec![],
    );
    let pair = DescriptionPair::new("A ledger.", "Three paragraphs.");

    let record = NewGeneratedDescription::saved(pair, request, Some(7));

    assert!(record.saved);
    assert_eq!(record.project_type, "data");
    assert_eq!(record.project_title, "Neon Ledger");
    assert_eq!(record.technologies, vec!["Python", "Pandas"]);
    assert!(record.features.is_empty());
    assert_eq!(record.user_id, Some(7));
}
