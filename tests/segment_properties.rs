use proptest::prelude::*;

use broadsheet::document::{BLOCK_SEPARATOR, DEFAULT_HEADLINE, segment, split_blocks};

fn markdown_text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            "[a-zA-Z ]{0,24}",
            "#{1,3} [a-zA-Z ]{0,16}",
            Just(String::new()),
            Just("\r\n".to_string()),
            Just("- item".to_string()),
        ],
        0..12,
    )
    .prop_map(|lines| lines.join("\n"))
}

proptest! {
    #[test]
    fn headline_is_never_empty(text in markdown_text()) {
        let doc = segment(&text);
        prop_assert!(!doc.headline.trim().is_empty());
    }

    #[test]
    fn blank_input_gets_default_headline(spaces in "[ \t\n]{0,20}") {
        let doc = segment(&spaces);
        prop_assert_eq!(doc.headline.as_str(), DEFAULT_HEADLINE);
        prop_assert!(doc.standfirst.is_empty());
        prop_assert!(doc.body.is_empty());
    }

    #[test]
    fn body_blocks_survive_rejoining(text in markdown_text()) {
        let doc = segment(&text);
        let blocks = doc.body_blocks();
        let rejoined = blocks.join(BLOCK_SEPARATOR);
        prop_assert_eq!(split_blocks(&rejoined), blocks);
    }
}
