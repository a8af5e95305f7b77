use air_risk::risk::impact::{classify, classify_index, SEVERITY_LEVELS};
use proptest::prelude::*;

#[test]
fn reference_clamps() {
    assert_eq!(classify(Some(-3.0)), Some(&SEVERITY_LEVELS[0]));
    assert_eq!(classify(Some(9.0)), Some(&SEVERITY_LEVELS[5]));
    assert_eq!(classify(None), None);
}

#[test]
fn severity_descriptor_shape() {
    insta::assert_json_snapshot!(classify(Some(2.0)).unwrap(), @r###"
    {
      "index": 2,
      "label": "Unhealthy for Sensitive Groups",
      "color_class": "bg-orange-100 text-orange-800",
      "description": "Sensitive groups may experience health effects; general public is unlikely to be affected."
    }
    "###);
}

proptest! {
    #[test]
    fn integer_scores_clamp_into_table(score in any::<i64>()) {
        let level = classify_index(score);
        let expected = score.clamp(0, 5) as u8;
        prop_assert_eq!(level.index, expected);
    }

    #[test]
    fn finite_scores_always_classify(score in -1e6f64..1e6) {
        let level = classify(Some(score)).unwrap();
        prop_assert!(level.index <= 5);
        if (0.0..=5.0).contains(&score) {
            prop_assert_eq!(level.index as f64, score.round());
        }
    }
}
