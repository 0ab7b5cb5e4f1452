use super::*;
use crate::animation::ease::Ease;

#[test]
fn default_choreography_validates() {
    assert!(Choreography::default().validate().is_ok());
}

#[test]
fn default_scripts_carry_page_constants() {
    let choreo = Choreography::default();

    let para = &choreo.parallax;
    assert_eq!(para.phase_split, 0.5);
    assert_eq!(para.text_blocks.len(), 3);
    assert_eq!(para.text_breaks, vec![0.2, 0.7]);
    assert_eq!(para.indicator_fade, 0.05);
    assert_eq!(para.nav_scroll_px, 50.0);
    assert_eq!(para.actors.len(), 4);
    assert_eq!(para.actors[0].role, ActorRole::ExitEarly);
    assert_eq!(para.actors[0].target, "img-junge");

    let formt = &choreo.formt;
    assert_eq!(formt.words.len(), 5);
    assert_eq!(formt.words[0].label, "Fitness");
    assert_eq!(formt.words[0].target, "formt-word-fitness");
    assert_eq!(formt.words[4].rest, "formt-rest-training");
    assert_eq!(formt.max_gap_vw, 2.0);
    assert_eq!(formt.gap.start, 0.0);
    assert_eq!(formt.gap.end, 0.6);
    assert_eq!(formt.rest.start, 0.3);
    assert_eq!(formt.rest.end, 0.8);
    assert_eq!(formt.revealed_min, 0.95);
    assert_eq!(formt.arrow_gate, 0.8);
    assert_eq!(formt.tagline_gate, 0.02);
    assert_eq!(formt.mission_gate, 0.85);
    assert_eq!(formt.select_gate, 0.8);
    assert_eq!(formt.stagger.base, 0.1);
    assert_eq!(formt.stagger.stride, 0.15);
    assert_eq!(formt.silhouettes.len(), 3);

    assert!(choreo.menu.is_some());
    assert!(choreo.reveal.is_some());
}

#[test]
fn json_round_trip_preserves_scripts() {
    let choreo = Choreography::default();
    let json = choreo.to_json_string().unwrap();
    let back = Choreography::from_json_str(&json).unwrap();
    assert_eq!(back.parallax.text_breaks, choreo.parallax.text_breaks);
    assert_eq!(back.formt.words.len(), choreo.formt.words.len());
    assert_eq!(back.formt.words[2].rest, choreo.formt.words[2].rest);
    assert!(back.menu.is_some());
    assert!(back.reveal.is_some());
}

#[test]
fn partial_json_fills_tuning_defaults() {
    let json = r#"{
        "parallax": {
            "actors": [{"target": "a", "role": "ExitEarly"}],
            "text_blocks": ["t0"],
            "text_breaks": [],
            "indicator": "ind",
            "nav_bar": "nav"
        },
        "formt": {
            "row": "row",
            "tagline": "tag",
            "mission": "mis",
            "words": [{"label": "Alpha", "target": "w", "rest": "r", "arrow": "ar"}],
            "panel": {"field": "pf", "text": "pt"}
        }
    }"#;
    let choreo = Choreography::from_json_str(json).unwrap();
    assert_eq!(choreo.parallax.phase_split, 0.5);
    assert_eq!(choreo.parallax.ease, Ease::InOutCubic);
    assert_eq!(choreo.formt.rest.start, 0.3);
    assert_eq!(choreo.formt.select_gate, 0.8);
    assert!(choreo.formt.silhouettes.is_empty());
    assert!(choreo.menu.is_none());
    assert!(choreo.reveal.is_none());
}

#[test]
fn malformed_json_reports_serde_error() {
    let err = Choreography::from_json_str("{not json").unwrap_err();
    assert!(matches!(err, StageError::Serde(_)));
}

#[test]
fn phase_split_bounds_are_rejected() {
    for bad in [0.0, 1.0, -0.2, f64::NAN] {
        let script = ParallaxScript {
            phase_split: bad,
            ..ParallaxScript::default()
        };
        let err = script.validate().unwrap_err();
        assert!(err.to_string().contains("phase_split"), "split {bad}");
    }
}

#[test]
fn text_breaks_must_match_blocks() {
    let script = ParallaxScript {
        text_breaks: vec![0.5],
        ..ParallaxScript::default()
    };
    assert!(script.validate().is_err());
}

#[test]
fn text_breaks_must_strictly_increase() {
    for bad in [vec![0.7, 0.2], vec![0.2, 0.2]] {
        let script = ParallaxScript {
            text_breaks: bad,
            ..ParallaxScript::default()
        };
        assert!(script.validate().is_err());
    }
}

#[test]
fn text_breaks_must_be_inside_unit_interval() {
    let script = ParallaxScript {
        text_breaks: vec![0.2, 1.0],
        ..ParallaxScript::default()
    };
    assert!(script.validate().is_err());
}

#[test]
fn duplicate_actor_targets_are_rejected() {
    let mut script = ParallaxScript::default();
    script.actors[1].target = script.actors[0].target.clone();
    assert!(script.validate().is_err());
}

#[test]
fn actors_are_required() {
    let script = ParallaxScript {
        actors: Vec::new(),
        ..ParallaxScript::default()
    };
    assert!(script.validate().is_err());
}

#[test]
fn words_are_required() {
    let script = FormtScript {
        words: Vec::new(),
        ..FormtScript::default()
    };
    assert!(script.validate().is_err());
}

#[test]
fn duplicate_word_targets_are_rejected() {
    let mut script = FormtScript::default();
    script.words[1].rest = script.words[0].rest.clone();
    assert!(script.validate().is_err());
}

#[test]
fn inverted_rest_window_is_rejected() {
    let script = FormtScript {
        rest: Segment::new(0.8, 0.3, Ease::Linear),
        ..FormtScript::default()
    };
    assert!(script.validate().is_err());
}

#[test]
fn gates_must_be_in_unit_interval() {
    let script = FormtScript {
        select_gate: 1.5,
        ..FormtScript::default()
    };
    assert!(script.validate().is_err());
}

#[test]
fn revealed_min_must_be_inside_unit_interval() {
    let script = FormtScript {
        revealed_min: 1.0,
        ..FormtScript::default()
    };
    assert!(script.validate().is_err());
}

#[test]
fn menu_targets_must_be_non_empty() {
    let choreo = Choreography {
        menu: Some(MenuScript {
            hamburger: String::new(),
            links: "nav-links".to_owned(),
        }),
        ..Choreography::default()
    };
    assert!(choreo.validate().is_err());
}

#[test]
fn reveal_threshold_must_be_in_unit_interval() {
    let choreo = Choreography {
        reveal: Some(RevealScript {
            target: "praxis-render".to_owned(),
            min_visible: 2.0,
        }),
        ..Choreography::default()
    };
    assert!(choreo.validate().is_err());
}
