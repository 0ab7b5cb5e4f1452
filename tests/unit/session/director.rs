use super::*;
use crate::{choreography::dsl::ChoreographyBuilder, stage::memory::MemoryStage, stage::surface::Tag};

fn stage() -> MemoryStage {
    let mut stage = MemoryStage::new(900.0);
    stage.insert_section(Section::Hero, 0.0, 2700.0);
    stage.insert_section(Section::Formt, 3000.0, 2900.0);
    stage.set_word_widths(&[120.0, 230.0, 260.0, 180.0, 140.0]);
    stage
}

fn choreography() -> Choreography {
    ChoreographyBuilder::new()
        .word_description("Fitness", "Training, das zum Alltag passt.")
        .unwrap()
        .word_description("Motivation", "Dranbleiben zahlt sich aus.")
        .unwrap()
        .build()
        .unwrap()
}

fn drive(director: &mut ScrollDirector<MemoryStage>, section: Section, progress: f64) {
    director.host_mut().scroll_section_to(section, progress);
    director.notify_scroll();
    director.run_pending();
}

#[test]
fn construction_runs_the_initial_pass() {
    let director = ScrollDirector::new(choreography(), stage()).unwrap();
    let host = director.host();

    let junge = host.record("img-junge").unwrap();
    assert_eq!(junge.offset_x, Some(0.0));
    assert_eq!(junge.opacity, Some(1.0));
    let oma = host.record("img-oma").unwrap();
    assert_eq!(oma.offset_x, Some(-1.0));
    assert_eq!(oma.opacity, Some(0.0));
    assert!(host.has_tag("text-phase-0", Tag::Active));
    assert!(!host.has_tag("scroll-indicator", Tag::Hidden));
    assert!(!host.has_tag("main-nav", Tag::Scrolled));
    assert_eq!(host.record("formt-row").unwrap().gap_vw, Some(0.0));
}

#[test]
fn construction_rejects_an_invalid_choreography() {
    let mut bad = Choreography::default();
    bad.parallax.phase_split = 1.5;
    assert!(ScrollDirector::new(bad, stage()).is_err());
}

#[test]
fn notifications_coalesce_into_one_pass() {
    let mut director = ScrollDirector::new(choreography(), stage()).unwrap();
    assert!(!director.run_pending(), "nothing pending after construction");

    assert!(director.notify_scroll());
    for _ in 0..9 {
        assert!(!director.notify_scroll());
    }
    assert!(!director.notify_resize());

    director.host_mut().scroll_to(450.0);
    assert!(director.run_pending());
    assert!(!director.run_pending());

    let host = director.host();
    assert_eq!(host.record("img-junge").unwrap().offset_x, Some(0.5));
    assert!(host.has_tag("scroll-indicator", Tag::Hidden));
    assert!(host.has_tag("main-nav", Tag::Scrolled));
}

#[test]
fn scrolling_drives_the_actor_relay() {
    let mut director = ScrollDirector::new(choreography(), stage()).unwrap();
    let state = |d: &ScrollDirector<MemoryStage>, target: &str| {
        let rec = d.host().record(target).unwrap();
        (rec.offset_x.unwrap(), rec.opacity.unwrap())
    };

    drive(&mut director, Section::Hero, 0.25);
    assert_eq!(state(&director, "img-junge"), (0.5, 0.5));
    assert_eq!(state(&director, "img-mann"), (0.5, 0.5));
    assert_eq!(state(&director, "img-frau"), (0.0, 1.0));
    assert_eq!(state(&director, "img-oma"), (-1.0, 0.0));
    assert!(director.host().has_tag("text-phase-1", Tag::Active));
    assert!(!director.host().has_tag("text-phase-0", Tag::Active));

    drive(&mut director, Section::Hero, 0.75);
    assert_eq!(state(&director, "img-junge"), (1.0, 0.0));
    assert_eq!(state(&director, "img-mann"), (0.0, 1.0));
    assert_eq!(state(&director, "img-frau"), (-0.5, 0.5));
    assert_eq!(state(&director, "img-oma"), (-0.5, 0.5));
    assert!(director.host().has_tag("text-phase-2", Tag::Active));

    drive(&mut director, Section::Hero, 1.0);
    assert_eq!(state(&director, "img-frau"), (-1.0, 0.0));
    assert_eq!(state(&director, "img-oma"), (0.0, 1.0));
}

#[test]
fn resize_reruns_the_mapping_with_fresh_geometry() {
    let mut director = ScrollDirector::new(choreography(), stage()).unwrap();
    director.host_mut().scroll_to(450.0);
    director.notify_scroll();
    director.run_pending();
    let junge = director.host().record("img-junge").unwrap();
    assert_eq!(junge.offset_x, Some(0.5));

    director.host_mut().set_viewport_height(1800.0);
    assert!(director.notify_resize());
    assert!(director.run_pending());
    let junge = director.host().record("img-junge").unwrap();
    assert_eq!(junge.offset_x, Some(1.0), "same scroll, halved travel span");
    assert_eq!(junge.opacity, Some(0.0));
}

#[test]
fn selection_honors_the_section_gate() {
    let mut director = ScrollDirector::new(choreography(), stage()).unwrap();

    drive(&mut director, Section::Formt, 0.5);
    assert!(!director.select_word(0), "gate still closed");
    assert_eq!(director.selected_word(), None);

    drive(&mut director, Section::Formt, 0.9);
    assert!(director.select_word(0));
    assert_eq!(director.selected_word(), Some(0));
    assert!(director.host().has_tag("formt-word-fitness", Tag::Active));
    assert!(director.host().has_tag("formt-description", Tag::Visible));
    assert_eq!(
        director
            .host()
            .record("formt-desc-text")
            .unwrap()
            .text
            .as_deref(),
        Some("Training, das zum Alltag passt.")
    );

    assert!(!director.select_word(1), "word without description");
    assert_eq!(director.selected_word(), Some(0));

    assert!(director.select_word(0), "toggling off");
    assert_eq!(director.selected_word(), None);
    assert!(!director.host().has_tag("formt-word-fitness", Tag::Active));
    assert!(!director.host().has_tag("formt-description", Tag::Visible));
}

#[test]
fn leaving_the_section_drops_the_selection() {
    let mut director = ScrollDirector::new(choreography(), stage()).unwrap();

    drive(&mut director, Section::Formt, 0.9);
    assert!(director.select_word(3));
    assert!(director.host().has_tag("formt-word-motivation", Tag::Active));

    drive(&mut director, Section::Formt, 0.5);
    assert_eq!(director.selected_word(), None);
    assert!(!director.host().has_tag("formt-word-motivation", Tag::Active));
    assert!(!director.host().has_tag("formt-description", Tag::Visible));
    assert_eq!(
        director
            .host()
            .record("formt-desc-text")
            .unwrap()
            .text
            .as_deref(),
        Some("Dranbleiben zahlt sich aus."),
        "panel text stays for the fade-out"
    );
}

#[test]
fn dismissal_clears_the_selection() {
    let mut director = ScrollDirector::new(choreography(), stage()).unwrap();
    drive(&mut director, Section::Formt, 0.9);
    director.select_word(3);

    assert!(director.dismiss_selection());
    assert_eq!(director.selected_word(), None);
    assert!(!director.dismiss_selection(), "nothing left to dismiss");
}

#[test]
fn menu_toggles_and_links_close_it() {
    let mut director = ScrollDirector::new(choreography(), stage()).unwrap();

    assert!(director.toggle_menu());
    assert!(director.menu_open());
    assert!(director.host().has_tag("nav-hamburger", Tag::Active));
    assert!(director.host().has_tag("nav-links", Tag::Open));

    assert!(director.menu_link_activated());
    assert!(!director.menu_open());
    assert!(!director.host().has_tag("nav-hamburger", Tag::Active));
    assert!(!director.host().has_tag("nav-links", Tag::Open));
    assert!(!director.menu_link_activated(), "already closed");
}

#[test]
fn choreography_without_menu_ignores_menu_events() {
    let choreography = ChoreographyBuilder::new().without_menu().build().unwrap();
    let mut director = ScrollDirector::new(choreography, stage()).unwrap();
    assert!(!director.toggle_menu());
    assert!(!director.menu_open());
    assert!(director.host().record("nav-hamburger").is_none());
}

#[test]
fn reveal_latch_fires_once() {
    let mut director = ScrollDirector::new(choreography(), stage()).unwrap();

    assert!(!director.observe_reveal(0.1));
    assert!(!director.revealed());

    assert!(director.observe_reveal(0.4));
    assert!(director.revealed());
    assert!(director.host().has_tag("praxis-render", Tag::Revealed));

    assert!(!director.observe_reveal(0.9), "latch already fired");
    assert!(director.revealed());
}

#[test]
fn choreography_without_reveal_ignores_observations() {
    let choreography = ChoreographyBuilder::new().without_reveal().build().unwrap();
    let mut director = ScrollDirector::new(choreography, stage()).unwrap();
    assert!(!director.observe_reveal(1.0));
    assert!(!director.revealed());
}

#[test]
fn missing_sections_are_skipped() {
    let mut stage = MemoryStage::new(900.0);
    stage.insert_section(Section::Formt, 3000.0, 2900.0);
    stage.set_word_widths(&[120.0, 230.0, 260.0, 180.0, 140.0]);
    let mut director = ScrollDirector::new(choreography(), stage).unwrap();

    assert!(director.host().record("img-junge").is_none());

    drive(&mut director, Section::Formt, 0.9);
    assert!(director.select_word(0), "gate opens without a hero section");
}

#[test]
fn empty_stage_runs_passes_without_writing() {
    let mut director = ScrollDirector::new(choreography(), MemoryStage::new(900.0)).unwrap();
    assert!(director.host().targets().is_empty());

    director.notify_scroll();
    assert!(director.run_pending());
    assert!(director.host().targets().is_empty());
    assert!(!director.select_word(0), "no geometry means a closed gate");
}
