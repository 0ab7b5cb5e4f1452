use scrollstage::{Choreography, MemoryStage, ScrollDirector, Section};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let mut stage = MemoryStage::new(900.0);
    stage.insert_section(Section::Hero, 0.0, 2700.0);
    stage.insert_section(Section::Formt, 3000.0, 2900.0);
    stage.set_word_widths(&[132.0, 238.0, 291.0, 205.0, 166.0]);

    let mut director = ScrollDirector::new(Choreography::default(), stage)?;

    for p in [0.0, 0.25, 0.5, 0.75, 1.0] {
        director.host_mut().scroll_section_to(Section::Hero, p);
        director.notify_scroll();
        director.run_pending();
        if let Some(junge) = director.host().record("img-junge") {
            println!("hero {p:.2}: img-junge {junge:?}");
        }
    }

    for p in [0.0, 0.3, 0.55, 0.8, 1.0] {
        director.host_mut().scroll_section_to(Section::Formt, p);
        director.notify_scroll();
        director.run_pending();
        if let Some(rest) = director.host().record("formt-rest-fitness") {
            println!("formt {p:.2}: formt-rest-fitness {rest:?}");
        }
    }

    Ok(())
}
