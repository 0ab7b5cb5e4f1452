use scrollstage::ChoreographyBuilder;

fn main() -> anyhow::Result<()> {
    let choreo = ChoreographyBuilder::new()
        .word_description("Fitness", "Training, das zum Alltag passt.")?
        .word_description("Organisation", "Feste Zeiten, klarer Plan.")?
        .word_description("Rehabilitation", "Schritt für Schritt zurück zu alter Stärke.")?
        .word_description("Motivation", "Dranbleiben zahlt sich aus.")?
        .word_description("Training", "Gezielt üben, besser werden.")?
        .build()?;

    println!("{}", choreo.to_json_string()?);
    Ok(())
}
