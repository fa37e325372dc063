use anyhow::Context;
use dotboy::{RunConfig, DEFAULT_FRAMES};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let Some(rom_path) = args.next() else {
        eprintln!(
            "No ROM path provided.\n\
             Usage: dotboy <rom> [frames]\n\
             For example: dotboy path/to/your.gb 120"
        );
        std::process::exit(1);
    };
    let frames = match args.next() {
        Some(arg) => arg
            .parse()
            .with_context(|| format!("invalid frame count '{arg}'"))?,
        None => DEFAULT_FRAMES,
    };

    let config = RunConfig::builder()
        .rom_path(rom_path)
        .frames(frames)
        .build();
    let summary = dotboy::run(&config)?;
    if config.dump_registers {
        println!("{summary}");
    }
    Ok(())
}
