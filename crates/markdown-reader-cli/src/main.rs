use anyhow::{Context, Result};
use markdown_reader_config::Config;
use markdown_reader_engine::{
    Highlighter, LinkTarget, classify_link, extract_links, io, parse_blocks,
};
use std::{
    env,
    path::{Path, PathBuf},
    process,
};

mod render;
mod view;

const COMMANDS: &str = "<blocks|render|links|view>";

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("markdown-reader-cli");
    if args.len() != 3 {
        eprintln!("Usage: {program} {COMMANDS} <file.md>");
        process::exit(1);
    }
    let file = PathBuf::from(&args[2]);

    let config = load_config();
    let highlighter = Highlighter::with_languages(config.highlight.languages.iter().cloned());

    match args[1].as_str() {
        "blocks" => print_blocks(&file),
        "render" => print_render(&file, &highlighter, config.render.color),
        "links" => print_links(&file),
        "view" => view::run(file, highlighter),
        other => {
            eprintln!("Error: Unknown command '{other}'");
            eprintln!("Usage: {program} {COMMANDS} <file.md>");
            process::exit(1);
        }
    }
}

/// Settings from the config file, or defaults when it is absent or broken.
fn load_config() -> Config {
    match Config::load() {
        Ok(Some(config)) => {
            log::debug!("Loaded config from {}", Config::config_path().display());
            config
        }
        Ok(None) => Config::default(),
        Err(e) => {
            log::warn!("{e}; using default settings");
            Config::default()
        }
    }
}

fn read(file: &Path) -> Result<String> {
    io::read_file(file).with_context(|| format!("Failed to open {}", file.display()))
}

fn print_blocks(file: &Path) -> Result<()> {
    for block in parse_blocks(&read(file)?) {
        println!("{block:?}");
    }
    Ok(())
}

fn print_render(file: &Path, highlighter: &Highlighter, color: bool) -> Result<()> {
    let rendered = render::render_blocks(&parse_blocks(&read(file)?), highlighter);
    print!("{}", render::to_ansi(&rendered, color));
    Ok(())
}

fn print_links(file: &Path) -> Result<()> {
    for link in extract_links(&read(file)?) {
        let target = match classify_link(&link.url) {
            LinkTarget::Internal(url) => match io::navigate(&url, file) {
                Some(path) => format!("internal  {}", path.display()),
                None => format!("missing   {url}"),
            },
            LinkTarget::External(url) => format!("external  {url}"),
        };
        println!("{:>5}..{:<5} {}  ->  {target}", link.span.start, link.span.end, link.text);
    }
    Ok(())
}
