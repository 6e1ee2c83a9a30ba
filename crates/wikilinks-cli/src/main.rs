use anyhow::Result;
use std::sync::Arc;
use std::{env, path::PathBuf, process};
use wikilinks_config::Config;
use wikilinks_engine::{InlineNode, WikiLinkOptions, WikiLinkParser, io, parse_inline};

mod render;

struct CliArgs {
    notes_path: Option<PathBuf>,
    html: bool,
}

fn parse_args(args: &[String]) -> Result<CliArgs, String> {
    let mut notes_path = None;
    let mut html = false;

    for arg in &args[1..] {
        match arg.as_str() {
            "--html" => html = true,
            other if other.starts_with('-') => {
                return Err(format!("Unknown option '{other}'"));
            }
            other => {
                if notes_path.is_some() {
                    return Err("More than one notes folder given".to_string());
                }
                notes_path = Some(PathBuf::from(other));
            }
        }
    }

    Ok(CliArgs { notes_path, html })
}

fn usage(program: &str) {
    eprintln!("Usage: {program} [notes-folder-path] [--html]");
    eprintln!();
    eprintln!("Scans every markdown file in the notes folder, resolves its wiki");
    eprintln!("links against the other notes and reports links whose target does");
    eprintln!("not exist. With --html the rendered markup for each link is");
    eprintln!("printed instead.");
}

fn options_from_config(config: &Config, permalinks: Vec<String>) -> WikiLinkOptions {
    let mut options = WikiLinkOptions::new()
        .permalinks(permalinks)
        .path_format(config.path_format)
        .alias_divider(config.alias_divider.clone());

    if let Some(class) = &config.wiki_link_class_name {
        options = options.wiki_link_class_name(class.clone());
    }
    if let Some(class) = &config.new_class_name {
        options = options.new_class_name(class.clone());
    }
    if let Some(base_url) = &config.base_url {
        let base_url = base_url.trim_end_matches('/').to_string();
        options = options.href_template(Arc::new(move |permalink: &str| {
            format!("{base_url}{permalink}")
        }));
    }

    options
}

fn run(config: &Config, html: bool) -> Result<()> {
    let mut permalinks = io::permalinks_from_vault(&config.notes_path)?;
    permalinks.extend(config.permalinks.iter().cloned());
    log::info!(
        "registry holds {} permalinks from {}",
        permalinks.len(),
        config.notes_path.display()
    );

    let parser = WikiLinkParser::new(options_from_config(config, permalinks));

    let mut total_links = 0usize;
    let mut missing_links = 0usize;

    for file in io::scan_markdown_files(&config.notes_path)? {
        let content = io::read_file(&file, &config.notes_path)?;

        for node in parse_inline(&parser, &content) {
            let InlineNode::WikiLink(link) = node else {
                continue;
            };
            total_links += 1;

            if html {
                println!("{}: {}", file, render::to_html(&link.html));
                continue;
            }

            if !link.exists {
                missing_links += 1;
                println!("{}: missing target [[{}]]", file, link.target);
            } else {
                log::debug!("{}: [[{}]] -> {}", file, link.target, link.permalink);
            }
        }
    }

    if !html {
        println!("{total_links} wiki links checked, {missing_links} missing");
    }

    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let cli = match parse_args(&args) {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("Error: {e}");
            usage(&args[0]);
            process::exit(1);
        }
    };

    let config_path = Config::config_path();
    let config;
    let from_config;

    if let Some(notes_path) = cli.notes_path {
        // CLI argument provided - use it, with defaults for everything else
        config = match Config::load_from_path(&config_path) {
            Ok(Some(mut loaded)) => {
                loaded.notes_path = notes_path;
                loaded
            }
            _ => Config::with_notes_path(notes_path),
        };
        from_config = false;
    } else {
        // No CLI argument - try config file
        match Config::load_from_path(&config_path) {
            Ok(Some(loaded)) => {
                config = loaded;
                from_config = true;
            }
            Ok(None) => {
                eprintln!("Error: No notes path provided and no config file found");
                usage(&args[0]);
                eprintln!("Or create a config file at {}", config_path.display());
                process::exit(1);
            }
            Err(e) => {
                eprintln!("Error: Failed to load config file: {e}");
                usage(&args[0]);
                process::exit(1);
            }
        }
    }

    if let Err(e) = io::validate_notes_dir(&config.notes_path) {
        let source = if from_config {
            format!(" from config file '{}'", config_path.display())
        } else {
            String::new()
        };
        eprintln!(
            "Error: Notes path '{}'{} is invalid: {e}",
            config.notes_path.display(),
            source
        );
        process::exit(1);
    }

    run(&config, cli.html)
}
