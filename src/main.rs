use clap::Parser;
use taglist::application::{ConfigService, InitService, SettingsOverrides, TagEditService};
use taglist::cli::{format_config, format_tag_list, Cli, Commands};
use taglist::error::TagListError;
use taglist::infrastructure::FileSystemRepository;
use taglist::TagConfig;

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

/// Persisted settings with command-line overrides layered on top
fn effective_config(overrides: SettingsOverrides) -> Result<TagConfig, TagListError> {
    let mut config = FileSystemRepository::load_or_default()?;
    overrides.apply(&mut config)?;
    Ok(config)
}

fn run(cli: Cli) -> Result<(), TagListError> {
    let overrides = SettingsOverrides::from(cli.settings);

    match cli.command {
        Commands::Init { path } => {
            InitService::execute(&path)?;
            println!("Initialized taglist settings at {}", path.display());
            Ok(())
        }
        Commands::Parse { inputs } => {
            let service = TagEditService::new(effective_config(overrides)?);
            let tags = service.parse(&inputs);
            println!("{}", format_tag_list(tags.as_slice()).trim_end());
            Ok(())
        }
        Commands::Normalize { inputs } => {
            let service = TagEditService::new(effective_config(overrides)?);
            println!("{}", service.normalize(&inputs));
            Ok(())
        }
        Commands::Add {
            list,
            items,
            mutation,
        } => {
            let service = TagEditService::new(effective_config(overrides)?);
            let tags = service.add(&list, &items, &mutation.pairs())?;
            println!("{}", tags);
            Ok(())
        }
        Commands::Remove {
            list,
            items,
            mutation,
        } => {
            let service = TagEditService::new(effective_config(overrides)?);
            let tags = service.remove(&list, &items, &mutation.pairs())?;
            println!("{}", tags);
            Ok(())
        }
        Commands::Combine { left, right } => {
            let service = TagEditService::new(effective_config(overrides)?);
            println!("{}", service.combine(&left, &right));
            Ok(())
        }
        Commands::Config { key, value, list } => {
            if list {
                // Show what commands would actually use, defaults included
                let config = effective_config(overrides)?;
                print!("{}", format_config(&config));
                return Ok(());
            }

            let Some(key) = key else {
                println!("Usage: taglist config [--list | <key> [<value>]]");
                println!(
                    "Valid keys: delimiter, glue, force_lowercase, force_parameterize, parser"
                );
                return Ok(());
            };

            let service = ConfigService::new(FileSystemRepository::discover()?);
            match value {
                Some(v) => {
                    service.set(&key, &v)?;
                    println!("Set {} = {}", key, v);
                }
                None => println!("{}", service.get(&key)?),
            }
            Ok(())
        }
    }
}
