use clap::Parser;
use photonotes::application::{
    create_note, delete_note, edit_note, init::init, list_notes, prune_image, show_note,
    ConfigService,
};
use photonotes::cli::{format_note_detail, format_note_list, Cli, Commands, ImageArgs};
use photonotes::domain::{parse_note_id, PhotoNote};
use photonotes::error::Result;
use photonotes::infrastructure::{
    Config, FileImageImporter, ImageSource, NoteRepository, UriImageSource, Workspace,
};
use photonotes::logging::init_logging;
use std::io::{self, BufRead, Write};
use std::sync::Arc;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    init_logging();
    let cli = Cli::parse();

    let result = run(cli).await;

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Commands::Init { path }) => {
            init(&path)?;
            println!("Initialized photonotes collection at {}", path.display());
            Ok(())
        }
        Some(Commands::Config { key, value, list }) => {
            let service = ConfigService::new(Workspace::discover()?);

            if list {
                let config = service.list()?;
                println!("image_dir = {}", config.image_dir);
                println!("date_format = {}", config.date_format);
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
                Ok(())
            } else {
                println!("Usage: photonotes config [--list | <key> [<value>]]");
                println!("Valid keys: image_dir, date_format, created");
                Ok(())
            }
        }
        Some(command) => run_note_command(command).await,
        // No subcommand: show the list
        None => run_note_command(Commands::List { limit: None }).await,
    }
}

/// Open the collection, run one note command, then wait for pending writes
async fn run_note_command(command: Commands) -> Result<()> {
    let workspace = Workspace::discover()?;
    let config = workspace.load_config()?;
    let mut repository = NoteRepository::open(Arc::new(workspace.store())).await;

    let result = execute(&workspace, &config, &mut repository, command).await;

    repository.close().await;
    result
}

async fn execute(
    workspace: &Workspace,
    config: &Config,
    repository: &mut NoteRepository,
    command: Commands,
) -> Result<()> {
    match command {
        Commands::List { limit } => {
            let output = format_note_list(list_notes(repository, limit), config);
            println!("{}", output.trim_end());
        }
        Commands::Create {
            title,
            description,
            image,
        } => {
            let source = image_source(workspace, config, image);
            let id = create_note(repository, &title, &description, source.as_deref()).await?;
            println!("Created note #{}", id);
        }
        Commands::Show { id } => {
            let note = show_note(repository, parse_note_id(&id)?)?;
            print!("{}", format_note_detail(note, config));
        }
        Commands::Edit {
            id,
            title,
            description,
            image,
        } => {
            let id = parse_note_id(&id)?;
            let previous_image = repository
                .get_note_by_id(id)
                .map(|note| note.image_uri.clone());
            let source = image_source(workspace, config, image);
            let note = edit_note(
                repository,
                id,
                title.as_deref(),
                description.as_deref(),
                source.as_deref(),
            )
            .await?;
            println!("Updated note #{}", id);

            if let Some(previous) = previous_image.filter(|uri| *uri != note.image_uri) {
                prune_image(repository, &config.image_path(workspace.root()), &previous).await;
            }
        }
        Commands::Delete { id, yes } => {
            let id = parse_note_id(&id)?;
            let removed = delete_note(repository, id, |note| yes_or_ask(yes, note))?;
            match removed {
                Some(note) => {
                    println!("Deleted note #{}", note.id);
                    prune_image(repository, &config.image_path(workspace.root()), &note.image_uri)
                        .await;
                }
                None => println!("Cancelled"),
            }
        }
        Commands::Init { .. } | Commands::Config { .. } => {
            unreachable!("handled before the collection is opened")
        }
    }
    Ok(())
}

fn image_source(
    workspace: &Workspace,
    config: &Config,
    args: ImageArgs,
) -> Option<Box<dyn ImageSource>> {
    match (args.image, args.image_uri) {
        (Some(path), _) => Some(Box::new(FileImageImporter::new(
            path,
            config.image_path(workspace.root()),
        ))),
        (None, Some(uri)) => Some(Box::new(UriImageSource::new(uri))),
        (None, None) => None,
    }
}

fn yes_or_ask(yes: bool, note: &PhotoNote) -> Result<bool> {
    if yes {
        return Ok(true);
    }

    print!("Delete note #{} \"{}\"? [y/N] ", note.id, note.title);
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    let answer = answer.trim().to_ascii_lowercase();
    Ok(answer == "y" || answer == "yes")
}
