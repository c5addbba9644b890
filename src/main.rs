use clap::Parser;
use vaultnote::cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    vaultnote::logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Status => vaultnote::cli::commands::status::execute(&cli),
        Commands::List => vaultnote::cli::commands::list::execute(&cli),
        Commands::Show { index } => vaultnote::cli::commands::show::execute(&cli, index),
        Commands::Save {
            ref title,
            ref content,
            index,
            lock,
        } => vaultnote::cli::commands::save::execute(&cli, title, content.as_deref(), index, lock),
        Commands::Delete { index, force } => {
            vaultnote::cli::commands::delete::execute(&cli, index, force)
        }
        Commands::Pin { ref action } => vaultnote::cli::commands::pin::execute(&cli, action),
        Commands::Export { index, ref output } => {
            vaultnote::cli::commands::export::execute(&cli, index, output.as_deref())
        }
        Commands::Import { ref file } => vaultnote::cli::commands::import_cmd::execute(&cli, file),
    };

    if let Err(e) = result {
        vaultnote::cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}
