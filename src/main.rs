use clap::Parser;

use git_bump::bump::Bumper;
use git_bump::config;
use git_bump::git::Git2Repository;
use git_bump::resolver;
use git_bump::ui;
use git_bump::workspace::DirWorkspace;

#[derive(clap::Parser)]
#[command(
    name = "git-bump",
    about = "Bump the project version from conventional commit history"
)]
struct Args {
    #[arg(short, long, help = "Print the project's current version and exit")]
    current_version: bool,

    #[arg(short, long, help = "Print the project's next version and exit")]
    next_version: bool,

    #[arg(short, long, help = "Print the next version's incrementation type and exit")]
    incrementation_type: bool,

    #[arg(
        short,
        long,
        help = "Report the bump steps without touching the repository"
    )]
    dry_run: bool,

    #[arg(short, long, help = "Be more verbose")]
    verbose: bool,

    #[arg(long, help = "Custom configuration file path")]
    config: Option<String>,
}

fn main() {
    if let Err(e) = run() {
        ui::display_error(&e.to_string());
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = config::load_config(args.config.as_deref())?;

    let cwd = std::env::current_dir()?;
    let repo = Git2Repository::open(&cwd, config.remote.clone())?;
    let workspace = DirWorkspace::new(&cwd)?;

    let resolution = resolver::resolve(&repo, &workspace, &config.version_files)?;

    ui::display_unclassified(&resolution.unclassified);

    if args.verbose {
        ui::display_resolution(&resolution);
    }

    if args.current_version {
        println!("{}", resolution.current_version);
        return Ok(());
    }

    if args.next_version {
        println!("{}", resolution.next_version);
        return Ok(());
    }

    if args.incrementation_type {
        println!("{}", resolution.increment_type);
        return Ok(());
    }

    println!(
        "bump: {} -> {} ({})",
        resolution.current_version, resolution.next_version, resolution.increment_type
    );

    Bumper::new(args.dry_run, args.verbose).run(&resolution, &repo, &workspace)?;

    println!("done");
    Ok(())
}
