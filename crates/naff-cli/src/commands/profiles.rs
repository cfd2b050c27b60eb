//! Profile management commands.

use clap::{Args, Subcommand};
use naff_config::{
    AnalysisProfile, ensure_user_profiles_dir, factory_profiles, get_factory_profile,
    list_user_profiles, profile_name_from_path, user_profiles_dir,
};

use super::common::load_profile;

#[derive(Args)]
pub struct ProfilesArgs {
    #[command(subcommand)]
    command: Option<ProfilesCommand>,
}

#[derive(Subcommand)]
enum ProfilesCommand {
    /// List factory and user profiles
    List,

    /// Print a profile as TOML
    Show {
        /// Profile name or path
        name: String,
    },

    /// Copy a profile into the user profiles directory for editing
    Copy {
        /// Source profile name or path
        source: String,

        /// Name of the copy (defaults to the source name)
        #[arg(short, long)]
        name: Option<String>,

        /// Overwrite an existing user profile
        #[arg(long)]
        force: bool,
    },

    /// Show the profile directory
    Paths,
}

pub fn run(args: ProfilesArgs) -> anyhow::Result<()> {
    match args.command.unwrap_or(ProfilesCommand::List) {
        ProfilesCommand::List => list_profiles(),
        ProfilesCommand::Show { name } => show_profile(&name),
        ProfilesCommand::Copy {
            source,
            name,
            force,
        } => copy_profile(&source, name.as_deref(), force),
        ProfilesCommand::Paths => {
            println!("User profiles: {}", user_profiles_dir().display());
            Ok(())
        }
    }
}

fn list_profiles() -> anyhow::Result<()> {
    println!("Factory Profiles:");
    println!("=================");
    for profile in factory_profiles() {
        let desc = profile.description.as_deref().unwrap_or("");
        println!("  {:20} - {}", profile.name, desc);
    }
    println!();

    println!("User Profiles:");
    println!("==============");
    let user_profiles = list_user_profiles();
    if user_profiles.is_empty() {
        println!("  (none)");
    }
    for path in user_profiles {
        let name = profile_name_from_path(&path).unwrap_or_else(|| "unknown".to_string());
        match AnalysisProfile::load(&path) {
            Ok(profile) => {
                let desc = profile.description.as_deref().unwrap_or("");
                println!("  {:20} - {}", name, desc);
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "unreadable profile");
                println!("  {:20} - (error loading)", name);
            }
        }
    }

    Ok(())
}

fn show_profile(name: &str) -> anyhow::Result<()> {
    let profile = load_profile(name)?;
    print!("{}", profile.to_toml()?);
    Ok(())
}

fn copy_profile(source: &str, name: Option<&str>, force: bool) -> anyhow::Result<()> {
    let mut profile = load_profile(source)?;
    if let Some(name) = name {
        profile.name = name.to_string();
    }
    if get_factory_profile(&profile.name).is_some() {
        anyhow::bail!(
            "'{}' is a factory profile name; choose another with --name.",
            profile.name
        );
    }

    let path = ensure_user_profiles_dir()?.join(format!("{}.toml", profile.name));
    if path.exists() && !force {
        anyhow::bail!(
            "Profile '{}' already exists. Use --force to overwrite.",
            profile.name
        );
    }

    profile.save(&path)?;
    println!("Saved profile '{}' to {}", profile.name, path.display());
    Ok(())
}
