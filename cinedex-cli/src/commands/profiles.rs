use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use cinedex_lib::settings::{Settings, load_settings_from, save_settings_to};
use cinedex_lib::{LibError, Profile, StoreFormat};

use crate::CliError;
use crate::cli_types::ProfileAction;

/// Manage the profiles saved in the settings file at `settings_path`.
pub(crate) fn run_profiles(
    action: Option<ProfileAction>,
    format: Option<StoreFormat>,
    settings_path: &Path,
) -> Result<(), CliError> {
    let action = action.unwrap_or(ProfileAction::List);
    match action {
        ProfileAction::List => {
            let settings = load_settings_from(settings_path)?;
            log_profiles(&settings);
        }
        ProfileAction::Add { name, path } => {
            let mut settings = load_settings_from(settings_path)?;
            log::info!(
                "{} Saved profile {} -> {}",
                "\u{2714}".if_supports_color(Stdout, |t| t.green()),
                name.if_supports_color(Stdout, |t| t.bold()),
                path.display()
            );
            settings.upsert(Profile::new(name, path, format));
            save_settings_to(settings_path, &settings)?;
        }
        ProfileAction::Remove { name } => {
            let mut settings = load_settings_from(settings_path)?;
            if !settings.remove(&name) {
                return Err(LibError::UnknownProfile(name).into());
            }
            save_settings_to(settings_path, &settings)?;
            log::info!("Removed profile {}", name.if_supports_color(Stdout, |t| t.bold()));
        }
        ProfileAction::Path => {
            log::info!("{}", settings_path.display());
        }
    }
    Ok(())
}

pub(crate) fn log_profiles(settings: &Settings) {
    if settings.profiles.is_empty() {
        log::info!("{}", "No profiles saved.".if_supports_color(Stdout, |t| t.dimmed()));
        return;
    }
    for (i, profile) in settings.profiles.iter().enumerate() {
        let format = profile
            .format
            .unwrap_or_else(|| StoreFormat::from_path(&profile.path));
        log::info!(
            "  {}. {} ({}: {})",
            i + 1,
            profile.name.if_supports_color(Stdout, |t| t.bold()),
            format,
            profile.path.display()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn add_then_remove_profile() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("settings.toml");

        run_profiles(
            Some(ProfileAction::Add {
                name: "Mia".into(),
                path: PathBuf::from("mia.csv"),
            }),
            None,
            &path,
        )
        .unwrap();
        let settings = load_settings_from(&path).unwrap();
        assert_eq!(settings.profiles.len(), 4);
        assert_eq!(settings.resolve("mia").unwrap().path, PathBuf::from("mia.csv"));

        run_profiles(Some(ProfileAction::Remove { name: "John".into() }), None, &path).unwrap();
        let settings = load_settings_from(&path).unwrap();
        assert!(settings.resolve("John").is_err());
        assert_eq!(settings.profiles.len(), 3);
    }

    #[test]
    fn remove_unknown_profile_fails() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("settings.toml");
        let err = run_profiles(Some(ProfileAction::Remove { name: "Nobody".into() }), None, &path)
            .unwrap_err();
        assert!(matches!(err, CliError::Lib(LibError::UnknownProfile(_))));
        assert!(!path.exists());
    }

    #[test]
    fn explicit_format_is_saved() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("settings.toml");
        run_profiles(
            Some(ProfileAction::Add {
                name: "Sara".into(),
                path: PathBuf::from("sara.data"),
            }),
            Some(StoreFormat::Json),
            &path,
        )
        .unwrap();
        let settings = load_settings_from(&path).unwrap();
        assert_eq!(settings.resolve("2").unwrap().format, Some(StoreFormat::Json));
        assert_eq!(settings.resolve("2").unwrap().path, PathBuf::from("sara.data"));
    }
}
