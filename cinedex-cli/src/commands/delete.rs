use std::io::{BufRead, Write};

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use cinedex_lib::display::summary_line;
use cinedex_lib::{MovieStore, StoreError};

use crate::CliError;
use crate::prompt::Prompter;

/// Delete a movie after confirming with the user (unless `yes`).
///
/// Returns whether the movie was deleted.
pub(crate) fn run_delete<R: BufRead, W: Write>(
    store: &mut dyn MovieStore,
    title: &str,
    yes: bool,
    prompter: &mut Prompter<R, W>,
) -> Result<bool, CliError> {
    let movie = store
        .get(title)
        .ok_or_else(|| StoreError::TitleNotFound(title.to_string()))?;
    log::info!("{}", summary_line(title, movie));

    if !yes
        && !prompter.confirm(&format!(
            "Do you want to delete {title} from the movie database? (Y/N): "
        ))?
    {
        log::info!("{title} was not deleted.");
        return Ok(false);
    }

    store.delete(title)?;
    log::info!(
        "{} {} is deleted from the movie database.",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        title.if_supports_color(Stdout, |t| t.bold()),
    );
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    use cinedex_lib::{JsonStore, StoreFormat, StoreTarget, open_store};
    use tempfile::TempDir;

    fn store(tmp: &TempDir) -> Box<dyn MovieStore> {
        let target = StoreTarget::with_format(tmp.path().join("m.json"), StoreFormat::Json);
        let mut store = open_store(&target, true).unwrap();
        store.add("Alien", 1979, 8.5, "alien.jpg").unwrap();
        store
    }

    fn answers(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn declined_confirmation_keeps_movie() {
        let tmp = TempDir::new().unwrap();
        let mut store = store(&tmp);
        let deleted = run_delete(store.as_mut(), "Alien", false, &mut answers("n\n")).unwrap();
        assert!(!deleted);
        assert!(store.get("Alien").is_some());
    }

    #[test]
    fn accepted_confirmation_deletes() {
        let tmp = TempDir::new().unwrap();
        let mut store = store(&tmp);
        assert!(run_delete(store.as_mut(), "Alien", false, &mut answers("Y\n")).unwrap());
        let reopened = JsonStore::open(tmp.path().join("m.json")).unwrap();
        assert!(reopened.snapshot().is_empty());
    }

    #[test]
    fn yes_flag_skips_prompt() {
        let tmp = TempDir::new().unwrap();
        let mut store = store(&tmp);
        let mut prompter = answers("");
        assert!(run_delete(store.as_mut(), "Alien", true, &mut prompter).unwrap());
        assert!(prompter_output(prompter).is_empty());
    }

    #[test]
    fn missing_title_does_not_prompt() {
        let tmp = TempDir::new().unwrap();
        let mut store = store(&tmp);
        let mut prompter = answers("y\n");
        let err = run_delete(store.as_mut(), "Ghost", false, &mut prompter).unwrap_err();
        assert!(matches!(err, CliError::Store(StoreError::TitleNotFound(_))));
        assert!(prompter_output(prompter).is_empty());
    }

    fn prompter_output(p: Prompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(p.into_output()).unwrap()
    }
}
