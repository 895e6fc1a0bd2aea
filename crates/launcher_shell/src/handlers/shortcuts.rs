//! Alias-resolving handlers: programs, folders, websites, themes, and `addshortcut`.

use launcher_contract::{ShellError, ShortcutCategory};
use launcher_shortcuts::normalize_alias;

use crate::context::ExecutionContext;

const ADD_SHORTCUT_USAGE: &str = "Usage: addshortcut <type> <shortcut_alias> <shortcutpath/url>";

fn first_argument(arguments: &[String]) -> &str {
    arguments.first().map(|arg| arg.trim()).unwrap_or_default()
}

pub(crate) fn open_program(
    arguments: &[String],
    ctx: &mut ExecutionContext<'_>,
) -> Result<(), ShellError> {
    let alias = first_argument(arguments);
    ctx.info(format!("Opening program: {alias}"));
    let command_line = ctx
        .store
        .shortcuts()
        .lookup(ShortcutCategory::Programs, alias)
        .ok_or_else(|| {
            ShellError::lookup(format!("Error: Program path '{alias}' not found in shortcuts."))
        })?
        .to_string();
    let output = ctx
        .services
        .processes
        .run_shell(&command_line)
        .map_err(|err| ShellError::execution(format!("Error: {err}")))?;
    ctx.info(format!("Output:\n{}", output.text()));
    Ok(())
}

pub(crate) fn open_folder(
    arguments: &[String],
    ctx: &mut ExecutionContext<'_>,
) -> Result<(), ShellError> {
    let alias = first_argument(arguments);
    ctx.info(format!("Opening folder: {alias}"));
    let path = ctx
        .store
        .shortcuts()
        .lookup(ShortcutCategory::Folders, alias)
        .ok_or_else(|| {
            ShellError::lookup(format!("Error: Folder path '{alias}' not found in shortcuts."))
        })?;
    ctx.services
        .opener
        .open_folder(path)
        .map_err(|err| ShellError::execution(format!("Error: {err}")))
}

pub(crate) fn open_website(
    arguments: &[String],
    ctx: &mut ExecutionContext<'_>,
) -> Result<(), ShellError> {
    let alias = first_argument(arguments);
    ctx.info(format!("Opening website: {alias}"));
    let url = ctx
        .store
        .shortcuts()
        .lookup(ShortcutCategory::Websites, alias)
        .ok_or_else(|| ShellError::lookup(format!("Error: Website shortcut '{alias}' not found.")))?;
    ctx.services.opener.open_url(url).map_err(|err| {
        ShellError::execution(format!("Error opening website '{alias}': {err}"))
    })?;
    ctx.info(format!("Website '{alias}' opened successfully."));
    Ok(())
}

pub(crate) fn change_theme(
    arguments: &[String],
    ctx: &mut ExecutionContext<'_>,
) -> Result<(), ShellError> {
    let name = first_argument(arguments);
    ctx.info(format!("Changing theme to: {name}"));
    let colors = ctx.store.shortcuts().theme(name).cloned().ok_or_else(|| {
        ShellError::lookup(format!(
            "Error: Theme '{name}' not found in available themes."
        ))
    })?;
    ctx.services
        .ui
        .apply_theme(&normalize_alias(name), &colors)
        .map_err(|err| ShellError::execution(format!("Error applying theme: {err}")))?;
    if let Err(err) = ctx.store.save_last_theme(name) {
        tracing::warn!("{err}; last theme not saved");
    }
    ctx.info(format!("Theme '{name}' applied successfully."));
    Ok(())
}

pub(crate) fn add_shortcut(
    arguments: &[String],
    ctx: &mut ExecutionContext<'_>,
) -> Result<(), ShellError> {
    let [kind, alias, target @ ..] = arguments else {
        return Err(ShellError::usage(ADD_SHORTCUT_USAGE));
    };
    if target.is_empty() {
        return Err(ShellError::usage(ADD_SHORTCUT_USAGE));
    }
    let kind = kind.to_lowercase();
    let category = ShortcutCategory::from_command_word(&kind).ok_or_else(|| {
        ShellError::usage(format!(
            "Invalid shortcut type. Must be one of: {}",
            ShortcutCategory::ADDABLE_WORDS.join(", ")
        ))
    })?;
    ctx.store.add(category, alias, &target.join(" "))?;
    ctx.info(format!(
        "Shortcut '{}' added successfully for {kind}.",
        normalize_alias(alias)
    ));
    Ok(())
}

pub(crate) fn display_shortcuts(ctx: &mut ExecutionContext<'_>) -> Result<(), ShellError> {
    let shortcuts = ctx.store.shortcuts();
    let sections = [
        ("Program", &shortcuts.programs),
        ("Folder", &shortcuts.folders),
        ("Website", &shortcuts.websites),
    ]
    .into_iter()
    .map(|(label, aliases)| {
        if aliases.is_empty() {
            format!("No {} shortcuts available.", label.to_lowercase())
        } else {
            let entries = aliases
                .iter()
                .map(|(alias, target)| format!("{alias}: {target}"))
                .collect::<Vec<_>>()
                .join("\n");
            format!("{label} Shortcuts:\n{entries}")
        }
    })
    .collect::<Vec<_>>();
    ctx.info(sections.join("\n\n"));
    Ok(())
}

pub(crate) fn show_themes(ctx: &mut ExecutionContext<'_>) -> Result<(), ShellError> {
    let themes = &ctx.store.shortcuts().themes;
    let text = if themes.is_empty() {
        "No themes available.".to_string()
    } else {
        let entries = themes
            .iter()
            .map(|(name, colors)| {
                format!(
                    "{name}: bg={}, fg={}",
                    colors.background_color, colors.foreground_color
                )
            })
            .collect::<Vec<_>>()
            .join("\n");
        format!("Available themes:\n{entries}")
    };
    ctx.info(text);
    Ok(())
}
