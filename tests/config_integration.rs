use std::fs;
use std::path::PathBuf;

use tempfile::tempdir;
use todo_tui::config::{
    ConfigFlags, clear_config_flags, load_config_flags, parse_flag_tokens, save_config_flags,
};
use todo_tui::labels::Lang;
use todo_tui::ui::style::ThemeMode;

#[test]
fn test_config_file_parses_flags_and_skips_comments() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config");
    fs::write(
        &path,
        "# defaults\n--lang ja\n\n  # indented comment\n--no-mouse --theme light\n",
    )
    .unwrap();

    let flags = load_config_flags(&path).unwrap();
    assert_eq!(flags.lang, Some(Lang::Ja));
    assert_eq!(flags.theme, Some(ThemeMode::Light));
    assert!(flags.no_mouse);
    assert_eq!(flags.log_file, None);
}

#[test]
fn test_cli_flags_override_file_flags() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config");
    fs::write(&path, "--lang ja\n--log-file file.log\n--no-mouse\n").unwrap();

    let file_flags = load_config_flags(&path).unwrap();
    let cli_args = vec![
        "todo-tui".to_string(),
        "--lang".to_string(),
        "en".to_string(),
    ];
    let cli_flags = parse_flag_tokens(&cli_args);
    let merged = file_flags.union(&cli_flags);

    assert_eq!(merged.lang, Some(Lang::En));
    assert_eq!(merged.log_file, Some(PathBuf::from("file.log")));
    assert!(merged.no_mouse, "switches from the file survive");
}

#[test]
fn test_parse_flag_tokens_supports_equals_syntax() {
    let args = vec![
        "--lang=ja".to_string(),
        "--theme=dark".to_string(),
        "--log-file=todo.log".to_string(),
    ];
    let flags = parse_flag_tokens(&args);
    assert_eq!(flags.lang, Some(Lang::Ja));
    assert_eq!(flags.theme, Some(ThemeMode::Dark));
    assert_eq!(flags.log_file, Some(PathBuf::from("todo.log")));
}

#[test]
fn test_parse_flag_tokens_ignores_unrelated_arguments() {
    let args = vec![
        "todo-tui".to_string(),
        "--save".to_string(),
        "--verbose".to_string(),
        "--lang".to_string(),
    ];
    assert_eq!(parse_flag_tokens(&args), ConfigFlags::default());
}

#[test]
fn test_saved_flags_round_trip_through_local_override() {
    let dir = tempdir().unwrap();
    let global = dir.path().join("global");
    let local = dir.path().join(".todo-tuirc");

    save_config_flags(
        &global,
        &ConfigFlags {
            lang: Some(Lang::Ja),
            ..ConfigFlags::default()
        },
    )
    .unwrap();
    fs::write(&local, "--lang en\n").unwrap();

    let merged = load_config_flags(&global)
        .unwrap()
        .union(&load_config_flags(&local).unwrap());
    assert_eq!(merged.lang, Some(Lang::En));

    clear_config_flags(&global).unwrap();
    assert_eq!(load_config_flags(&global).unwrap(), ConfigFlags::default());
}

#[test]
fn test_saved_log_file_path_with_spaces_round_trips() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config");
    let flags = ConfigFlags {
        no_mouse: true,
        log_file: Some(PathBuf::from("/tmp/my logs/todo.log")),
        ..ConfigFlags::default()
    };

    save_config_flags(&path, &flags).unwrap();
    assert_eq!(load_config_flags(&path).unwrap(), flags);
}

#[test]
fn test_log_file_equals_line_keeps_spaces() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config");
    fs::write(&path, "--lang ja\n--log-file=logs dir/todo tui.log\n").unwrap();

    let flags = load_config_flags(&path).unwrap();
    assert_eq!(flags.lang, Some(Lang::Ja));
    assert_eq!(flags.log_file, Some(PathBuf::from("logs dir/todo tui.log")));
}
